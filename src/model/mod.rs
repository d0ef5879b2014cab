//! Rich-text document model for resume section content.
//!
//! This module defines the tree shape used by every rich-text field of a
//! resume (the summary and the experience / custom-section descriptions):
//! an ordered sequence of block nodes, where each block carries inline
//! text runs with optional bold/italic/underline marks. The model is a
//! plain value type; editing widgets produce it and the renderers and
//! exporters consume it.

mod document;
mod node;

pub use document::Document;
pub use node::{ListItem, Node, TextRun};
