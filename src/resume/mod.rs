//! The resume aggregate: section types and copy-on-write updates.

mod aggregate;
mod sections;

pub use aggregate::Resume;
pub use sections::{
    Certification, CustomSection, Education, Experience, Heading, Language, Skill,
};
