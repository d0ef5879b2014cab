//! Resume section types.
//!
//! All sections are plain serde-serializable values. Rich-text fields
//! (`summary`, descriptions) persist as JSON strings via
//! [`crate::codec::doc_string`], matching the field encoding the editor
//! widgets read and write. Wire field names are camelCase.

use serde::{Deserialize, Serialize};

use crate::model::Document;

/// The heading section: name and contact details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Heading {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Professional title shown under the name
    pub profession: String,

    /// City or locality line
    pub city: String,

    /// Phone number, free-form
    pub phone: String,

    /// One or more email addresses, comma separated
    pub email: String,

    /// Personal website or profile link
    pub website: String,
}

impl Heading {
    /// Return a copy with the email field normalized.
    ///
    /// The email field may hold several comma-separated addresses typed
    /// by hand. Normalization splits on `,`, trims and lowercases each
    /// part, drops empty parts, removes duplicates while preserving
    /// first-seen order, and rejoins with `", "`.
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email_list(&self.email);
        self
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        name.trim().to_string()
    }
}

/// Order-preserving deduplication of a comma-separated email list.
pub(crate) fn normalize_email_list(raw: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let part = part.trim().to_lowercase();
        if part.is_empty() || seen.contains(&part) {
            continue;
        }
        seen.push(part);
    }
    seen.join(", ")
}

/// A skill with a self-assessed proficiency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Skill name
    pub name: String,

    /// Proficiency on a 0-5 scale
    pub proficiency: u8,
}

impl Skill {
    /// Create a skill, clamping proficiency to the 0-5 scale.
    pub fn new(name: impl Into<String>, proficiency: u8) -> Self {
        Self {
            name: name.into(),
            proficiency: proficiency.min(5),
        }
    }
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Job title
    pub job_title: String,

    /// Employer name
    pub employer: String,

    /// City or location
    pub city: String,

    /// Start date, free-form (e.g. "Jan 2021")
    pub start_date: String,

    /// End date, free-form; ignored when `current` is set
    pub end_date: String,

    /// Whether this is the current position
    pub current: bool,

    /// Rich-text description
    #[serde(with = "crate::codec::doc_string")]
    pub description: Document,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    /// School or institution name
    pub school: String,

    /// Degree or program
    pub degree: String,

    /// City or location
    pub city: String,

    /// Start date, free-form
    pub start_date: String,

    /// End date, free-form; ignored when `current` is set
    pub end_date: String,

    /// Whether this program is ongoing
    pub current: bool,

    /// Rich-text description
    #[serde(with = "crate::codec::doc_string")]
    pub description: Document,
}

/// A language with a self-assessed proficiency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    /// Language name
    pub name: String,

    /// Proficiency on a 0-5 scale
    pub proficiency: u8,
}

/// A certification entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    /// Certification name
    pub name: String,

    /// Date earned, free-form
    pub date: String,
}

/// A user-defined section with a rich-text body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    /// Section heading
    pub heading: String,

    /// Rich-text description
    #[serde(with = "crate::codec::doc_string")]
    pub description: Document,
}
