//! The resume aggregate and its update operations.
//!
//! The aggregate owns every section of one in-memory resume session.
//! All updates are copy-on-write: each operation takes `&self` and
//! returns a new aggregate with only the touched section replaced, so
//! the form layer can swap snapshots atomically and the previous value
//! stays valid for any preview still rendering it.
//!
//! Three sections (experiences, educations, certifications) are
//! never-empty: constructors seed them with one blank entry and removal
//! of the sole remaining entry is a no-op. The invariant lives in the
//! mutation functions themselves, so no observer can catch the
//! aggregate in an invariant-violating state between edits.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Document;

use super::sections::{
    Certification, CustomSection, Education, Experience, Heading, Language, Skill,
};

/// The complete in-memory resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    /// Name and contact details
    pub heading: Heading,

    /// Rich-text professional summary
    #[serde(with = "crate::codec::doc_string")]
    pub summary: Document,

    /// Skills with proficiency ratings
    pub skills: Vec<Skill>,

    /// Work experience entries; never empty
    pub experiences: Vec<Experience>,

    /// Education entries; never empty
    pub educations: Vec<Education>,

    /// Hobby list; deduplicated case-insensitively
    pub hobbies: Vec<String>,

    /// Languages with proficiency ratings
    pub languages: Vec<Language>,

    /// Certifications; never empty
    pub certifications: Vec<Certification>,

    /// Accomplishment list; deduplicated case-insensitively
    pub accomplishments: Vec<String>,

    /// User-defined sections
    pub custom_sections: Vec<CustomSection>,
}

impl Resume {
    /// Create a new resume with session defaults: empty summary, empty
    /// lists, and one blank entry in each never-empty section.
    pub fn new() -> Self {
        Self::default().seeded()
    }

    /// Read a resume from its persisted JSON form.
    ///
    /// Rich-text fields go through the tolerant codec, and never-empty
    /// sections that come back empty are re-seeded with one blank entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let resume: Resume =
            serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))?;
        Ok(resume.seeded())
    }

    /// Serialize the resume to its persisted JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Json(e.to_string()))
    }

    /// Seed blank entries into never-empty sections.
    fn seeded(mut self) -> Self {
        if self.experiences.is_empty() {
            self.experiences.push(Experience::default());
        }
        if self.educations.is_empty() {
            self.educations.push(Education::default());
        }
        if self.certifications.is_empty() {
            self.certifications.push(Certification::default());
        }
        self
    }

    // ---- heading & summary ------------------------------------------------

    /// Replace the heading, normalizing its email field.
    pub fn with_heading(&self, heading: Heading) -> Self {
        Self {
            heading: heading.normalized(),
            ..self.clone()
        }
    }

    /// Replace the summary document.
    pub fn with_summary(&self, summary: Document) -> Self {
        Self {
            summary,
            ..self.clone()
        }
    }

    // ---- skills -----------------------------------------------------------

    /// Append a skill.
    pub fn add_skill(&self, skill: Skill) -> Self {
        Self {
            skills: pushed(&self.skills, skill),
            ..self.clone()
        }
    }

    /// Replace the skill at `index`; out of range is a no-op.
    pub fn update_skill(&self, index: usize, skill: Skill) -> Self {
        Self {
            skills: replaced(&self.skills, index, skill),
            ..self.clone()
        }
    }

    /// Remove the skill at `index`; out of range is a no-op.
    pub fn remove_skill(&self, index: usize) -> Self {
        Self {
            skills: removed(&self.skills, index, 0),
            ..self.clone()
        }
    }

    // ---- experiences ------------------------------------------------------

    /// Append an experience entry.
    pub fn add_experience(&self, experience: Experience) -> Self {
        Self {
            experiences: pushed(&self.experiences, experience),
            ..self.clone()
        }
    }

    /// Replace the experience at `index`; out of range is a no-op.
    pub fn update_experience(&self, index: usize, experience: Experience) -> Self {
        Self {
            experiences: replaced(&self.experiences, index, experience),
            ..self.clone()
        }
    }

    /// Remove the experience at `index`.
    ///
    /// Removing the sole remaining entry is a no-op: the section is
    /// never empty.
    pub fn remove_experience(&self, index: usize) -> Self {
        Self {
            experiences: removed(&self.experiences, index, 1),
            ..self.clone()
        }
    }

    // ---- educations -------------------------------------------------------

    /// Append an education entry.
    pub fn add_education(&self, education: Education) -> Self {
        Self {
            educations: pushed(&self.educations, education),
            ..self.clone()
        }
    }

    /// Replace the education at `index`; out of range is a no-op.
    pub fn update_education(&self, index: usize, education: Education) -> Self {
        Self {
            educations: replaced(&self.educations, index, education),
            ..self.clone()
        }
    }

    /// Remove the education at `index`; removing the sole remaining
    /// entry is a no-op.
    pub fn remove_education(&self, index: usize) -> Self {
        Self {
            educations: removed(&self.educations, index, 1),
            ..self.clone()
        }
    }

    // ---- certifications ---------------------------------------------------

    /// Append a certification.
    pub fn add_certification(&self, certification: Certification) -> Self {
        Self {
            certifications: pushed(&self.certifications, certification),
            ..self.clone()
        }
    }

    /// Replace the certification at `index`; out of range is a no-op.
    pub fn update_certification(&self, index: usize, certification: Certification) -> Self {
        Self {
            certifications: replaced(&self.certifications, index, certification),
            ..self.clone()
        }
    }

    /// Remove the certification at `index`; removing the sole remaining
    /// entry is a no-op.
    pub fn remove_certification(&self, index: usize) -> Self {
        Self {
            certifications: removed(&self.certifications, index, 1),
            ..self.clone()
        }
    }

    // ---- languages --------------------------------------------------------

    /// Append a language.
    pub fn add_language(&self, language: Language) -> Self {
        Self {
            languages: pushed(&self.languages, language),
            ..self.clone()
        }
    }

    /// Replace the language at `index`; out of range is a no-op.
    pub fn update_language(&self, index: usize, language: Language) -> Self {
        Self {
            languages: replaced(&self.languages, index, language),
            ..self.clone()
        }
    }

    /// Remove the language at `index`; out of range is a no-op.
    pub fn remove_language(&self, index: usize) -> Self {
        Self {
            languages: removed(&self.languages, index, 0),
            ..self.clone()
        }
    }

    // ---- custom sections --------------------------------------------------

    /// Append a custom section.
    pub fn add_custom_section(&self, section: CustomSection) -> Self {
        Self {
            custom_sections: pushed(&self.custom_sections, section),
            ..self.clone()
        }
    }

    /// Replace the custom section at `index`; out of range is a no-op.
    pub fn update_custom_section(&self, index: usize, section: CustomSection) -> Self {
        Self {
            custom_sections: replaced(&self.custom_sections, index, section),
            ..self.clone()
        }
    }

    /// Remove the custom section at `index`; out of range is a no-op.
    pub fn remove_custom_section(&self, index: usize) -> Self {
        Self {
            custom_sections: removed(&self.custom_sections, index, 0),
            ..self.clone()
        }
    }

    // ---- hobbies & accomplishments ----------------------------------------

    /// Add a hobby.
    ///
    /// The trimmed value must be non-empty and not already present under
    /// case-insensitive comparison; rejected values leave the list
    /// unchanged.
    pub fn add_hobby(&self, hobby: &str) -> Result<Self> {
        Ok(Self {
            hobbies: added_unique(&self.hobbies, hobby, "hobbies")?,
            ..self.clone()
        })
    }

    /// Remove the hobby at `index`; out of range is a no-op.
    pub fn remove_hobby(&self, index: usize) -> Self {
        Self {
            hobbies: removed(&self.hobbies, index, 0),
            ..self.clone()
        }
    }

    /// Add an accomplishment, with the same validation as hobbies.
    pub fn add_accomplishment(&self, accomplishment: &str) -> Result<Self> {
        Ok(Self {
            accomplishments: added_unique(&self.accomplishments, accomplishment, "accomplishments")?,
            ..self.clone()
        })
    }

    /// Remove the accomplishment at `index`; out of range is a no-op.
    pub fn remove_accomplishment(&self, index: usize) -> Self {
        Self {
            accomplishments: removed(&self.accomplishments, index, 0),
            ..self.clone()
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            heading: Heading::default(),
            summary: Document::empty(),
            skills: Vec::new(),
            experiences: Vec::new(),
            educations: Vec::new(),
            hobbies: Vec::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
            accomplishments: Vec::new(),
            custom_sections: Vec::new(),
        }
    }
}

fn pushed<T: Clone>(list: &[T], value: T) -> Vec<T> {
    let mut next = list.to_vec();
    next.push(value);
    next
}

fn replaced<T: Clone>(list: &[T], index: usize, value: T) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = value;
    } else {
        log::debug!("ignoring update at out-of-range index {index}");
    }
    next
}

/// Remove by index, refusing to shrink the list below `min_len`.
fn removed<T: Clone>(list: &[T], index: usize, min_len: usize) -> Vec<T> {
    if index >= list.len() || list.len() <= min_len {
        return list.to_vec();
    }
    let mut next = list.to_vec();
    next.remove(index);
    next
}

/// Insert a trimmed value into an ordered set-like list.
fn added_unique(list: &[String], value: &str, section: &'static str) -> Result<Vec<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::BlankEntry { section });
    }
    let needle = trimmed.to_lowercase();
    if list.iter().any(|entry| entry.trim().to_lowercase() == needle) {
        return Err(Error::DuplicateEntry {
            section,
            value: value.to_string(),
        });
    }
    Ok(pushed(list, trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_required_sections() {
        let resume = Resume::new();
        assert_eq!(resume.experiences.len(), 1);
        assert_eq!(resume.educations.len(), 1);
        assert_eq!(resume.certifications.len(), 1);
        assert!(resume.skills.is_empty());
        assert!(resume.summary.is_blank());
    }

    #[test]
    fn test_update_touches_only_one_section() {
        let base = Resume::new().add_skill(Skill::new("Rust", 5));
        let updated = base.with_heading(Heading {
            first_name: "Ada".to_string(),
            ..Default::default()
        });

        assert_eq!(updated.heading.first_name, "Ada");
        assert_eq!(updated.skills, base.skills);
        assert_eq!(updated.experiences, base.experiences);
        assert_eq!(updated.summary, base.summary);
    }

    #[test]
    fn test_remove_last_experience_is_noop() {
        let resume = Resume::new();
        let after = resume.remove_experience(0);
        assert_eq!(after.experiences, resume.experiences);
        assert_eq!(after.experiences.len(), 1);
    }

    #[test]
    fn test_remove_experience_above_floor() {
        let resume = Resume::new().add_experience(Experience {
            employer: "Initech".to_string(),
            ..Default::default()
        });
        let after = resume.remove_experience(0);
        assert_eq!(after.experiences.len(), 1);
        assert_eq!(after.experiences[0].employer, "Initech");
    }

    #[test]
    fn test_out_of_range_ops_are_noops() {
        let resume = Resume::new().add_skill(Skill::new("Rust", 4));
        assert_eq!(resume.remove_skill(7), resume);
        assert_eq!(resume.update_skill(7, Skill::new("Go", 1)), resume);
        assert_eq!(resume.remove_hobby(0), resume);
    }

    #[test]
    fn test_hobby_dedup_case_insensitive() {
        let resume = Resume::new().add_hobby("reading").unwrap();
        let err = resume.add_hobby("Reading").unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry { section: "hobbies", .. }));
        // Padding does not defeat the dedup either.
        assert!(resume.add_hobby("  READING  ").is_err());
        assert_eq!(resume.hobbies, vec!["reading"]);
    }

    #[test]
    fn test_blank_entries_rejected() {
        let resume = Resume::new();
        assert!(matches!(
            resume.add_hobby("   "),
            Err(Error::BlankEntry { section: "hobbies" })
        ));
        assert!(resume.add_accomplishment("").is_err());
    }

    #[test]
    fn test_accomplishments_store_trimmed() {
        let resume = Resume::new().add_accomplishment("  Shipped v1  ").unwrap();
        assert_eq!(resume.accomplishments, vec!["Shipped v1"]);
    }

    #[test]
    fn test_heading_update_normalizes_email() {
        let resume = Resume::new().with_heading(Heading {
            email: "A@x.com, a@x.com , b@y.com".to_string(),
            ..Default::default()
        });
        assert_eq!(resume.heading.email, "a@x.com, b@y.com");
    }

    #[test]
    fn test_from_json_reseeds_empty_sections() {
        let json = r#"{"heading":{"firstName":"Ada"},"educations":[]}"#;
        let resume = Resume::from_json(json).unwrap();
        assert_eq!(resume.heading.first_name, "Ada");
        assert_eq!(resume.educations.len(), 1);
        assert_eq!(resume.educations[0], Education::default());
    }

    #[test]
    fn test_json_round_trip() {
        let resume = Resume::new()
            .with_summary(Document::from_plain_text("Engineer of things."))
            .add_skill(Skill::new("Rust", 5))
            .add_hobby("climbing")
            .unwrap();
        let json = resume.to_json().unwrap();
        assert_eq!(Resume::from_json(&json).unwrap(), resume);
    }
}
