//! Plain-text resume export.

use std::io;

use crate::render::flatten_to_text;
use crate::resume::{Certification, CustomSection, Education, Experience, Resume, Skill};

/// Options for plain-text export.
#[derive(Debug, Clone)]
pub struct TextExportOptions {
    /// Marker for list-section entries (skills, hobbies, ...)
    pub list_marker: char,

    /// Emit uppercase section titles
    pub section_titles: bool,
}

impl TextExportOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable section titles.
    pub fn with_section_titles(mut self, titles: bool) -> Self {
        self.section_titles = titles;
        self
    }
}

impl Default for TextExportOptions {
    fn default() -> Self {
        Self {
            list_marker: '\u{2022}',
            section_titles: true,
        }
    }
}

/// Export a resume as a plain-text document.
///
/// Sections appear in fixed order: heading, summary, skills, experience,
/// education, hobbies, languages, certifications, accomplishments, then
/// custom sections in list order. Blank sections and seeded blank
/// entries contribute nothing. Never fails on content.
pub fn export_text(resume: &Resume, options: &TextExportOptions) -> String {
    let mut out = Writer::new(options);

    out.heading_block(resume);
    out.document_section("SUMMARY", &resume.summary);
    out.skill_section("SKILLS", &resume.skills);
    out.experience_section(&resume.experiences);
    out.education_section(&resume.educations);
    out.list_section("HOBBIES", &resume.hobbies);
    out.language_section(&resume.languages);
    out.certification_section(&resume.certifications);
    out.list_section("ACCOMPLISHMENTS", &resume.accomplishments);
    for section in &resume.custom_sections {
        out.custom_section(section);
    }

    out.finish()
}

/// Export a resume as UTF-8 plain text into a writer.
pub fn write_text<W: io::Write>(
    writer: &mut W,
    resume: &Resume,
    options: &TextExportOptions,
) -> crate::Result<()> {
    writer.write_all(export_text(resume, options).as_bytes())?;
    Ok(())
}

/// Section-by-section text assembly.
struct Writer<'a> {
    options: &'a TextExportOptions,
    segments: Vec<String>,
}

impl<'a> Writer<'a> {
    fn new(options: &'a TextExportOptions) -> Self {
        Self {
            options,
            segments: Vec::new(),
        }
    }

    fn finish(self) -> String {
        let mut out = self.segments.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn push_segment(&mut self, title: &str, body: String) {
        if body.trim().is_empty() {
            return;
        }
        if self.options.section_titles && !title.is_empty() {
            self.segments.push(format!("{title}\n{body}"));
        } else {
            self.segments.push(body);
        }
    }

    fn bullet(&self, text: &str) -> String {
        format!("{} {text}", self.options.list_marker)
    }

    fn heading_block(&mut self, resume: &Resume) {
        let heading = &resume.heading;
        let mut lines = Vec::new();
        let name = heading.full_name();
        if !name.is_empty() {
            lines.push(name);
        }
        if !heading.profession.trim().is_empty() {
            lines.push(heading.profession.trim().to_string());
        }
        let contact: Vec<&str> = [
            heading.city.trim(),
            heading.phone.trim(),
            heading.email.trim(),
            heading.website.trim(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        if !contact.is_empty() {
            lines.push(contact.join(" | "));
        }
        self.push_segment("", lines.join("\n"));
    }

    fn document_section(&mut self, title: &str, doc: &crate::model::Document) {
        self.push_segment(title, flatten_to_text(doc));
    }

    fn skill_section(&mut self, title: &str, skills: &[Skill]) {
        let body = skills
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| self.bullet(&format!("{} - {}/5", s.name.trim(), s.proficiency)))
            .collect::<Vec<_>>()
            .join("\n");
        self.push_segment(title, body);
    }

    fn language_section(&mut self, languages: &[crate::resume::Language]) {
        let body = languages
            .iter()
            .filter(|l| !l.name.trim().is_empty())
            .map(|l| self.bullet(&format!("{} - {}/5", l.name.trim(), l.proficiency)))
            .collect::<Vec<_>>()
            .join("\n");
        self.push_segment("LANGUAGES", body);
    }

    fn list_section(&mut self, title: &str, entries: &[String]) {
        let body = entries
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| self.bullet(entry.trim()))
            .collect::<Vec<_>>()
            .join("\n");
        self.push_segment(title, body);
    }

    fn experience_section(&mut self, experiences: &[Experience]) {
        let body = experiences
            .iter()
            .filter(|e| !experience_is_blank(e))
            .map(|e| {
                let mut lines = Vec::new();
                let role = join_nonempty(&[&e.job_title, &e.employer], ", ");
                let role = join_nonempty(&[&role, &e.city], " - ");
                if !role.is_empty() {
                    lines.push(role);
                }
                let dates = date_range(&e.start_date, &e.end_date, e.current);
                if !dates.is_empty() {
                    lines.push(dates);
                }
                let description = flatten_to_text(&e.description);
                if !description.trim().is_empty() {
                    lines.push(description);
                }
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        self.push_segment("EXPERIENCE", body);
    }

    fn education_section(&mut self, educations: &[Education]) {
        let body = educations
            .iter()
            .filter(|e| !education_is_blank(e))
            .map(|e| {
                let mut lines = Vec::new();
                let program = join_nonempty(&[&e.degree, &e.school], ", ");
                let program = join_nonempty(&[&program, &e.city], " - ");
                if !program.is_empty() {
                    lines.push(program);
                }
                let dates = date_range(&e.start_date, &e.end_date, e.current);
                if !dates.is_empty() {
                    lines.push(dates);
                }
                let description = flatten_to_text(&e.description);
                if !description.trim().is_empty() {
                    lines.push(description);
                }
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        self.push_segment("EDUCATION", body);
    }

    fn certification_section(&mut self, certifications: &[Certification]) {
        let body = certifications
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .map(|c| {
                if c.date.trim().is_empty() {
                    self.bullet(c.name.trim())
                } else {
                    self.bullet(&format!("{} ({})", c.name.trim(), c.date.trim()))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.push_segment("CERTIFICATIONS", body);
    }

    fn custom_section(&mut self, section: &CustomSection) {
        let title = section.heading.trim().to_uppercase();
        let body = flatten_to_text(&section.description);
        if title.is_empty() {
            self.push_segment("", body);
        } else {
            self.push_segment(&title, body);
        }
    }
}

fn join_nonempty<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end.trim() };
    join_nonempty(&[start, end], " - ")
}

fn experience_is_blank(e: &Experience) -> bool {
    e.job_title.trim().is_empty()
        && e.employer.trim().is_empty()
        && e.city.trim().is_empty()
        && e.start_date.trim().is_empty()
        && e.end_date.trim().is_empty()
        && e.description.is_blank()
}

fn education_is_blank(e: &Education) -> bool {
    e.school.trim().is_empty()
        && e.degree.trim().is_empty()
        && e.city.trim().is_empty()
        && e.start_date.trim().is_empty()
        && e.end_date.trim().is_empty()
        && e.description.is_blank()
}
