//! Resume document builder.

use serde::{Deserialize, Serialize};

use crate::document::model::{Block, Document};

/// Contact block at the top of the resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Professional summary paragraph
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub college: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub details: String,
}

/// Resume content as entered on the screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub personal: PersonalDetails,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Comma-separated skills line
    pub skills: String,
}

impl Resume {
    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("Created Resume for {}", self.personal.name)
    }

    /// Builds the renderable resume document.
    ///
    /// Sections with no content are skipped entirely; an experience or
    /// education list whose first entry is blank counts as empty.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new(self.personal.name.to_uppercase());
        document.push(Block::Paragraph(format!(
            "{} | {} | {}",
            self.personal.email, self.personal.phone, self.personal.location
        )));
        document.push(Block::Divider);

        if !self.personal.summary.trim().is_empty() {
            document.push(Block::Heading("PROFESSIONAL SUMMARY".to_string()));
            document.push(Block::Paragraph(self.personal.summary.clone()));
        }

        if self.has_experience() {
            document.push(Block::Heading("EXPERIENCE".to_string()));
            for entry in &self.experience {
                document.push_key_value(
                    entry.role.clone(),
                    format!("{} | {}", entry.company, entry.duration),
                );
                if !entry.details.trim().is_empty() {
                    document.push(Block::Paragraph(entry.details.clone()));
                }
            }
        }

        if self.has_education() {
            document.push(Block::Heading("EDUCATION".to_string()));
            for entry in &self.education {
                document.push_key_value(
                    entry.degree.clone(),
                    format!("{} | {}", entry.college, entry.year),
                );
            }
        }

        if !self.skills.trim().is_empty() {
            document.push(Block::Heading("SKILLS".to_string()));
            document.push(Block::Paragraph(self.skills.clone()));
        }

        document
    }

    fn has_experience(&self) -> bool {
        self.experience
            .first()
            .is_some_and(|e| !e.role.trim().is_empty())
    }

    fn has_education(&self) -> bool {
        self.education
            .first()
            .is_some_and(|e| !e.degree.trim().is_empty())
    }
}
