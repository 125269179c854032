use serde::{Deserialize, Serialize};

use crate::models::profile::PersonalInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
    pub gpa: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One resume skill line. Kept as an ordered list so exports are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
}

/// The resume as exported and served: body sections plus the person's header.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeDocument<'a> {
    pub personal: &'a PersonalInfo,
    #[serde(flatten)]
    pub resume: &'a Resume,
}
