use serde::{Deserialize, Serialize};

/// Who the site is about. Shared by the hero, the resume header and the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    /// Name shown in the home page hero.
    pub display_name: String,
    pub title: String,
    pub tagline: String,
    pub footer_blurb: String,
    pub about_intro: String,
    #[serde(default)]
    pub journey: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Home,
    Contact,
    Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub href: String,
    pub aria_label: String,
    #[serde(default)]
    pub show_on: Vec<Placement>,
}

/// About page skill card. `icon` and `color` are display hints only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: String,
    pub color: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub icon: String,
    pub value: String,
    /// `#` means "not a link".
    pub href: String,
}

impl ContactChannel {
    pub fn is_link(&self) -> bool {
        !self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub label: String,
    pub status: String,
    pub tone: String,
}
