//! Content store: the read-only table every page renders from.
//!
//! The site's data lives in `content/portfolio.toml`, embedded at compile time
//! and parsed once at startup. After loading, the store is shared behind an
//! `Arc` and never mutated.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::CatalogEntry;
use crate::models::blog::BlogPost;
use crate::models::profile::{
    Availability, ContactChannel, PersonalInfo, Placement, SkillGroup, SocialLink, Stat,
    TimelineItem,
};
use crate::models::project::Project;
use crate::models::resume::{Resume, ResumeDocument};

const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate id {id} in {catalog} catalog")]
    DuplicateId { catalog: &'static str, id: u32 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentStore {
    pub profile: PersonalInfo,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub contact_channels: Vec<ContactChannel>,
    #[serde(default)]
    pub availability: Vec<Availability>,
    pub resume: Resume,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ContentStore {
    /// Loads the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CONTENT)
    }

    /// Parses and validates a content document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let store: ContentStore = toml::from_str(source)?;
        ensure_unique_ids("posts", &store.posts)?;
        ensure_unique_ids("projects", &store.projects)?;

        info!(
            posts = store.posts.len(),
            projects = store.projects.len(),
            "Content store loaded"
        );
        Ok(store)
    }

    pub fn post(&self, id: u32) -> Option<&BlogPost> {
        crate::catalog::find_by_id(&self.posts, id)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        crate::catalog::find_by_id(&self.projects, id)
    }

    pub fn social_for(&self, placement: Placement) -> Vec<&SocialLink> {
        self.social
            .iter()
            .filter(|link| link.show_on.contains(&placement))
            .collect()
    }

    pub fn resume_document(&self) -> ResumeDocument<'_> {
        ResumeDocument {
            personal: &self.profile,
            resume: &self.resume,
        }
    }
}

fn ensure_unique_ids<E: CatalogEntry>(catalog: &'static str, entries: &[E]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(ContentError::DuplicateId {
                catalog,
                id: entry.id(),
            });
        }
    }
    Ok(())
}
