use serde::{Deserialize, Serialize};

use crate::catalog::{Category, CatalogEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Frontend,
    FullStack,
    Mobile,
}

impl Category for ProjectCategory {
    const ALL_LABEL: &'static str = "All Projects";

    fn variants() -> &'static [Self] {
        &[Self::Frontend, Self::FullStack, Self::Mobile]
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::FullStack => "full-stack",
            Self::Mobile => "mobile",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
            Self::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    /// Display hint (emoji), passed through untouched.
    pub image: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    #[serde(default)]
    pub featured: bool,
    pub category: ProjectCategory,
    #[serde(default)]
    pub code_snippet: Option<String>,
}

impl CatalogEntry for Project {
    type Category = ProjectCategory;

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn excerpt(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn content(&self) -> Option<&str> {
        Some(&self.long_description)
    }
}
