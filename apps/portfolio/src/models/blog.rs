use serde::{Deserialize, Serialize};

use crate::catalog::{Category, CatalogEntry};

/// Closed set of blog categories. `all` is a selector, never a post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogCategory {
    React,
    TypeScript,
    #[serde(rename = "CSS")]
    Css,
    WebAssembly,
}

impl Category for BlogCategory {
    const ALL_LABEL: &'static str = "All Posts";

    fn variants() -> &'static [Self] {
        &[Self::React, Self::TypeScript, Self::Css, Self::WebAssembly]
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::TypeScript => "TypeScript",
            Self::Css => "CSS",
            Self::WebAssembly => "WebAssembly",
        }
    }

    fn label(&self) -> &'static str {
        self.slug()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub read_time: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    /// Display hint (emoji), passed through untouched.
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl CatalogEntry for BlogPost {
    type Category = BlogCategory;

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> BlogCategory {
        self.category
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn content(&self) -> Option<&str> {
        Some(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_category_serde_uses_display_names() {
        let c: BlogCategory = serde_json::from_str(r#""CSS""#).unwrap();
        assert_eq!(c, BlogCategory::Css);
        assert_eq!(
            serde_json::to_string(&BlogCategory::WebAssembly).unwrap(),
            r#""WebAssembly""#
        );
    }

    #[test]
    fn test_blog_category_rejects_all() {
        assert!(serde_json::from_str::<BlogCategory>(r#""all""#).is_err());
    }

    #[test]
    fn test_slug_round_trips_through_from_slug() {
        for c in BlogCategory::variants() {
            assert_eq!(BlogCategory::from_slug(c.slug()), Some(*c));
        }
    }
}
