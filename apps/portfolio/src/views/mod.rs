//! View composition: content, filter and selection state in, HTML out.
//!
//! Templates are compiled into the binary and rendered with Tera; `.html`
//! templates are autoescaped, so content strings are inserted as text.

pub mod pages;
pub mod reveal;

use chrono::{Datelike, Utc};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::content::ContentStore;
use crate::models::profile::{Placement, SocialLink};
use reveal::RevealOnce;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("macros.html", include_str!("templates/macros.html")),
    ("home.html", include_str!("templates/home.html")),
    ("about.html", include_str!("templates/about.html")),
    ("projects.html", include_str!("templates/projects.html")),
    ("blog.html", include_str!("templates/blog.html")),
    ("resume.html", include_str!("templates/resume.html")),
    ("contact.html", include_str!("templates/contact.html")),
    ("not_found.html", include_str!("templates/not_found.html")),
];

/// Top-level routes. Each is directly addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Blog,
    Resume,
    Contact,
    NotFound,
}

impl Page {
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Blog,
        Page::Resume,
        Page::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Blog => "/blog",
            Page::Resume => "/resume",
            Page::Contact => "/contact",
            Page::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Blog => "Blog",
            Page::Resume => "Resume",
            Page::Contact => "Contact",
            Page::NotFound => "Page Not Found",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::About => "about.html",
            Page::Projects => "projects.html",
            Page::Blog => "blog.html",
            Page::Resume => "resume.html",
            Page::Contact => "contact.html",
            Page::NotFound => "not_found.html",
        }
    }
}

#[derive(Debug, Serialize)]
struct NavItem {
    label: &'static str,
    href: String,
    active: bool,
}

/// Layout data every page shares: navigation, footer, reveal settings.
#[derive(Debug, Serialize)]
struct SiteContext<'a> {
    base: &'a str,
    title: &'static str,
    person: &'a str,
    footer_blurb: &'a str,
    nav: Vec<NavItem>,
    footer_social: Vec<&'a SocialLink>,
    year: i32,
    reveal: RevealOnce,
}

pub struct ViewEngine {
    tera: Tera,
    base_path: String,
}

impl ViewEngine {
    pub fn new(base_path: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        debug!(count = TEMPLATES.len(), "loaded templates");

        Ok(Self {
            tera,
            base_path: base_path.into(),
        })
    }

    /// Prefixes an absolute site path with the configured base path.
    pub fn href(&self, path: &str) -> String {
        match (self.base_path.is_empty(), path) {
            (true, _) => path.to_string(),
            (false, "/") => self.base_path.clone(),
            (false, _) => format!("{}{}", self.base_path, path),
        }
    }

    /// Like [`href`](Self::href), with a query string built from the
    /// non-empty pairs.
    pub fn href_with(&self, path: &str, params: &[(&str, &str)]) -> String {
        let query: Vec<String> = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        let href = self.href(path);
        if query.is_empty() {
            href
        } else {
            format!("{href}?{}", query.join("&"))
        }
    }

    pub fn render(
        &self,
        page: Page,
        store: &ContentStore,
        mut ctx: Context,
    ) -> Result<String, tera::Error> {
        let site = SiteContext {
            base: &self.base_path,
            title: page.title(),
            person: &store.profile.name,
            footer_blurb: &store.profile.footer_blurb,
            nav: Page::NAV
                .iter()
                .map(|p| NavItem {
                    label: p.title(),
                    href: self.href(p.path()),
                    active: *p == page,
                })
                .collect(),
            footer_social: store.social_for(Placement::Footer),
            year: Utc::now().year(),
            reveal: RevealOnce::default(),
        };
        ctx.insert("site", &site);
        self.tera.render(page.template(), &ctx)
    }
}
