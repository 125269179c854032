//! Per-page template contexts.

use chrono::NaiveDate;
use serde::Serialize;
use tera::Context;

use super::{Page, ViewEngine};
use crate::blocks::{self, DisplayBlock};
use crate::catalog::{
    self, Category, CatalogEntry, CategoryFilter, ClickTarget, FilterState, Selection,
};
use crate::contact::ContactSession;
use crate::content::ContentStore;
use crate::models::blog::{BlogCategory, BlogPost};
use crate::models::profile::{ContactChannel, Placement};
use crate::models::project::{Project, ProjectCategory};

const CARD_TAGS: usize = 2;
const CARD_TECHNOLOGIES: usize = 3;

#[derive(Debug, Serialize)]
struct CategoryButton {
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct PostCard<'a> {
    id: u32,
    title: &'a str,
    excerpt: &'a str,
    date: String,
    read_time: &'a str,
    image: &'a str,
    tags: &'a [String],
    extra_tags: usize,
    href: String,
}

#[derive(Debug, Serialize)]
struct PostDetail<'a> {
    title: &'a str,
    author: &'a str,
    date: String,
    read_time: &'a str,
    tags: &'a [String],
    blocks: Vec<DisplayBlock>,
    close_href: String,
    backdrop_href: String,
}

#[derive(Debug, Serialize)]
struct ChannelView<'a> {
    #[serde(flatten)]
    channel: &'a ContactChannel,
    is_link: bool,
}

#[derive(Debug, Serialize)]
struct ProjectCard<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    image: &'a str,
    technologies: &'a [String],
    extra_technologies: usize,
    github_url: &'a str,
    live_url: &'a str,
    code_href: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProjectDetail<'a> {
    id: u32,
    title: &'a str,
    blocks: Vec<DisplayBlock>,
    code_snippet: Option<&'a str>,
    copy_url: String,
    close_href: String,
    backdrop_href: String,
}

/// Context for `page` with nothing filtered, selected or submitted.
pub fn default_context(views: &ViewEngine, store: &ContentStore, page: Page) -> Context {
    match page {
        Page::Home => home(views, store),
        Page::About => about(store),
        Page::Projects => projects(views, store, &FilterState::default(), &Selection::new()),
        Page::Blog => blog(views, store, &FilterState::default(), &Selection::new()),
        Page::Resume => resume(views, store),
        Page::Contact => contact(store, &ContactSession::default()),
        Page::NotFound => Context::new(),
    }
}

pub fn home(views: &ViewEngine, store: &ContentStore) -> Context {
    let mut ctx = Context::new();
    ctx.insert("profile", &store.profile);
    ctx.insert("stats", &store.stats);
    ctx.insert("social", &store.social_for(Placement::Home));
    ctx.insert("work_href", &views.href(Page::Projects.path()));
    ctx.insert("cv_href", &views.href(Page::Resume.path()));
    ctx
}

pub fn about(store: &ContentStore) -> Context {
    let mut ctx = Context::new();
    ctx.insert("profile", &store.profile);
    ctx.insert("skill_groups", &store.skill_groups);
    ctx.insert("timeline", &store.timeline);
    ctx
}

pub fn blog(
    views: &ViewEngine,
    store: &ContentStore,
    filter: &FilterState<BlogCategory>,
    selection: &Selection<&BlogPost>,
) -> Context {
    let category = category_param(&filter.category);
    let search = filter.search.as_str();

    let featured = post_cards(views, &catalog::featured(&store.posts), category, search);
    let posts = post_cards(views, &catalog::filter(&store.posts, filter), category, search);

    let selected = selection.current().map(|post| {
        let id = post.id.to_string();
        let state = [("category", category), ("q", search), ("post", id.as_str())];
        PostDetail {
            title: &post.title,
            author: &post.author,
            date: display_date(&post.date),
            read_time: &post.read_time,
            tags: &post.tags,
            blocks: blocks::render(&post.content),
            close_href: dismiss_href(views, Page::Blog, &state, ClickTarget::CloseControl),
            backdrop_href: dismiss_href(views, Page::Blog, &state, ClickTarget::Backdrop),
        }
    });

    let mut ctx = Context::new();
    ctx.insert("categories", &category_buttons(views, Page::Blog, filter));
    ctx.insert("search", search);
    ctx.insert("search_action", &views.href(Page::Blog.path()));
    ctx.insert("category", category);
    ctx.insert("show_featured", &filter.is_default());
    ctx.insert(
        "results_heading",
        if filter.is_default() {
            "All Posts"
        } else {
            "Search Results"
        },
    );
    ctx.insert("featured", &featured);
    ctx.insert("posts", &posts);
    ctx.insert("selected", &selected);
    ctx
}

pub fn projects(
    views: &ViewEngine,
    store: &ContentStore,
    filter: &FilterState<ProjectCategory>,
    selection: &Selection<&Project>,
) -> Context {
    let category = category_param(&filter.category);
    let search = filter.search.as_str();
    let code_href = |project: &Project| {
        project.code_snippet.as_ref().map(|_| {
            let id = project.id.to_string();
            views.href_with(
                Page::Projects.path(),
                &[("category", category), ("q", search), ("project", &id)],
            )
        })
    };

    let featured: Vec<ProjectCard> = catalog::featured(&store.projects)
        .into_iter()
        .map(|p| project_card(p, p.technologies.len(), code_href(p)))
        .collect();
    let visible: Vec<ProjectCard> = catalog::filter(&store.projects, filter)
        .into_iter()
        .map(|p| project_card(p, CARD_TECHNOLOGIES, code_href(p)))
        .collect();

    let selected = selection.current().map(|project| {
        let id = project.id.to_string();
        let state = [("category", category), ("q", search), ("project", id.as_str())];
        ProjectDetail {
            id: project.id,
            title: &project.title,
            blocks: project.content().map(blocks::render).unwrap_or_default(),
            code_snippet: project.code_snippet.as_deref(),
            copy_url: views.href(&format!("/api/v1/projects/{}/copy", project.id)),
            close_href: dismiss_href(views, Page::Projects, &state, ClickTarget::CloseControl),
            backdrop_href: dismiss_href(views, Page::Projects, &state, ClickTarget::Backdrop),
        }
    });

    let mut ctx = Context::new();
    ctx.insert("categories", &category_buttons(views, Page::Projects, filter));
    ctx.insert("featured", &featured);
    ctx.insert("projects", &visible);
    ctx.insert("selected", &selected);
    ctx
}

pub fn resume(views: &ViewEngine, store: &ContentStore) -> Context {
    let mut ctx = Context::new();
    ctx.insert("doc", &store.resume_document());
    ctx.insert("download_href", &views.href("/resume/download"));
    ctx
}

pub fn contact(store: &ContentStore, session: &ContactSession) -> Context {
    let channels: Vec<ChannelView> = store
        .contact_channels
        .iter()
        .map(|channel| ChannelView {
            channel,
            is_link: channel.is_link(),
        })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("channels", &channels);
    ctx.insert("social", &store.social_for(Placement::Contact));
    ctx.insert("availability", &store.availability);
    ctx.insert("form", session.form());
    ctx.insert("submitting", &session.is_submitting());
    ctx.insert("notification", &session.notification());
    ctx
}

/// `2024-01-15` -> `January 15, 2024`. Unparseable dates pass through.
pub fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Link that reloads `page` with the modal state plus the click that
/// dismisses it.
fn dismiss_href(
    views: &ViewEngine,
    page: Page,
    state: &[(&str, &str)],
    target: ClickTarget,
) -> String {
    let mut params = state.to_vec();
    params.push(("click", target.param()));
    views.href_with(page.path(), &params)
}

fn category_param<C: Category>(filter: &CategoryFilter<C>) -> &'static str {
    match filter {
        CategoryFilter::All => "",
        CategoryFilter::Only(c) => c.slug(),
    }
}

fn category_buttons<C: Category>(
    views: &ViewEngine,
    page: Page,
    filter: &FilterState<C>,
) -> Vec<CategoryButton> {
    let all = std::iter::once((C::ALL_LABEL, CategoryFilter::All));
    let each = C::variants()
        .iter()
        .map(|c| (c.label(), CategoryFilter::Only(*c)));
    all.chain(each)
        .map(|(label, option)| CategoryButton {
            label,
            href: views.href_with(
                page.path(),
                &[("category", category_param(&option)), ("q", &filter.search)],
            ),
            active: option == filter.category,
        })
        .collect()
}

fn post_cards<'a>(
    views: &ViewEngine,
    posts: &[&'a BlogPost],
    category: &str,
    search: &str,
) -> Vec<PostCard<'a>> {
    posts
        .iter()
        .copied()
        .map(|post| {
            let id = post.id.to_string();
            let href = views.href_with(
                Page::Blog.path(),
                &[("category", category), ("q", search), ("post", &id)],
            );
            post_card(post, href)
        })
        .collect()
}

fn post_card(post: &BlogPost, href: String) -> PostCard<'_> {
    let shown = post.tags.len().min(CARD_TAGS);
    PostCard {
        id: post.id,
        title: &post.title,
        excerpt: &post.excerpt,
        date: display_date(&post.date),
        read_time: &post.read_time,
        image: &post.image,
        tags: &post.tags[..shown],
        extra_tags: post.tags.len() - shown,
        href,
    }
}

fn project_card(project: &Project, limit: usize, code_href: Option<String>) -> ProjectCard<'_> {
    let shown = project.technologies.len().min(limit);
    ProjectCard {
        id: project.id,
        title: &project.title,
        description: &project.description,
        image: &project.image,
        technologies: &project.technologies[..shown],
        extra_technologies: project.technologies.len() - shown,
        github_url: &project.github_url,
        live_url: &project.live_url,
        code_href,
    }
}
