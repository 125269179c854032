//! HTML page handlers. Filter and modal state travel in the query string.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form,
};
use serde::Deserialize;
use tera::Context;
use tracing::debug;

use crate::catalog::{Category, CategoryFilter, ClickTarget, FilterState, Selection};
use crate::contact::{ContactForm, ContactSession};
use crate::errors::AppError;
use crate::export;
use crate::state::AppState;
use crate::views::{pages, Page};

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    /// Selected blog post id.
    pub post: Option<String>,
    /// Selected project id.
    pub project: Option<String>,
    /// Where the modal was clicked: `close`, `backdrop` or `panel`.
    pub click: Option<String>,
}

impl CatalogQuery {
    /// Pages never reject a bad category link; they show everything instead.
    fn filter<C: Category>(&self) -> FilterState<C> {
        let category = CategoryFilter::parse(self.category.as_deref()).unwrap_or_else(|e| {
            debug!("{e}, showing all");
            CategoryFilter::All
        });
        FilterState::new(category, self.q.clone().unwrap_or_default())
    }

    fn click(&self) -> Option<ClickTarget> {
        self.click.as_deref().and_then(ClickTarget::from_param)
    }
}

/// Opens `entry` if one was requested, then applies any click on the modal.
fn select<T>(entry: Option<T>, click: Option<ClickTarget>) -> Selection<T> {
    let mut selection = Selection::new();
    if let Some(entry) = entry {
        selection.open_with(entry);
    }
    if let Some(target) = click {
        selection.handle_click(target);
    }
    debug!(open = selection.is_open(), ?click, "modal state");
    selection
}

fn parse_id(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|id| id.trim().parse().ok())
}

fn render(state: &AppState, page: Page, ctx: Context) -> Result<Html<String>, AppError> {
    Ok(Html(state.views.render(page, &state.content, ctx)?))
}

fn render_default(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    render(
        state,
        page,
        pages::default_context(&state.views, &state.content, page),
    )
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_default(&state, Page::Home)
}

/// GET /about
pub async fn handle_about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_default(&state, Page::About)
}

/// GET /projects?category=&q=&project=&click=
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.filter();
    let project = parse_id(query.project.as_deref()).and_then(|id| state.content.project(id));
    let selection = select(project, query.click());
    let ctx = pages::projects(&state.views, &state.content, &filter, &selection);
    render(&state, Page::Projects, ctx)
}

/// GET /blog?category=&q=&post=&click=
pub async fn handle_blog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.filter();
    let post = parse_id(query.post.as_deref()).and_then(|id| state.content.post(id));
    let selection = select(post, query.click());
    let ctx = pages::blog(&state.views, &state.content, &filter, &selection);
    render(&state, Page::Blog, ctx)
}

/// GET /resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_default(&state, Page::Resume)
}

/// GET /resume/download
pub async fn handle_resume_download(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let doc = state.content.resume_document();
    let text = export::export_text(&doc).map_err(anyhow::Error::from)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&doc.personal.name)
    );
    Ok((
        [
            (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    ))
}

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_default(&state, Page::Contact)
}

/// POST /contact
/// Relays the form and re-renders the page with the outcome notification.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, AppError> {
    let mut session = ContactSession::new(form);
    session.submit(state.relay.as_ref()).await;
    render(&state, Page::Contact, pages::contact(&state.content, &session))
}

/// Fallback for unknown paths.
pub async fn handle_not_found(
    State(state): State<AppState>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let page = render_default(&state, Page::NotFound)?;
    Ok((StatusCode::NOT_FOUND, page))
}
