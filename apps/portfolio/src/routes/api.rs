//! JSON API under `/api/v1`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::blocks::{self, DisplayBlock};
use crate::catalog::{self, CategoryFilter, FilterState};
use crate::clipboard::{self, CapturedClipboard};
use crate::contact::{ContactForm, ContactSession, SUCCESS_MESSAGE};
use crate::errors::AppError;
use crate::models::blog::BlogPost;
use crate::models::project::Project;
use crate::notify::Notification;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct PostResponse {
    #[serde(flatten)]
    pub post: BlogPost,
    pub blocks: Vec<DisplayBlock>,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub blocks: Vec<DisplayBlock>,
}

#[derive(Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub notification: Notification,
}

/// GET /api/v1/posts?category=&q=
pub async fn handle_list_posts(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    let filter = FilterState::new(
        CategoryFilter::parse(query.category.as_deref())?,
        query.q.unwrap_or_default(),
    );
    let posts = catalog::filter(&state.content.posts, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(posts))
}

/// GET /api/v1/posts/:id
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .content
        .post(id)
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;
    Ok(Json(PostResponse {
        blocks: blocks::render(&post.content),
        post: post.clone(),
    }))
}

/// GET /api/v1/projects?category=&q=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let filter = FilterState::new(
        CategoryFilter::parse(query.category.as_deref())?,
        query.q.unwrap_or_default(),
    );
    let projects = catalog::filter(&state.content.projects, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(projects))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .content
        .project(id)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;
    Ok(Json(ProjectResponse {
        blocks: blocks::render(&project.long_description),
        project: project.clone(),
    }))
}

/// POST /api/v1/projects/:id/copy
/// Returns the code sample for the browser to place on the clipboard.
pub async fn handle_copy_code(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CopyResponse>, AppError> {
    let project = state
        .content
        .project(id)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;

    let captured = CapturedClipboard::new();
    let notification = clipboard::copy_code_sample(&captured, project)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} has no code sample")))?;
    let text = captured.take().unwrap_or_default();

    Ok(Json(CopyResponse { text, notification }))
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Notification>, AppError> {
    let mut session = ContactSession::new(form);
    let message = session.begin().ok_or_else(|| {
        AppError::Validation(
            session
                .notification()
                .map(|n| n.message.clone())
                .unwrap_or_default(),
        )
    })?;

    state.relay.send(&message).await?;
    info!(from = %message.from_email, "Contact message relayed");
    Ok(Json(Notification::success(SUCCESS_MESSAGE)))
}

/// GET /api/v1/resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let doc = serde_json::to_value(state.content.resume_document())
        .map_err(anyhow::Error::from)?;
    Ok(Json(doc))
}

/// POST /api/v1/render
/// Renders raw post text into display blocks.
pub async fn handle_render(body: String) -> Json<Vec<DisplayBlock>> {
    Json(blocks::render(&body))
}
