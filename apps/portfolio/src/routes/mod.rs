pub mod api;
pub mod health;
pub mod site;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(site::handle_home))
        .route("/about", get(site::handle_about))
        .route("/projects", get(site::handle_projects))
        .route("/blog", get(site::handle_blog))
        .route("/resume", get(site::handle_resume))
        .route("/resume/download", get(site::handle_resume_download))
        .route(
            "/contact",
            get(site::handle_contact).post(site::handle_contact_submit),
        )
        // JSON API
        .route("/api/v1/posts", get(api::handle_list_posts))
        .route("/api/v1/posts/:id", get(api::handle_get_post))
        .route("/api/v1/projects", get(api::handle_list_projects))
        .route("/api/v1/projects/:id", get(api::handle_get_project))
        .route("/api/v1/projects/:id/copy", post(api::handle_copy_code))
        .route("/api/v1/contact", post(api::handle_contact))
        .route("/api/v1/resume", get(api::handle_resume))
        .route("/api/v1/render", post(api::handle_render))
}

/// Builds the router. With a non-empty `base_path` every site route is
/// nested under it; `/health` always stays at the root.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let router = Router::new().route("/health", get(health::health_handler));
    let router = if base_path.is_empty() {
        router.merge(site_routes())
    } else {
        router.nest(base_path, site_routes())
    };

    router.fallback(site::handle_not_found).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::contact::relay::{ContactMessage, ContactRelay, RelayError};
    use crate::contact::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use crate::content::ContentStore;
    use crate::views::ViewEngine;

    /// Records every message; answers with the configured HTTP status.
    struct StubRelay {
        status: u16,
        sent: Mutex<Vec<ContactMessage>>,
    }

    #[async_trait]
    impl ContactRelay for StubRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(message.clone());
            if self.status == 200 {
                Ok(())
            } else {
                Err(RelayError::Rejected {
                    status: self.status,
                    message: "rejected".to_string(),
                })
            }
        }
    }

    fn app_with(base_path: &str, status: u16) -> (Router, Arc<StubRelay>) {
        let relay = Arc::new(StubRelay {
            status,
            sent: Mutex::new(Vec::new()),
        });
        let state = AppState {
            content: Arc::new(ContentStore::embedded().unwrap()),
            views: Arc::new(ViewEngine::new(base_path).unwrap()),
            relay: relay.clone(),
        };
        (build_router(state, base_path), relay)
    }

    fn app() -> Router {
        app_with("", 200).0
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_route_renders() {
        for uri in ["/", "/about", "/projects", "/blog", "/resume", "/contact"] {
            let (status, html) = get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(html.contains("<nav"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["posts"], 4);
        assert_eq!(json["projects"], 6);
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_page() {
        let (status, html) = get(app(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_blog_search_narrows_results() {
        let (status, html) = get(app(), "/blog?q=css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Modern CSS Techniques"));
        assert!(!html.contains("Building Scalable React Applications"));
        assert!(html.contains("Search Results"));
        assert!(!html.contains("Featured Posts"));
    }

    #[tokio::test]
    async fn test_blog_unknown_category_falls_back_to_all() {
        let (status, html) = get(app(), "/blog?category=Rust").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Featured Posts"));
    }

    #[tokio::test]
    async fn test_blog_post_opens_modal() {
        let (_, closed) = get(app(), "/blog").await;
        assert!(!closed.contains("role=\"dialog\""));

        let (status, html) = get(app(), "/blog?post=4").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("<pre><code>"));

        let (_, missing) = get(app(), "/blog?post=99").await;
        assert!(!missing.contains("role=\"dialog\""));
    }

    #[tokio::test]
    async fn test_close_and_backdrop_links_dismiss_modal() {
        for uri in [
            "/blog?post=2&click=close",
            "/blog?post=2&click=backdrop",
            "/projects?q=shop&project=1&click=close",
            "/projects?q=shop&project=1&click=backdrop",
        ] {
            let (status, html) = get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(!html.contains("role=\"dialog\""), "{uri}");
        }

        let (_, html) = get(app(), "/blog?post=2&click=panel").await;
        assert!(html.contains("role=\"dialog\""));
    }

    #[tokio::test]
    async fn test_project_modal_links_keep_search() {
        let (_, html) = get(app(), "/projects?q=shop&project=1").await;
        assert!(html.contains("q=shop&amp;project=1&amp;click=close"));
        assert!(html.contains("q=shop&amp;project=1&amp;click=backdrop"));
    }

    #[tokio::test]
    async fn test_projects_empty_category() {
        let (status, html) = get(app(), "/projects?category=mobile").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No projects in this category yet."));
    }

    #[tokio::test]
    async fn test_project_modal_has_copy_button() {
        let (_, html) = get(app(), "/projects?project=1").await;
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("data-copy-url=\""));

        let (_, html) = get(app(), "/projects?project=3").await;
        assert!(!html.contains("data-copy-url=\""));
    }

    #[tokio::test]
    async fn test_resume_download_is_attachment() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/resume/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Your_Name_Resume.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Your Name\nFull Stack Developer\n"));
        assert!(text.contains("PROFESSIONAL SUMMARY"));
    }

    #[tokio::test]
    async fn test_contact_submit_success_clears_form() {
        let (app, relay) = app_with("", 200);
        let (status, html) = post_form(
            app,
            "/contact",
            "name=Ada&email=ada%40example.com&subject=Hello&message=Hi+there",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains("value=\"Ada\""));

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_email, "ada@example.com");
        assert_eq!(sent[0].message, "Hi there");
    }

    #[tokio::test]
    async fn test_contact_submit_failure_keeps_form() {
        let (app, _) = app_with("", 400);
        let (status, html) = post_form(
            app,
            "/contact",
            "name=Ada&email=ada%40example.com&subject=Hello&message=Hi",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(FAILURE_MESSAGE));
        assert!(html.contains("value=\"Ada\""));
    }

    #[tokio::test]
    async fn test_contact_submit_blank_fields_not_relayed() {
        let (app, relay) = app_with("", 200);
        let (_, html) = post_form(app, "/contact", "name=Ada").await;
        assert!(html.contains("Please fill in: email, subject, message"));
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_posts_filter() {
        let (status, body) = get(app(), "/api/v1/posts?category=CSS").await;
        assert_eq!(status, StatusCode::OK);
        let posts: Value = serde_json::from_str(&body).unwrap();
        let ids: Vec<u64> = posts
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn test_api_unknown_category_is_bad_request() {
        let (status, body) = get(app(), "/api/v1/posts?category=Rust").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_post_detail_includes_blocks() {
        let (status, body) = get(app(), "/api/v1/posts/1").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["category"], "React");
        assert!(!json["blocks"].as_array().unwrap().is_empty());

        let (status, _) = get(app(), "/api/v1/posts/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_copy_code() {
        let (status, json) = post_json(app(), "/api/v1/projects/1/copy", Value::Null).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!json["text"].as_str().unwrap().is_empty());
        assert_eq!(json["notification"]["kind"], "success");
        assert_eq!(json["notification"]["message"], "Code copied to clipboard!");

        let (status, _) = post_json(app(), "/api/v1/projects/3/copy", Value::Null).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_contact_relay_failure() {
        let form = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Hi"
        });

        let (app, _) = app_with("", 200);
        let (status, json) = post_json(app, "/api/v1/contact", form.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], SUCCESS_MESSAGE);

        let (app, _) = app_with("", 500);
        let (status, json) = post_json(app, "/api/v1/contact", form).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["message"], FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_api_render() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/render")
            .body(Body::from("# Title\n\ntext"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["kind"], "heading");
        assert_eq!(json[1]["kind"], "blank");
        assert_eq!(json[2]["kind"], "paragraph");
    }

    #[tokio::test]
    async fn test_base_path_nests_site() {
        let (app, _) = app_with("/portfolio", 200);
        let (status, _) = get(app.clone(), "/portfolio/blog").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(app.clone(), "/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(app, "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
