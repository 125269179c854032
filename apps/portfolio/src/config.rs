use anyhow::{Context, Result};

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub relay: RelayConfig,
    pub port: u16,
    /// Prefix every route is nested under, e.g. `/portfolio`. Empty for root.
    pub base_path: String,
    pub rust_log: String,
}

/// The three opaque EmailJS identifiers plus optional server-side credentials.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            relay: RelayConfig {
                service_id: require_env("EMAILJS_SERVICE_ID")?,
                template_id: require_env("EMAILJS_TEMPLATE_ID")?,
                public_key: require_env("EMAILJS_PUBLIC_KEY")?,
                private_key: std::env::var("EMAILJS_PRIVATE_KEY").ok(),
                api_url: std::env::var("EMAILJS_API_URL")
                    .unwrap_or_else(|_| DEFAULT_EMAILJS_API_URL.to_string()),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            base_path: normalize_base_path(&std::env::var("BASE_PATH").unwrap_or_default()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// `portfolio/` -> `/portfolio`, `/` -> ``.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("portfolio"), "/portfolio");
        assert_eq!(normalize_base_path("/portfolio/"), "/portfolio");
    }
}
