use std::path::PathBuf;

pub const BASE_URL_ENV_VAR: &str = "BLOG_CONSOLE_BASE_URL";
pub const STATE_DIR_ENV_VAR: &str = "BLOG_CONSOLE_STATE_DIR";

/// Process-level configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL override, if any.
    pub base_url: Option<String>,
    /// Directory under which the session state directory is created.
    pub state_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let base_url = sanitize(std::env::var(BASE_URL_ENV_VAR).ok());
        let state_dir = sanitize(std::env::var(STATE_DIR_ENV_VAR).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            base_url,
            state_dir,
        }
    }
}

fn sanitize(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn sanitize_drops_blank_values() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some(String::new())), None);
        assert_eq!(sanitize(Some("   ".to_string())), None);
    }

    #[test]
    fn sanitize_trims_surrounding_whitespace() {
        assert_eq!(
            sanitize(Some("  https://example.com  ".to_string())),
            Some("https://example.com".to_string())
        );
    }
}
