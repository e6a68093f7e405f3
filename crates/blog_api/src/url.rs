/// Default base URL for blog backend requests.
pub const DEFAULT_BLOG_BASE_URL: &str = "https://blogpostbackend-fqyz.onrender.com/api";

/// Normalize a base URL to the backend API root.
///
/// Normalization rules:
/// 1) empty/blank input falls back to the default base URL
/// 2) trailing slashes are trimmed
/// 3) a single `/api` suffix is guaranteed
pub fn normalize_blog_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_BLOG_BASE_URL
    } else {
        input.trim()
    };

    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        return trimmed.to_string();
    }
    format!("{trimmed}/api")
}

/// Join a relative endpoint path onto a normalized base URL.
pub fn join_path(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build the query string shared by all list endpoints. The search term is
/// omitted entirely when absent or blank, matching the backend contract.
pub fn page_query(page: u32, limit: u32, q: Option<&str>) -> String {
    let mut query = format!("page={page}&limit={limit}");
    if let Some(term) = q.map(str::trim).filter(|term| !term.is_empty()) {
        query.push_str("&q=");
        query.push_str(&urlencoding::encode(term));
    }
    query
}
