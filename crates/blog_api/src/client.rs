use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::BlogApiConfig;
use crate::error::BlogApiError;
use crate::headers::build_headers;
use crate::types::{
    AuthData, Comment, CommentRequest, CreatedId, Envelope, LoginRequest, Paginated,
    PasswordRequest, Post, PostRequest, ProfileRequest, RegisterRequest, Role, RoleRequest, User,
    UserData,
};
use crate::url::{join_path, normalize_blog_url, page_query};

#[derive(Debug)]
pub struct BlogApiClient {
    http: Client,
    config: BlogApiConfig,
}

impl BlogApiClient {
    pub fn new(config: BlogApiConfig) -> Result<Self, BlogApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(BlogApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BlogApiConfig {
        &self.config
    }

    pub fn normalized_base_url(&self) -> String {
        normalize_blog_url(&self.config.base_url)
    }

    fn header_map(&self, bearer_token: Option<&str>) -> Result<HeaderMap, BlogApiError> {
        let headers = build_headers(&self.config, bearer_token);
        let mut out = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| BlogApiError::InvalidHeader(format!("invalid header key: {key}")))?;
            let value = HeaderValue::from_str(&value).map_err(|_| {
                BlogApiError::InvalidHeader(format!("invalid header value for {key}"))
            })?;
            out.insert(name, value);
        }
        Ok(out)
    }

    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        bearer_token: Option<&str>,
    ) -> Result<reqwest::RequestBuilder, BlogApiError> {
        let url = join_path(&self.normalized_base_url(), path);
        let headers = self.header_map(bearer_token)?;
        Ok(self.http.request(method, url).headers(headers))
    }

    /// Core request path. A non-success status becomes
    /// [`BlogApiError::Status`] carrying the raw body text; a success decodes
    /// the body as JSON into `T`. One attempt per invocation.
    pub async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        bearer_token: Option<&str>,
    ) -> Result<T, BlogApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build_request(method, path, bearer_token)?;
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(BlogApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(BlogApiError::Status(status, body));
        }

        response.json::<T>().await.map_err(BlogApiError::from)
    }

    /// Unauthenticated GET. Every call is a fresh round trip; nothing is
    /// cached between calls.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, BlogApiError> {
        self.send::<T, ()>(Method::GET, path, None, None).await
    }

    // Auth endpoints.

    pub async fn login(
        &self,
        bearer_token: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<Envelope<AuthData>, BlogApiError> {
        self.send(
            Method::POST,
            "auth/login",
            Some(&LoginRequest { email, password }),
            bearer_token,
        )
        .await
    }

    pub async fn register(
        &self,
        bearer_token: Option<&str>,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Envelope<AuthData>, BlogApiError> {
        self.send(
            Method::POST,
            "auth/register",
            Some(&RegisterRequest {
                name,
                email,
                password,
            }),
            bearer_token,
        )
        .await
    }

    pub async fn me(&self, bearer_token: Option<&str>) -> Result<Envelope<UserData>, BlogApiError> {
        self.send::<_, ()>(Method::GET, "auth/me", None, bearer_token)
            .await
    }

    pub async fn update_profile(
        &self,
        bearer_token: Option<&str>,
        name: &str,
        email: &str,
    ) -> Result<Value, BlogApiError> {
        self.send(
            Method::PUT,
            "auth/me",
            Some(&ProfileRequest { name, email }),
            bearer_token,
        )
        .await
    }

    pub async fn change_password(
        &self,
        bearer_token: Option<&str>,
        current_password: &str,
        new_password: &str,
    ) -> Result<Value, BlogApiError> {
        self.send(
            Method::PUT,
            "auth/me/password",
            Some(&PasswordRequest {
                current_password,
                new_password,
            }),
            bearer_token,
        )
        .await
    }

    // Post endpoints.

    pub async fn list_posts(
        &self,
        page: u32,
        limit: u32,
        q: Option<&str>,
    ) -> Result<Paginated<Post>, BlogApiError> {
        let path = format!("posts?{}", page_query(page, limit, q));
        self.get_public(&path).await
    }

    pub async fn my_posts(
        &self,
        bearer_token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<Post>, BlogApiError> {
        let path = format!("posts/me/mine?{}", page_query(page, limit, None));
        self.send::<_, ()>(Method::GET, &path, None, bearer_token)
            .await
    }

    pub async fn get_post(&self, id: &str) -> Result<Envelope<Post>, BlogApiError> {
        self.get_public(&format!("posts/{id}")).await
    }

    pub async fn create_post(
        &self,
        bearer_token: Option<&str>,
        title: &str,
        content: &str,
    ) -> Result<Envelope<CreatedId>, BlogApiError> {
        self.send(
            Method::POST,
            "posts",
            Some(&PostRequest { title, content }),
            bearer_token,
        )
        .await
    }

    pub async fn update_post(
        &self,
        bearer_token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, BlogApiError> {
        self.send(
            Method::PUT,
            &format!("posts/{id}"),
            Some(&PostRequest { title, content }),
            bearer_token,
        )
        .await
    }

    pub async fn delete_post(
        &self,
        bearer_token: Option<&str>,
        id: &str,
    ) -> Result<Value, BlogApiError> {
        self.send::<_, ()>(Method::DELETE, &format!("posts/{id}"), None, bearer_token)
            .await
    }

    // Comment endpoints.

    pub async fn list_comments(
        &self,
        post_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<Comment>, BlogApiError> {
        let path = format!(
            "posts/{post_id}/comments?{}",
            page_query(page, limit, None)
        );
        self.get_public(&path).await
    }

    pub async fn create_comment(
        &self,
        bearer_token: Option<&str>,
        post_id: &str,
        content: &str,
    ) -> Result<Value, BlogApiError> {
        self.send(
            Method::POST,
            &format!("posts/{post_id}/comments"),
            Some(&CommentRequest { content }),
            bearer_token,
        )
        .await
    }

    pub async fn delete_comment(
        &self,
        bearer_token: Option<&str>,
        id: &str,
    ) -> Result<Value, BlogApiError> {
        self.send::<_, ()>(Method::DELETE, &format!("comments/{id}"), None, bearer_token)
            .await
    }

    // Admin user endpoints.

    pub async fn list_users(
        &self,
        bearer_token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<Paginated<User>, BlogApiError> {
        let path = format!("users?{}", page_query(page, limit, None));
        self.send::<_, ()>(Method::GET, &path, None, bearer_token)
            .await
    }

    pub async fn set_user_role(
        &self,
        bearer_token: Option<&str>,
        id: &str,
        role: Role,
    ) -> Result<Value, BlogApiError> {
        self.send(
            Method::PUT,
            &format!("users/{id}"),
            Some(&RoleRequest { role }),
            bearer_token,
        )
        .await
    }

    pub async fn delete_user(
        &self,
        bearer_token: Option<&str>,
        id: &str,
    ) -> Result<Value, BlogApiError> {
        self.send::<_, ()>(Method::DELETE, &format!("users/{id}"), None, bearer_token)
            .await
    }
}
