use blog_api::error::BlogApiError;
use blog_api::types::{AuthData, Comment, Paginated, Post, Role, User};
use blog_api::{BlogApiClient, BlogApiConfig};
use tracing::debug;

pub type GatewayResult<T> = Result<T, BlogApiError>;

/// Backend surface the session context and pages talk to. Implemented by the
/// live HTTP adapter below and by recording mocks in tests.
///
/// Operations that the backend may reject without authentication take the
/// bearer token explicitly as `Option<&str>`; when it is `None` the request
/// still goes out unauthenticated and the backend answers with 401. Public
/// reads take no token at all.
pub trait Gateway {
    fn login(&mut self, token: Option<&str>, email: &str, password: &str)
        -> GatewayResult<AuthData>;
    fn register(
        &mut self,
        token: Option<&str>,
        name: &str,
        email: &str,
        password: &str,
    ) -> GatewayResult<AuthData>;
    fn me(&mut self, token: &str) -> GatewayResult<User>;
    fn update_profile(&mut self, token: Option<&str>, name: &str, email: &str)
        -> GatewayResult<()>;
    fn change_password(
        &mut self,
        token: Option<&str>,
        current_password: &str,
        new_password: &str,
    ) -> GatewayResult<()>;

    fn list_posts(&mut self, page: u32, limit: u32, q: Option<&str>)
        -> GatewayResult<Paginated<Post>>;
    fn my_posts(&mut self, token: Option<&str>, page: u32, limit: u32)
        -> GatewayResult<Paginated<Post>>;
    fn get_post(&mut self, id: &str) -> GatewayResult<Post>;
    fn create_post(&mut self, token: Option<&str>, title: &str, content: &str)
        -> GatewayResult<String>;
    fn update_post(
        &mut self,
        token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> GatewayResult<()>;
    fn delete_post(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()>;

    fn list_comments(
        &mut self,
        post_id: &str,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<Comment>>;
    fn create_comment(
        &mut self,
        token: Option<&str>,
        post_id: &str,
        content: &str,
    ) -> GatewayResult<()>;
    fn delete_comment(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()>;

    fn list_users(&mut self, token: Option<&str>, page: u32, limit: u32)
        -> GatewayResult<Paginated<User>>;
    fn set_user_role(&mut self, token: Option<&str>, id: &str, role: Role) -> GatewayResult<()>;
    fn delete_user(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()>;
}

/// Live adapter: owns the async transport client and a current-thread
/// runtime, so callers stay synchronous and one request runs at a time.
pub struct HttpGateway {
    runtime: tokio::runtime::Runtime,
    client: BlogApiClient,
}

impl HttpGateway {
    pub fn new(config: BlogApiConfig) -> Result<Self, BlogApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                BlogApiError::Unknown(format!("failed to initialize tokio runtime: {error}"))
            })?;
        let client = BlogApiClient::new(config)?;
        Ok(Self { runtime, client })
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        self.client.normalized_base_url()
    }
}

impl Gateway for HttpGateway {
    fn login(
        &mut self,
        token: Option<&str>,
        email: &str,
        password: &str,
    ) -> GatewayResult<AuthData> {
        let response = self.runtime.block_on(self.client.login(token, email, password))?;
        Ok(response.data)
    }

    fn register(
        &mut self,
        token: Option<&str>,
        name: &str,
        email: &str,
        password: &str,
    ) -> GatewayResult<AuthData> {
        let response = self
            .runtime
            .block_on(self.client.register(token, name, email, password))?;
        Ok(response.data)
    }

    fn me(&mut self, token: &str) -> GatewayResult<User> {
        let response = self.runtime.block_on(self.client.me(Some(token)))?;
        Ok(response.data.user)
    }

    fn update_profile(
        &mut self,
        token: Option<&str>,
        name: &str,
        email: &str,
    ) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.update_profile(token, name, email))
            .map(|_| ())
    }

    fn change_password(
        &mut self,
        token: Option<&str>,
        current_password: &str,
        new_password: &str,
    ) -> GatewayResult<()> {
        self.runtime
            .block_on(
                self.client
                    .change_password(token, current_password, new_password),
            )
            .map(|_| ())
    }

    fn list_posts(
        &mut self,
        page: u32,
        limit: u32,
        q: Option<&str>,
    ) -> GatewayResult<Paginated<Post>> {
        debug!(target: "blog_console", "loading posts page={page} limit={limit} q={q:?}");
        self.runtime.block_on(self.client.list_posts(page, limit, q))
    }

    fn my_posts(
        &mut self,
        token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<Post>> {
        debug!(target: "blog_console", "loading own posts page={page} limit={limit}");
        self.runtime.block_on(self.client.my_posts(token, page, limit))
    }

    fn get_post(&mut self, id: &str) -> GatewayResult<Post> {
        let response = self.runtime.block_on(self.client.get_post(id))?;
        Ok(response.data)
    }

    fn create_post(
        &mut self,
        token: Option<&str>,
        title: &str,
        content: &str,
    ) -> GatewayResult<String> {
        let response = self
            .runtime
            .block_on(self.client.create_post(token, title, content))?;
        Ok(response.data.id)
    }

    fn update_post(
        &mut self,
        token: Option<&str>,
        id: &str,
        title: &str,
        content: &str,
    ) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.update_post(token, id, title, content))
            .map(|_| ())
    }

    fn delete_post(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.delete_post(token, id))
            .map(|_| ())
    }

    fn list_comments(
        &mut self,
        post_id: &str,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<Comment>> {
        self.runtime
            .block_on(self.client.list_comments(post_id, page, limit))
    }

    fn create_comment(
        &mut self,
        token: Option<&str>,
        post_id: &str,
        content: &str,
    ) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.create_comment(token, post_id, content))
            .map(|_| ())
    }

    fn delete_comment(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.delete_comment(token, id))
            .map(|_| ())
    }

    fn list_users(
        &mut self,
        token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<User>> {
        debug!(target: "blog_console", "loading users page={page} limit={limit}");
        self.runtime.block_on(self.client.list_users(token, page, limit))
    }

    fn set_user_role(&mut self, token: Option<&str>, id: &str, role: Role) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.set_user_role(token, id, role))
            .map(|_| ())
    }

    fn delete_user(&mut self, token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.runtime
            .block_on(self.client.delete_user(token, id))
            .map(|_| ())
    }
}
