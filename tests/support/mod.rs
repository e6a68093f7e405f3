use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use blog_api::error::BlogApiError;
use blog_api::types::{
    AuthData, Author, AuthorRef, Comment, PageMeta, Paginated, Post, Role, User,
};
use blog_console::gateway::{Gateway, GatewayResult};
use reqwest::StatusCode;

pub fn user(id: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
        created_at: None,
        updated_at: None,
    }
}

pub fn post(id: &str, title: &str, content: &str, author_id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: AuthorRef::Populated(Author {
            id: author_id.to_string(),
            name: "Ada".to_string(),
            email: None,
            role: None,
        }),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

pub fn comment(id: &str, content: &str, author_id: &str, post_id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        content: content.to_string(),
        author: AuthorRef::Id(author_id.to_string()),
        post_id: post_id.to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

pub fn paginated<T>(data: Vec<T>, page: u32, pages: u32, limit: u32) -> Paginated<T> {
    let total = data.len() as u64;
    Paginated {
        success: true,
        data,
        meta: PageMeta {
            page,
            limit,
            total,
            pages,
        },
    }
}

/// Canned responses plus the record of every call made.
#[derive(Default)]
pub struct SpyState {
    pub calls: Vec<String>,
    pub auth: Option<AuthData>,
    pub login_error_body: Option<String>,
    pub me_user: Option<User>,
    pub posts: VecDeque<Paginated<Post>>,
    pub my_posts: VecDeque<Paginated<Post>>,
    pub comments: VecDeque<Paginated<Comment>>,
    pub users: VecDeque<Paginated<User>>,
    pub posts_by_id: Vec<Post>,
    pub created_id: Option<String>,
}

/// Recording gateway handle. Clones share one [`SpyState`], so a test keeps
/// a handle for assertions while the shell owns another. Anything without a
/// canned response fails loudly, so a test can never silently hit an
/// endpoint it did not stage.
#[derive(Default, Clone)]
pub struct GatewaySpy {
    state: Arc<Mutex<SpyState>>,
}

impl GatewaySpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, SpyState> {
        lock_unpoisoned(&self.state)
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn missing(what: &str) -> BlogApiError {
    BlogApiError::Unknown(format!("no canned response for {what}"))
}

impl Gateway for GatewaySpy {
    fn login(
        &mut self,
        _token: Option<&str>,
        email: &str,
        _password: &str,
    ) -> GatewayResult<AuthData> {
        let mut state = self.state();
        state.calls.push(format!("login {email}"));
        if let Some(body) = &state.login_error_body {
            return Err(BlogApiError::Status(
                StatusCode::UNPROCESSABLE_ENTITY,
                body.clone(),
            ));
        }
        state.auth.clone().ok_or_else(|| missing("login"))
    }

    fn register(
        &mut self,
        _token: Option<&str>,
        name: &str,
        _email: &str,
        _password: &str,
    ) -> GatewayResult<AuthData> {
        let mut state = self.state();
        state.calls.push(format!("register {name}"));
        state.auth.clone().ok_or_else(|| missing("register"))
    }

    fn me(&mut self, _token: &str) -> GatewayResult<User> {
        let mut state = self.state();
        state.calls.push("me".to_string());
        state.me_user.clone().ok_or_else(|| missing("me"))
    }

    fn update_profile(
        &mut self,
        _token: Option<&str>,
        name: &str,
        email: &str,
    ) -> GatewayResult<()> {
        self.state()
            .calls
            .push(format!("update_profile {name} {email}"));
        Ok(())
    }

    fn change_password(
        &mut self,
        _token: Option<&str>,
        _current_password: &str,
        _new_password: &str,
    ) -> GatewayResult<()> {
        self.state().calls.push("change_password".to_string());
        Ok(())
    }

    fn list_posts(
        &mut self,
        page: u32,
        limit: u32,
        q: Option<&str>,
    ) -> GatewayResult<Paginated<Post>> {
        let mut state = self.state();
        state
            .calls
            .push(format!("list_posts page={page} limit={limit} q={q:?}"));
        state.posts.pop_front().ok_or_else(|| missing("list_posts"))
    }

    fn my_posts(
        &mut self,
        token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<Post>> {
        let mut state = self.state();
        state.calls.push(format!(
            "my_posts page={page} limit={limit} authed={}",
            token.is_some()
        ));
        state
            .my_posts
            .pop_front()
            .ok_or_else(|| missing("my_posts"))
    }

    fn get_post(&mut self, id: &str) -> GatewayResult<Post> {
        let mut state = self.state();
        state.calls.push(format!("get_post {id}"));
        state
            .posts_by_id
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| missing("get_post"))
    }

    fn create_post(
        &mut self,
        token: Option<&str>,
        title: &str,
        _content: &str,
    ) -> GatewayResult<String> {
        let mut state = self.state();
        state
            .calls
            .push(format!("create_post {title} authed={}", token.is_some()));
        state.created_id.clone().ok_or_else(|| missing("create_post"))
    }

    fn update_post(
        &mut self,
        _token: Option<&str>,
        id: &str,
        _title: &str,
        _content: &str,
    ) -> GatewayResult<()> {
        self.state().calls.push(format!("update_post {id}"));
        Ok(())
    }

    fn delete_post(&mut self, _token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.state().calls.push(format!("delete_post {id}"));
        Ok(())
    }

    fn list_comments(
        &mut self,
        post_id: &str,
        page: u32,
        _limit: u32,
    ) -> GatewayResult<Paginated<Comment>> {
        let mut state = self.state();
        state
            .calls
            .push(format!("list_comments {post_id} page={page}"));
        state
            .comments
            .pop_front()
            .ok_or_else(|| missing("list_comments"))
    }

    fn create_comment(
        &mut self,
        _token: Option<&str>,
        post_id: &str,
        _content: &str,
    ) -> GatewayResult<()> {
        self.state().calls.push(format!("create_comment {post_id}"));
        Ok(())
    }

    fn delete_comment(&mut self, _token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.state().calls.push(format!("delete_comment {id}"));
        Ok(())
    }

    fn list_users(
        &mut self,
        _token: Option<&str>,
        page: u32,
        limit: u32,
    ) -> GatewayResult<Paginated<User>> {
        let mut state = self.state();
        state
            .calls
            .push(format!("list_users page={page} limit={limit}"));
        state.users.pop_front().ok_or_else(|| missing("list_users"))
    }

    fn set_user_role(&mut self, _token: Option<&str>, id: &str, role: Role) -> GatewayResult<()> {
        self.state().calls.push(format!("set_user_role {id} {role}"));
        Ok(())
    }

    fn delete_user(&mut self, _token: Option<&str>, id: &str) -> GatewayResult<()> {
        self.state().calls.push(format!("delete_user {id}"));
        Ok(())
    }
}
