//! Transport-only blog API client primitives.
//!
//! This crate owns request building, header construction, URL normalization,
//! and response decoding for the blog backend REST endpoints only. It
//! intentionally contains no session state and no shell/UI coupling.
//!
//! Error propagation contract: a non-success HTTP status surfaces as
//! [`BlogApiError::Status`] carrying the raw response body text verbatim.
//! The transport never interprets error bodies; callers that want field-level
//! validation messages parse the body themselves via
//! [`error::parse_validation_body`].
//!
//! Every call is a single attempt: no retry, no backoff, no cancellation, and
//! no timeout unless one is set on [`BlogApiConfig`].

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod types;
pub mod url;

pub use client::BlogApiClient;
pub use config::BlogApiConfig;
pub use error::BlogApiError;
pub use types::{AuthData, Author, AuthorRef, Comment, Envelope, PageMeta, Paginated, Post, Role, User};
pub use url::normalize_blog_url;
