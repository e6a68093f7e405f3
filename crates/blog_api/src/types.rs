use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// The other role. Used by the admin users view's role switch.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-issued user record, treated as an opaque value object. The backend
/// emits the identifier as either `_id` or `id`; both land in `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Author payload embedded in posts and comments when the backend populates
/// the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Either a populated author object or a bare author-id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Populated(Author),
    Id(String),
}

impl AuthorRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(author) => &author.id,
            Self::Id(id) => id,
        }
    }

    /// Display name when the reference is populated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated(author) => Some(&author.name),
            Self::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// HTML body as authored.
    pub content: String,
    pub author: AuthorRef,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub content: String,
    pub author: AuthorRef,
    /// Owning post id.
    #[serde(rename = "post")]
    pub post_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Pagination envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// Single-object response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// Payload of a successful login/register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub token: String,
}

/// Payload of `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
}

/// Payload of a successful post creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordRequest<'a> {
    #[serde(rename = "currentPassword")]
    pub current_password: &'a str,
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleRequest {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::{AuthorRef, Comment, Envelope, Paginated, Post, Role, User};

    #[test]
    fn user_deserializes_from_either_id_key() {
        let underscored: User =
            serde_json::from_str(r#"{"_id":"u1","name":"Ada","email":"ada@example.com","role":"admin"}"#)
                .expect("_id key should deserialize");
        let plain: User =
            serde_json::from_str(r#"{"id":"u1","name":"Ada","email":"ada@example.com","role":"admin"}"#)
                .expect("id key should deserialize");

        assert_eq!(underscored.id, "u1");
        assert_eq!(plain.id, "u1");
        assert_eq!(underscored.role, Role::Admin);
    }

    #[test]
    fn user_serialization_round_trips() {
        let user = User {
            id: "u2".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: Role::User,
            created_at: None,
            updated_at: None,
        };

        let raw = serde_json::to_string(&user).expect("user should serialize");
        let back: User = serde_json::from_str(&raw).expect("serialized user should parse");
        assert_eq!(back, user);
    }

    #[test]
    fn post_author_accepts_populated_and_bare_forms() {
        let populated: Post = serde_json::from_str(
            r#"{"_id":"p1","title":"T","content":"<p>B</p>","author":{"_id":"u1","name":"Ada","email":"ada@example.com","role":"user"},"createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .expect("populated author should deserialize");
        let bare: Post = serde_json::from_str(
            r#"{"_id":"p2","title":"T","content":"B","author":"u1","createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .expect("bare author id should deserialize");

        assert_eq!(populated.author.name(), Some("Ada"));
        assert_eq!(populated.author.id(), "u1");
        assert!(matches!(bare.author, AuthorRef::Id(_)));
        assert_eq!(bare.author.id(), "u1");
        assert_eq!(bare.author.name(), None);
    }

    #[test]
    fn comment_wire_field_is_named_post() {
        let comment: Comment = serde_json::from_str(
            r#"{"_id":"c1","content":"hi","author":"u1","post":"p1","createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .expect("comment should deserialize");

        assert_eq!(comment.post_id, "p1");
    }

    #[test]
    fn pagination_envelope_carries_meta() {
        let page: Paginated<User> = serde_json::from_str(
            r#"{"success":true,"data":[],"meta":{"page":2,"limit":10,"total":31,"pages":4}}"#,
        )
        .expect("paginated envelope should deserialize");

        assert!(page.success);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.pages, 4);
        assert_eq!(page.meta.total, 31);
    }

    #[test]
    fn single_object_envelope_unwraps_data() {
        let envelope: Envelope<super::CreatedId> =
            serde_json::from_str(r#"{"success":true,"data":{"_id":"p9"}}"#)
                .expect("envelope should deserialize");

        assert_eq!(envelope.data.id, "p9");
    }
}
