use blog_api::types::{Comment, Post, Role, User};

use super::PagedList;

/// Comments fetched per page under a post.
pub const COMMENT_LIMIT: u32 = 10;

/// A single post plus the currently loaded page of its comments.
#[derive(Debug)]
pub struct PostView {
    pub post: Post,
    pub comments: PagedList<Comment>,
}

impl PostView {
    #[must_use]
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comments: PagedList::new(),
        }
    }

    /// Advisory check: admins and the post's author may edit or delete it.
    /// The backend is the enforcement point; this only gates shell commands.
    #[must_use]
    pub fn can_manage(&self, user: Option<&User>) -> bool {
        can_manage(user, &self.post)
    }

    /// Advisory check for a loaded comment: admins and the comment's author.
    #[must_use]
    pub fn can_delete_comment(&self, user: Option<&User>, comment_id: &str) -> bool {
        let Some(user) = user else {
            return false;
        };
        if user.role == Role::Admin {
            return true;
        }
        self.comments
            .items()
            .iter()
            .any(|comment| comment.id == comment_id && comment.author.id() == user.id)
    }
}

/// Post-level variant of the advisory ownership-or-admin check, usable before
/// a [`PostView`] exists.
#[must_use]
pub fn can_manage(user: Option<&User>, post: &Post) -> bool {
    let Some(user) = user else {
        return false;
    };
    user.role == Role::Admin || user.id == post.author.id()
}
