use blog_api::types::Post;

use super::PagedList;

/// Posts fetched per page on the own-posts dashboard.
pub const PAGE_LIMIT: u32 = 10;

/// The signed-in user's own posts.
#[derive(Debug, Default)]
pub struct MinePage {
    pub list: PagedList<Post>,
}

impl MinePage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
