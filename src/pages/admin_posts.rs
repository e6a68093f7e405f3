use blog_api::types::Post;

use super::{contains_ci, ordered, PagedList, SortOrder};

/// Posts fetched per page on the management table.
pub const PAGE_LIMIT: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostColumn {
    Title,
    Author,
    Created,
}

impl PostColumn {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "created" | "createdat" | "date" => Some(Self::Created),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Created => "created",
        }
    }
}

/// Management view over all posts. The filter matches title or author name;
/// filter and sort apply to the loaded page only and never refetch.
#[derive(Debug)]
pub struct AdminPostsPage {
    pub list: PagedList<Post>,
    filter: String,
    sort_by: PostColumn,
    order: SortOrder,
}

impl AdminPostsPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: PagedList::new(),
            filter: String::new(),
            sort_by: PostColumn::Created,
            order: SortOrder::Descending,
        }
    }

    pub fn set_filter(&mut self, term: Option<String>) {
        self.filter = term.map(|term| term.trim().to_string()).unwrap_or_default();
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Selecting the active column flips the order; selecting another column
    /// switches to it ascending.
    pub fn toggle_sort(&mut self, column: PostColumn) {
        if self.sort_by == column {
            self.order = self.order.flipped();
        } else {
            self.sort_by = column;
            self.order = SortOrder::Ascending;
        }
    }

    #[must_use]
    pub fn sort_by(&self) -> PostColumn {
        self.sort_by
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The loaded page, filtered and sorted for display.
    #[must_use]
    pub fn visible(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .list
            .items()
            .iter()
            .filter(|post| {
                if self.filter.is_empty() {
                    return true;
                }
                contains_ci(&post.title, &self.filter)
                    || contains_ci(post.author.name().unwrap_or("Unknown"), &self.filter)
            })
            .collect();

        posts.sort_by(|a, b| ordered(&self.sort_key(a), &self.sort_key(b), self.order));
        posts
    }

    fn sort_key(&self, post: &Post) -> String {
        match self.sort_by {
            PostColumn::Title => post.title.to_lowercase(),
            PostColumn::Author => post.author.name().unwrap_or("Unknown").to_lowercase(),
            PostColumn::Created => post.created_at.clone(),
        }
    }
}

impl Default for AdminPostsPage {
    fn default() -> Self {
        Self::new()
    }
}
