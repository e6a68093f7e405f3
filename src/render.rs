//! Plain-text rendering of page state. Presentation only; nothing in here
//! mutates state or talks to the network.

use std::fmt::Write as _;

use blog_api::types::{AuthorRef, Comment, Post, User};

use crate::pages::admin_posts::AdminPostsPage;
use crate::pages::admin_users::AdminUsersPage;
use crate::pages::browse::BrowsePage;
use crate::pages::mine::MinePage;
use crate::pages::post_view::PostView;
use crate::pages::PageCursor;

const PREVIEW_LEN: usize = 100;

/// Strips HTML tags, leaving the text content. An unterminated tag swallows
/// the rest of the input, same as the original markup-preview behavior.
pub fn strip_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Tag-stripped, whitespace-collapsed preview of post content.
pub fn preview(content: &str, max_chars: usize) -> String {
    let text = strip_html(content);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(max_chars).collect();
    format!("{truncated}...")
}

pub fn author_name(author: &AuthorRef) -> &str {
    author.name().unwrap_or("Unknown")
}

fn page_footer(cursor: PageCursor) -> String {
    format!("Page {} of {}", cursor.page, cursor.pages)
}

fn post_line(post: &Post) -> String {
    format!(
        "[{}] {} — by {} ({})\n    {}",
        post.id,
        post.title,
        author_name(&post.author),
        post.created_at,
        preview(&post.content, PREVIEW_LEN)
    )
}

pub fn render_browse(page: &BrowsePage) -> String {
    let mut out = String::new();
    match page.query() {
        Some(term) => {
            let _ = writeln!(
                out,
                "Blog posts matching \"{term}\" ({} found)",
                page.list.total()
            );
        }
        None => {
            let _ = writeln!(out, "Blog posts ({} total)", page.list.total());
        }
    }

    if page.list.items().is_empty() {
        let _ = writeln!(out, "  no posts found");
    }
    for post in page.list.items() {
        let _ = writeln!(out, "{}", post_line(post));
    }
    let _ = write!(out, "{}", page_footer(page.list.cursor()));
    out
}

pub fn render_mine(page: &MinePage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "My posts ({} total)", page.list.total());
    if page.list.items().is_empty() {
        let _ = writeln!(out, "  no posts yet");
    }
    for post in page.list.items() {
        let _ = writeln!(out, "{}", post_line(post));
    }
    let _ = write!(out, "{}", page_footer(page.list.cursor()));
    out
}

pub fn render_post(view: &PostView) -> String {
    let post = &view.post;
    let mut out = String::new();
    let _ = writeln!(out, "# {}", post.title);
    let _ = writeln!(
        out,
        "by {} — created {}, updated {}",
        author_name(&post.author),
        post.created_at,
        post.updated_at
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", strip_html(&post.content).trim_end());
    let _ = writeln!(out);
    let _ = writeln!(out, "Comments ({} total)", view.comments.total());
    if view.comments.items().is_empty() {
        let _ = writeln!(out, "  no comments yet");
    }
    for comment in view.comments.items() {
        let _ = writeln!(out, "{}", comment_line(comment));
    }
    let _ = write!(out, "{}", page_footer(view.comments.cursor()));
    out
}

fn comment_line(comment: &Comment) -> String {
    format!(
        "[{}] {} ({}): {}",
        comment.id,
        author_name(&comment.author),
        comment.created_at,
        comment.content
    )
}

pub fn render_admin_posts(page: &AdminPostsPage) -> String {
    let visible = page.visible();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Posts management — {} loaded, sorted by {} ({})",
        page.list.items().len(),
        page.sort_by().label(),
        page.order().label()
    );
    if !page.filter().is_empty() {
        let _ = writeln!(out, "filter: \"{}\"", page.filter());
    }
    if visible.is_empty() {
        let _ = writeln!(out, "  no posts found");
    }
    for post in visible {
        let _ = writeln!(
            out,
            "[{}] {} — by {} ({})",
            post.id,
            post.title,
            author_name(&post.author),
            post.created_at
        );
    }
    let _ = write!(out, "{}", page_footer(page.list.cursor()));
    out
}

pub fn render_admin_users(page: &AdminUsersPage) -> String {
    let visible = page.visible();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Users management — {} loaded, {} admins, sorted by {} ({})",
        page.list.items().len(),
        page.admin_count(),
        page.sort_by().label(),
        page.order().label()
    );
    if !page.filter().is_empty() {
        let _ = writeln!(out, "filter: \"{}\"", page.filter());
    }
    if visible.is_empty() {
        let _ = writeln!(out, "  no users found");
    }
    for user in visible {
        let _ = writeln!(
            out,
            "[{}] {} <{}> — {}",
            user.id, user.name, user.email, user.role
        );
    }
    let _ = write!(out, "{}", page_footer(page.list.cursor()));
    out
}

pub fn render_user(user: &User) -> String {
    format!("{} <{}> — {} (id {})", user.name, user.email, user.role, user.id)
}
