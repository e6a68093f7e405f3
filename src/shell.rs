use std::io::{self, BufRead, Write};

use blog_api::error::{parse_validation_body, BlogApiError};
use blog_api::types::Role;
use blog_api::BlogApiConfig;
use session_store::{session_root, SessionStore};
use tracing::info;

use crate::commands::{parse_command, Command};
use crate::config::AppConfig;
use crate::gateway::{Gateway, HttpGateway};
use crate::pages::admin_posts::{self, AdminPostsPage, PostColumn};
use crate::pages::admin_users::{self, AdminUsersPage, UserColumn};
use crate::pages::browse::{self, BrowsePage};
use crate::pages::mine::{self, MinePage};
use crate::pages::post_view::{self, PostView};
use crate::pages::profile::{validate_password_change, validate_profile};
use crate::render;
use crate::session::{SessionContext, SessionOpError};

const HELP_TEXT: &str = "\
Commands:
  posts [page]          browse published posts
  search <term>         search posts server-side (plain 'search' clears)
  show <id>             open a post with its comments
  comments [page]       page through the open post's comments
  comment <text>        add a comment to the open post
  rmcomment <id>        delete a comment from the open post
  new                   write a post
  edit <id>             edit a post you own
  delete <id>           delete a post you own
  mine [page]           your own posts
  admin posts [page]    posts management table
  admin users [page]    users management table
  filter [term]         filter the loaded management table (local)
  sort <column>         toggle sort on the loaded management table
  next / prev           move between pages of the active view
  role <id>             toggle a user's role
  rmuser <id>           delete a user
  login / register / logout / whoami / refresh
  profile / profile edit / passwd
  help / quit";

/// The page the shell is currently showing, at most one at a time.
#[derive(Debug)]
pub enum View {
    Idle,
    Browse(BrowsePage),
    Mine(MinePage),
    Post(PostView),
    AdminPosts(AdminPostsPage),
    AdminUsers(AdminUsersPage),
}

enum PageTurn {
    Browse(u32),
    Mine(u32),
    Comments(u32),
    AdminPosts(u32),
    AdminUsers(u32),
    Clamped,
    NoView,
}

pub struct Shell {
    gateway: Box<dyn Gateway>,
    session: SessionContext,
    view: View,
}

impl Shell {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut api_config = BlogApiConfig::default();
        if let Some(base_url) = &config.base_url {
            api_config = api_config.with_base_url(base_url.clone());
        }
        let gateway = HttpGateway::new(api_config)?;
        info!(target: "blog_console", "backend endpoint: {}", gateway.base_url());

        let store = SessionStore::open(session_root(&config.state_dir));
        let session = SessionContext::hydrate(store);

        Ok(Self::with_gateway(Box::new(gateway), session))
    }

    /// Assembles a shell over any gateway. Tests use this with a recording
    /// mock.
    pub fn with_gateway(gateway: Box<dyn Gateway>, session: SessionContext) -> Self {
        Self {
            gateway,
            session,
            view: View::Idle,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_loop(&mut input, &mut output)
    }

    /// Line-oriented command loop. Backend failures render as one-line
    /// banners; only terminal I/O failures abort the loop.
    pub fn run_loop(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<()> {
        writeln!(output, "blog console — type 'help' for commands")?;
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let Some(command) = parse_command(&line) else {
                continue;
            };
            if command == Command::Quit {
                break;
            }
            self.dispatch(command, input, output)?;
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        command: Command,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<()> {
        match command {
            Command::Quit => {}
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Invalid { usage } => writeln!(output, "usage: {usage}")?,
            Command::Unknown(command) => {
                writeln!(output, "unknown command: {command} (try 'help')")?;
            }

            Command::Login => {
                let email = prompt(input, output, "email")?;
                let password = prompt(input, output, "password")?;
                match self.session.login(self.gateway.as_mut(), &email, &password) {
                    Ok(()) => {
                        let name = self
                            .session
                            .user()
                            .map(|user| user.name.clone())
                            .unwrap_or_default();
                        writeln!(output, "signed in as {name}")?;
                    }
                    Err(error) => report_auth_failure(output, &error)?,
                }
            }
            Command::Register => {
                let name = prompt(input, output, "name")?;
                let email = prompt(input, output, "email")?;
                let password = prompt(input, output, "password")?;
                match self
                    .session
                    .register(self.gateway.as_mut(), &name, &email, &password)
                {
                    Ok(()) => writeln!(output, "account created, signed in as {name}")?,
                    Err(error) => report_auth_failure(output, &error)?,
                }
            }
            Command::Logout => {
                self.session.logout()?;
                writeln!(output, "signed out")?;
            }
            Command::Whoami => match self.session.user() {
                Some(user) => writeln!(output, "{}", render::render_user(user))?,
                None => writeln!(output, "not signed in")?,
            },
            Command::Refresh => match self.session.refresh_me(self.gateway.as_mut()) {
                Ok(()) => match self.session.user() {
                    Some(user) => writeln!(output, "{}", render::render_user(user))?,
                    None => writeln!(output, "not signed in (nothing to refresh)")?,
                },
                Err(error) => writeln!(output, "failed to refresh profile: {error}")?,
            },

            Command::Posts { page } => {
                if !matches!(self.view, View::Browse(_)) {
                    self.view = View::Browse(BrowsePage::new());
                }
                self.load_browse(page.unwrap_or(1), output)?;
            }
            Command::Search { term } => {
                if !matches!(self.view, View::Browse(_)) {
                    self.view = View::Browse(BrowsePage::new());
                }
                if let View::Browse(page) = &mut self.view {
                    page.set_query(term);
                }
                self.load_browse(1, output)?;
            }
            Command::Mine { page } => {
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                if !matches!(self.view, View::Mine(_)) {
                    self.view = View::Mine(MinePage::new());
                }
                self.load_mine(page.unwrap_or(1), output)?;
            }

            Command::Show { id } => match self.gateway.get_post(&id) {
                Ok(post) => {
                    self.view = View::Post(PostView::new(post));
                    self.load_comments(1, output)?;
                }
                Err(error) => writeln!(output, "failed to load post: {error}")?,
            },
            Command::Comments { page } => {
                let target = match &self.view {
                    View::Post(view) => page.unwrap_or(view.comments.cursor().page),
                    _ => {
                        writeln!(output, "open a post first (show <id>)")?;
                        return Ok(());
                    }
                };
                self.load_comments(target, output)?;
            }
            Command::Comment { text } => {
                let View::Post(view) = &self.view else {
                    writeln!(output, "open a post first (show <id>)")?;
                    return Ok(());
                };
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                let post_id = view.post.id.clone();
                let current_page = view.comments.cursor().page;
                let token = self.token_owned();
                match self
                    .gateway
                    .create_comment(token.as_deref(), &post_id, &text)
                {
                    Ok(()) => self.load_comments(current_page, output)?,
                    Err(error) => writeln!(output, "failed to add comment: {error}")?,
                }
            }
            Command::RemoveComment { id } => {
                let View::Post(view) = &self.view else {
                    writeln!(output, "open a post first (show <id>)")?;
                    return Ok(());
                };
                if !view.can_delete_comment(self.session.user(), &id) {
                    writeln!(output, "you can only delete your own comments")?;
                    return Ok(());
                }
                let current_page = view.comments.cursor().page;
                if !confirm(input, output, "Delete comment? This action cannot be undone.")? {
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.delete_comment(token.as_deref(), &id) {
                    Ok(()) => {
                        writeln!(output, "comment deleted")?;
                        self.load_comments(current_page, output)?;
                    }
                    Err(error) => writeln!(output, "failed to delete comment: {error}")?,
                }
            }

            Command::NewPost => {
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                let title = prompt(input, output, "title")?;
                if title.is_empty() {
                    writeln!(output, "title is required")?;
                    return Ok(());
                }
                let content = read_content(input, output)?;
                if content.trim().is_empty() {
                    writeln!(output, "content is required")?;
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.create_post(token.as_deref(), &title, &content) {
                    Ok(id) => {
                        writeln!(output, "created post {id}")?;
                        match self.gateway.get_post(&id) {
                            Ok(post) => {
                                self.view = View::Post(PostView::new(post));
                                self.load_comments(1, output)?;
                            }
                            Err(error) => writeln!(
                                output,
                                "created, but failed to load post {id}: {error}"
                            )?,
                        }
                    }
                    Err(error) => writeln!(output, "failed to create post: {error}")?,
                }
            }
            Command::EditPost { id } => {
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                let post = match self.gateway.get_post(&id) {
                    Ok(post) => post,
                    Err(error) => {
                        writeln!(output, "failed to load post: {error}")?;
                        return Ok(());
                    }
                };
                if !post_view::can_manage(self.session.user(), &post) {
                    writeln!(output, "only the author or an admin can edit this post")?;
                    return Ok(());
                }
                writeln!(
                    output,
                    "editing \"{}\" (empty input keeps the current value)",
                    post.title
                )?;
                let title = prompt(input, output, "title")?;
                let title = if title.is_empty() { post.title.clone() } else { title };
                let content = read_content(input, output)?;
                let content = if content.trim().is_empty() {
                    post.content.clone()
                } else {
                    content
                };
                let token = self.token_owned();
                match self
                    .gateway
                    .update_post(token.as_deref(), &id, &title, &content)
                {
                    Ok(()) => match self.gateway.get_post(&id) {
                        Ok(post) => {
                            self.view = View::Post(PostView::new(post));
                            self.load_comments(1, output)?;
                        }
                        Err(error) => {
                            writeln!(output, "updated, but failed to reload: {error}")?;
                        }
                    },
                    Err(error) => writeln!(output, "failed to update post: {error}")?,
                }
            }
            Command::DeletePost { id } => {
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                let post = match self.gateway.get_post(&id) {
                    Ok(post) => post,
                    Err(error) => {
                        writeln!(output, "failed to load post: {error}")?;
                        return Ok(());
                    }
                };
                if !post_view::can_manage(self.session.user(), &post) {
                    writeln!(output, "only the author or an admin can delete this post")?;
                    return Ok(());
                }
                let question =
                    format!("Delete \"{}\"? This action cannot be undone.", post.title);
                if !confirm(input, output, &question)? {
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.delete_post(token.as_deref(), &id) {
                    Ok(()) => {
                        writeln!(output, "post deleted")?;
                        self.reload_after_post_removal(&id, output)?;
                    }
                    Err(error) => writeln!(output, "failed to delete post: {error}")?,
                }
            }

            Command::AdminPosts { page } => {
                if !self.session.session().is_admin() {
                    writeln!(output, "restricted to administrators")?;
                    return Ok(());
                }
                if !matches!(self.view, View::AdminPosts(_)) {
                    self.view = View::AdminPosts(AdminPostsPage::new());
                }
                self.load_admin_posts(page.unwrap_or(1), output)?;
            }
            Command::AdminUsers { page } => {
                if !self.session.session().is_admin() {
                    writeln!(output, "restricted to administrators")?;
                    return Ok(());
                }
                if !matches!(self.view, View::AdminUsers(_)) {
                    self.view = View::AdminUsers(AdminUsersPage::new());
                }
                self.load_admin_users(page.unwrap_or(1), output)?;
            }
            Command::Filter { term } => match &mut self.view {
                View::AdminPosts(page) => {
                    page.set_filter(term);
                    writeln!(output, "{}", render::render_admin_posts(page))?;
                }
                View::AdminUsers(page) => {
                    page.set_filter(term);
                    writeln!(output, "{}", render::render_admin_users(page))?;
                }
                _ => writeln!(output, "filter applies to the management views")?,
            },
            Command::Sort { column } => match &mut self.view {
                View::AdminPosts(page) => match PostColumn::parse(&column) {
                    Some(column) => {
                        page.toggle_sort(column);
                        writeln!(output, "{}", render::render_admin_posts(page))?;
                    }
                    None => writeln!(output, "sortable columns: title, author, created")?,
                },
                View::AdminUsers(page) => match UserColumn::parse(&column) {
                    Some(column) => {
                        page.toggle_sort(column);
                        writeln!(output, "{}", render::render_admin_users(page))?;
                    }
                    None => writeln!(output, "sortable columns: name, email, role")?,
                },
                _ => writeln!(output, "sort applies to the management views")?,
            },
            Command::Next => self.turn_page(true, output)?,
            Command::Prev => self.turn_page(false, output)?,

            Command::ToggleRole { id } => {
                if !self.session.session().is_admin() {
                    writeln!(output, "restricted to administrators")?;
                    return Ok(());
                }
                let (current_page, name, new_role) = {
                    let View::AdminUsers(page) = &self.view else {
                        writeln!(output, "load the users view first (admin users)")?;
                        return Ok(());
                    };
                    let Some(user) = page.find(&id) else {
                        writeln!(output, "no loaded user with id {id}")?;
                        return Ok(());
                    };
                    (page.list.cursor().page, user.name.clone(), user.role.toggled())
                };
                let question = format!("Make {name} {}?", role_phrase(new_role));
                if !confirm(input, output, &question)? {
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.set_user_role(token.as_deref(), &id, new_role) {
                    Ok(()) => {
                        writeln!(output, "{name} is now {}", role_phrase(new_role))?;
                        self.load_admin_users(current_page, output)?;
                    }
                    Err(error) => writeln!(output, "failed to update role: {error}")?,
                }
            }
            Command::RemoveUser { id } => {
                if !self.session.session().is_admin() {
                    writeln!(output, "restricted to administrators")?;
                    return Ok(());
                }
                let current_page = match &self.view {
                    View::AdminUsers(page) => page.list.cursor().page,
                    _ => 1,
                };
                let question = format!("Delete user {id}? This action cannot be undone.");
                if !confirm(input, output, &question)? {
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.delete_user(token.as_deref(), &id) {
                    Ok(()) => {
                        writeln!(output, "user deleted")?;
                        if matches!(self.view, View::AdminUsers(_)) {
                            self.load_admin_users(current_page, output)?;
                        }
                    }
                    Err(error) => writeln!(output, "failed to delete user: {error}")?,
                }
            }

            Command::Profile => match self.session.user() {
                Some(user) => writeln!(output, "{}", render::render_user(user))?,
                None => writeln!(output, "not signed in")?,
            },
            Command::EditProfile => {
                let Some(user) = self.session.user() else {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                };
                let (current_name, current_email) = (user.name.clone(), user.email.clone());
                writeln!(output, "editing profile (empty input keeps the current value)")?;
                let name = prompt(input, output, &format!("name [{current_name}]"))?;
                let name = if name.is_empty() { current_name } else { name };
                let email = prompt(input, output, &format!("email [{current_email}]"))?;
                let email = if email.is_empty() { current_email } else { email };
                if let Err(message) = validate_profile(&name, &email) {
                    writeln!(output, "{message}")?;
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.update_profile(token.as_deref(), &name, &email) {
                    Ok(()) => {
                        if let Err(error) = self.session.refresh_me(self.gateway.as_mut()) {
                            writeln!(output, "updated, but failed to refresh: {error}")?;
                            return Ok(());
                        }
                        writeln!(output, "profile updated")?;
                        if let Some(user) = self.session.user() {
                            writeln!(output, "{}", render::render_user(user))?;
                        }
                    }
                    Err(error) => writeln!(output, "failed to update profile: {error}")?,
                }
            }
            Command::Password => {
                if !self.session.session().is_signed_in() {
                    writeln!(output, "sign in first (login)")?;
                    return Ok(());
                }
                let current = prompt(input, output, "current password")?;
                let next = prompt(input, output, "new password")?;
                let confirm_pw = prompt(input, output, "confirm new password")?;
                if let Err(message) = validate_password_change(&current, &next, &confirm_pw) {
                    writeln!(output, "{message}")?;
                    return Ok(());
                }
                let token = self.token_owned();
                match self.gateway.change_password(token.as_deref(), &current, &next) {
                    Ok(()) => writeln!(output, "password changed")?,
                    Err(error) => writeln!(output, "failed to change password: {error}")?,
                }
            }
        }

        Ok(())
    }

    fn token_owned(&self) -> Option<String> {
        self.session.token().map(str::to_string)
    }

    fn load_browse(&mut self, page: u32, output: &mut dyn Write) -> anyhow::Result<()> {
        let View::Browse(view) = &mut self.view else {
            return Ok(());
        };
        let ticket = view.list.begin_load();
        match self
            .gateway
            .list_posts(page, browse::PAGE_LIMIT, view.query())
        {
            Ok(result) => {
                if view.list.apply(ticket, result) {
                    writeln!(output, "{}", render::render_browse(view))?;
                }
            }
            Err(error) => {
                view.list.fail(ticket, error.to_string());
                writeln!(output, "failed to load posts: {error}")?;
            }
        }
        Ok(())
    }

    fn load_mine(&mut self, page: u32, output: &mut dyn Write) -> anyhow::Result<()> {
        let token = self.token_owned();
        let View::Mine(view) = &mut self.view else {
            return Ok(());
        };
        let ticket = view.list.begin_load();
        match self
            .gateway
            .my_posts(token.as_deref(), page, mine::PAGE_LIMIT)
        {
            Ok(result) => {
                if view.list.apply(ticket, result) {
                    writeln!(output, "{}", render::render_mine(view))?;
                }
            }
            Err(error) => {
                view.list.fail(ticket, error.to_string());
                writeln!(output, "failed to load your posts: {error}")?;
            }
        }
        Ok(())
    }

    fn load_comments(&mut self, page: u32, output: &mut dyn Write) -> anyhow::Result<()> {
        let View::Post(view) = &mut self.view else {
            return Ok(());
        };
        let ticket = view.comments.begin_load();
        let post_id = view.post.id.clone();
        match self
            .gateway
            .list_comments(&post_id, page, post_view::COMMENT_LIMIT)
        {
            Ok(result) => {
                if view.comments.apply(ticket, result) {
                    writeln!(output, "{}", render::render_post(view))?;
                }
            }
            Err(error) => {
                view.comments.fail(ticket, error.to_string());
                writeln!(output, "failed to load comments: {error}")?;
            }
        }
        Ok(())
    }

    fn load_admin_posts(&mut self, page: u32, output: &mut dyn Write) -> anyhow::Result<()> {
        let View::AdminPosts(view) = &mut self.view else {
            return Ok(());
        };
        let ticket = view.list.begin_load();
        match self
            .gateway
            .list_posts(page, admin_posts::PAGE_LIMIT, None)
        {
            Ok(result) => {
                if view.list.apply(ticket, result) {
                    writeln!(output, "{}", render::render_admin_posts(view))?;
                }
            }
            Err(error) => {
                view.list.fail(ticket, error.to_string());
                writeln!(output, "failed to load posts: {error}")?;
            }
        }
        Ok(())
    }

    fn load_admin_users(&mut self, page: u32, output: &mut dyn Write) -> anyhow::Result<()> {
        let token = self.token_owned();
        let View::AdminUsers(view) = &mut self.view else {
            return Ok(());
        };
        let ticket = view.list.begin_load();
        match self
            .gateway
            .list_users(token.as_deref(), page, admin_users::PAGE_LIMIT)
        {
            Ok(result) => {
                if view.list.apply(ticket, result) {
                    writeln!(output, "{}", render::render_admin_users(view))?;
                }
            }
            Err(error) => {
                view.list.fail(ticket, error.to_string());
                writeln!(output, "failed to load users: {error}")?;
            }
        }
        Ok(())
    }

    /// "next"/"prev" on whatever view is active. Requests past either end of
    /// the range are clamped to no-ops.
    fn turn_page(&mut self, forward: bool, output: &mut dyn Write) -> anyhow::Result<()> {
        let turn = match &self.view {
            View::Browse(view) => target_page(&view.list.cursor(), forward)
                .map_or(PageTurn::Clamped, PageTurn::Browse),
            View::Mine(view) => target_page(&view.list.cursor(), forward)
                .map_or(PageTurn::Clamped, PageTurn::Mine),
            View::Post(view) => target_page(&view.comments.cursor(), forward)
                .map_or(PageTurn::Clamped, PageTurn::Comments),
            View::AdminPosts(view) => target_page(&view.list.cursor(), forward)
                .map_or(PageTurn::Clamped, PageTurn::AdminPosts),
            View::AdminUsers(view) => target_page(&view.list.cursor(), forward)
                .map_or(PageTurn::Clamped, PageTurn::AdminUsers),
            View::Idle => PageTurn::NoView,
        };

        match turn {
            PageTurn::Browse(page) => self.load_browse(page, output),
            PageTurn::Mine(page) => self.load_mine(page, output),
            PageTurn::Comments(page) => self.load_comments(page, output),
            PageTurn::AdminPosts(page) => self.load_admin_posts(page, output),
            PageTurn::AdminUsers(page) => self.load_admin_users(page, output),
            PageTurn::Clamped => Ok(()),
            PageTurn::NoView => {
                writeln!(output, "nothing to paginate")?;
                Ok(())
            }
        }
    }

    fn reload_after_post_removal(
        &mut self,
        id: &str,
        output: &mut dyn Write,
    ) -> anyhow::Result<()> {
        match &self.view {
            View::Post(view) if view.post.id == id => {
                self.view = View::Idle;
                Ok(())
            }
            View::Mine(view) => {
                let current = view.list.cursor().page;
                self.load_mine(current, output)
            }
            View::AdminPosts(view) => {
                let current = view.list.cursor().page;
                self.load_admin_posts(current, output)
            }
            _ => Ok(()),
        }
    }
}

fn target_page(cursor: &crate::pages::PageCursor, forward: bool) -> Option<u32> {
    if forward {
        cursor.next()
    } else {
        cursor.prev()
    }
}

fn role_phrase(role: Role) -> &'static str {
    match role {
        Role::Admin => "an admin",
        Role::User => "a regular user",
    }
}

fn prompt(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    label: &str,
) -> anyhow::Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    question: &str,
) -> anyhow::Result<bool> {
    write!(output, "{question} [y/N]: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Reads post content line by line until a lone `.` line or EOF.
fn read_content(input: &mut dyn BufRead, output: &mut dyn Write) -> anyhow::Result<String> {
    writeln!(output, "content (finish with a single '.' line):")?;
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == "." {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

/// The login/register failure path: parse the raw body for field-level
/// validation details; fall back to the top-level message, then to the raw
/// error text.
fn report_auth_failure(output: &mut dyn Write, error: &SessionOpError) -> anyhow::Result<()> {
    if let SessionOpError::Api(BlogApiError::Status(_, body)) = error {
        if let Some(parsed) = parse_validation_body(body) {
            if parsed.has_details() {
                for detail in &parsed.details {
                    if detail.path == "email" {
                        writeln!(output, "email: Please enter a valid email address")?;
                    } else {
                        let message = if detail.msg.is_empty() {
                            "Invalid value"
                        } else {
                            detail.msg.as_str()
                        };
                        writeln!(output, "{}: {message}", detail.path)?;
                    }
                }
                return Ok(());
            }
            if let Some(message) = parsed.message() {
                writeln!(output, "error: {message}")?;
                return Ok(());
            }
        }
    }
    writeln!(output, "error: {error}")?;
    Ok(())
}
