/// Shell command, parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Login,
    Register,
    Logout,
    Whoami,
    Refresh,
    Posts { page: Option<u32> },
    Search { term: Option<String> },
    Mine { page: Option<u32> },
    Show { id: String },
    Comments { page: Option<u32> },
    Comment { text: String },
    RemoveComment { id: String },
    NewPost,
    EditPost { id: String },
    DeletePost { id: String },
    AdminPosts { page: Option<u32> },
    AdminUsers { page: Option<u32> },
    Filter { term: Option<String> },
    Sort { column: String },
    Next,
    Prev,
    ToggleRole { id: String },
    RemoveUser { id: String },
    Profile,
    EditProfile,
    Password,
    Invalid { usage: &'static str },
    Unknown(String),
}

/// Parses one input line. `None` for blank lines; anything unrecognized maps
/// to [`Command::Unknown`] so the shell can report it without failing.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.split_whitespace();
    let head = parts.next()?;

    let parsed = match head {
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "login" => Command::Login,
        "register" => Command::Register,
        "logout" => Command::Logout,
        "whoami" => Command::Whoami,
        "refresh" => Command::Refresh,
        "posts" => Command::Posts {
            page: page_arg(parts.next()),
        },
        "search" => Command::Search {
            term: tail(trimmed, head),
        },
        "mine" => Command::Mine {
            page: page_arg(parts.next()),
        },
        "show" => match parts.next() {
            Some(id) => Command::Show { id: id.to_string() },
            None => Command::Invalid {
                usage: "show <post-id>",
            },
        },
        "comments" => Command::Comments {
            page: page_arg(parts.next()),
        },
        "comment" => match tail(trimmed, head) {
            Some(text) => Command::Comment { text },
            None => Command::Invalid {
                usage: "comment <text>",
            },
        },
        "rmcomment" => match parts.next() {
            Some(id) => Command::RemoveComment { id: id.to_string() },
            None => Command::Invalid {
                usage: "rmcomment <comment-id>",
            },
        },
        "new" => Command::NewPost,
        "edit" => match parts.next() {
            Some(id) => Command::EditPost { id: id.to_string() },
            None => Command::Invalid {
                usage: "edit <post-id>",
            },
        },
        "delete" => match parts.next() {
            Some(id) => Command::DeletePost { id: id.to_string() },
            None => Command::Invalid {
                usage: "delete <post-id>",
            },
        },
        "admin" => match parts.next() {
            Some("posts") => Command::AdminPosts {
                page: page_arg(parts.next()),
            },
            Some("users") => Command::AdminUsers {
                page: page_arg(parts.next()),
            },
            _ => Command::Invalid {
                usage: "admin <posts|users> [page]",
            },
        },
        "filter" => Command::Filter {
            term: tail(trimmed, head),
        },
        "sort" => match parts.next() {
            Some(column) => Command::Sort {
                column: column.to_string(),
            },
            None => Command::Invalid {
                usage: "sort <column>",
            },
        },
        "next" => Command::Next,
        "prev" => Command::Prev,
        "role" => match parts.next() {
            Some(id) => Command::ToggleRole { id: id.to_string() },
            None => Command::Invalid {
                usage: "role <user-id>",
            },
        },
        "rmuser" => match parts.next() {
            Some(id) => Command::RemoveUser { id: id.to_string() },
            None => Command::Invalid {
                usage: "rmuser <user-id>",
            },
        },
        "profile" => match parts.next() {
            None => Command::Profile,
            Some("edit") => Command::EditProfile,
            Some(_) => Command::Invalid {
                usage: "profile [edit]",
            },
        },
        "passwd" => Command::Password,
        other => Command::Unknown(other.to_string()),
    };

    Some(parsed)
}

/// Rest of the line after the command word, when non-blank.
fn tail(line: &str, head: &str) -> Option<String> {
    let rest = line[head.len()..].trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

fn page_arg(arg: Option<&str>) -> Option<u32> {
    arg.and_then(|value| value.parse().ok()).filter(|page| *page > 0)
}
