use blog_api::types::{Role, User};

use super::{contains_ci, ordered, PagedList, SortOrder};

/// Users fetched per page on the management table.
pub const PAGE_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Role,
}

impl UserColumn {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "role" => Some(Self::Role),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

/// Management view over user accounts. The filter matches name, email, or
/// role; filter and sort apply to the loaded page only.
#[derive(Debug)]
pub struct AdminUsersPage {
    pub list: PagedList<User>,
    filter: String,
    sort_by: UserColumn,
    order: SortOrder,
}

impl AdminUsersPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: PagedList::new(),
            filter: String::new(),
            sort_by: UserColumn::Name,
            order: SortOrder::Ascending,
        }
    }

    pub fn set_filter(&mut self, term: Option<String>) {
        self.filter = term.map(|term| term.trim().to_string()).unwrap_or_default();
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn toggle_sort(&mut self, column: UserColumn) {
        if self.sort_by == column {
            self.order = self.order.flipped();
        } else {
            self.sort_by = column;
            self.order = SortOrder::Ascending;
        }
    }

    #[must_use]
    pub fn sort_by(&self) -> UserColumn {
        self.sort_by
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Admins among the loaded page.
    #[must_use]
    pub fn admin_count(&self) -> usize {
        self.list
            .items()
            .iter()
            .filter(|user| user.role == Role::Admin)
            .count()
    }

    /// Looks a user up by id on the loaded page; role toggling needs the
    /// current role before asking the backend for the other one.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&User> {
        self.list.items().iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self
            .list
            .items()
            .iter()
            .filter(|user| {
                if self.filter.is_empty() {
                    return true;
                }
                contains_ci(&user.name, &self.filter)
                    || contains_ci(&user.email, &self.filter)
                    || contains_ci(user.role.as_str(), &self.filter)
            })
            .collect();

        users.sort_by(|a, b| ordered(&self.sort_key(a), &self.sort_key(b), self.order));
        users
    }

    fn sort_key(&self, user: &User) -> String {
        match self.sort_by {
            UserColumn::Name => user.name.to_lowercase(),
            UserColumn::Email => user.email.to_lowercase(),
            UserColumn::Role => user.role.as_str().to_string(),
        }
    }
}

impl Default for AdminUsersPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use blog_api::types::{PageMeta, Paginated, Role, User};

    use super::{AdminUsersPage, UserColumn};
    use crate::pages::SortOrder;

    fn user(id: &str, name: &str, email: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded_page() -> AdminUsersPage {
        let mut page = AdminUsersPage::new();
        let ticket = page.list.begin_load();
        page.list.apply(
            ticket,
            Paginated {
                success: true,
                data: vec![
                    user("u1", "Carol", "carol@example.com", Role::User),
                    user("u2", "Alice", "alice@example.com", Role::Admin),
                    user("u3", "Bob", "bob@example.com", Role::User),
                ],
                meta: PageMeta {
                    page: 1,
                    limit: 10,
                    total: 3,
                    pages: 1,
                },
            },
        );
        page
    }

    #[test]
    fn default_ordering_is_name_ascending() {
        let page = loaded_page();
        assert_eq!(page.sort_by(), UserColumn::Name);
        assert_eq!(page.order(), SortOrder::Ascending);

        let names: Vec<&str> = page.visible().iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn filter_matches_name_email_and_role() {
        let mut page = loaded_page();

        page.set_filter(Some("bob@".to_string()));
        assert_eq!(page.visible().len(), 1);

        page.set_filter(Some("admin".to_string()));
        let names: Vec<&str> = page.visible().iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Alice"]);

        page.set_filter(None);
        assert_eq!(page.visible().len(), 3);
    }

    #[test]
    fn toggling_flips_and_switching_column_resets() {
        let mut page = loaded_page();

        page.toggle_sort(UserColumn::Name);
        assert_eq!(page.order(), SortOrder::Descending);
        let names: Vec<&str> = page.visible().iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Bob", "Alice"]);

        page.toggle_sort(UserColumn::Email);
        assert_eq!(page.sort_by(), UserColumn::Email);
        assert_eq!(page.order(), SortOrder::Ascending);
    }

    #[test]
    fn admin_count_reflects_the_loaded_page() {
        assert_eq!(loaded_page().admin_count(), 1);
    }

    #[test]
    fn find_returns_loaded_users_by_id() {
        let page = loaded_page();
        assert_eq!(page.find("u2").map(|user| user.role), Some(Role::Admin));
        assert!(page.find("missing").is_none());
    }
}
