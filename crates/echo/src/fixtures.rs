//! Fixed user directory served by the reqres-style routes.

use serde::Serialize;

/// Users per listing page.
pub const PER_PAGE: usize = 6;

/// Token handed out on successful login and registration.
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// A directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    /// Identifier.
    pub id: u32,
    /// Email address, also the login name.
    pub email: &'static str,
    /// Given name.
    pub first_name: &'static str,
    /// Family name.
    pub last_name: &'static str,
}

/// The directory, ordered by id.
pub const USERS: [User; 12] = [
    user(1, "george.bluth@reqres.in", "George", "Bluth"),
    user(2, "janet.weaver@reqres.in", "Janet", "Weaver"),
    user(3, "emma.wong@reqres.in", "Emma", "Wong"),
    user(4, "eve.holt@reqres.in", "Eve", "Holt"),
    user(5, "charles.morris@reqres.in", "Charles", "Morris"),
    user(6, "tracey.ramos@reqres.in", "Tracey", "Ramos"),
    user(7, "michael.lawson@reqres.in", "Michael", "Lawson"),
    user(8, "lindsay.ferguson@reqres.in", "Lindsay", "Ferguson"),
    user(9, "tobias.funke@reqres.in", "Tobias", "Funke"),
    user(10, "byron.fields@reqres.in", "Byron", "Fields"),
    user(11, "george.edwards@reqres.in", "George", "Edwards"),
    user(12, "rachel.howell@reqres.in", "Rachel", "Howell"),
];

const fn user(
    id: u32,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
) -> User {
    User {
        id,
        email,
        first_name,
        last_name,
    }
}

/// Looks a user up by id.
pub fn by_id(id: u32) -> Option<&'static User> {
    USERS.iter().find(|u| u.id == id)
}

/// Looks a user up by email (case-insensitive).
pub fn by_email(email: &str) -> Option<&'static User> {
    USERS.iter().find(|u| u.email.eq_ignore_ascii_case(email.trim()))
}

/// Users on a 1-based page; empty past the end.
pub fn page(page: usize) -> &'static [User] {
    let start = page.saturating_sub(1).saturating_mul(PER_PAGE);
    if page == 0 || start >= USERS.len() {
        return &[];
    }
    &USERS[start..(start + PER_PAGE).min(USERS.len())]
}

/// Number of pages.
pub const fn total_pages() -> usize {
    USERS.len().div_ceil(PER_PAGE)
}
