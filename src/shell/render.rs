//! Plain-text page renderers for the console front-end.

use std::fmt::Write;

use crate::store::UsersView;

/// Up to two uppercase initials for the avatar column.
pub fn user_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

pub fn render_loading() -> String {
    "Loading users...".to_string()
}

/// Terminal error panel; the only recovery offered is a full restart.
pub fn render_error(message: &str) -> String {
    format!("Failed to Load Users\n{message}\nTry Again (restart to re-run the fetch)")
}

/// The users table with its "N of M users" summary. The empty state names
/// the search when one is active.
pub fn render_users_table(view: &UsersView, query: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Users Management");
    let _ = writeln!(out, "{} of {} users", view.users.len(), view.total);
    let _ = writeln!(out, "{:<4} {:<28} {:<32} {}", "", "Name", "Email", "Status");

    if view.users.is_empty() {
        let message = if query.trim().is_empty() {
            "No users available."
        } else {
            "No users found matching your search."
        };
        let _ = writeln!(out, "{message}");
        return out;
    }

    for user in &view.users {
        let status = if user.is_active { "Active" } else { "Inactive" };
        let _ = writeln!(
            out,
            "{:<4} {:<28} {:<32} {}",
            user_initials(&user.record.name),
            user.record.name,
            user.record.email,
            status
        );
    }
    out
}

/// Static landing page.
pub fn render_dashboard() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome to Admin Dashboard");
    let _ = writeln!(
        out,
        "This is a simple admin dashboard. Navigate to the Users page to see the main functionality."
    );
    let _ = writeln!(out, "Total Users: 10");
    let _ = writeln!(out, "Active Sessions: 3");
    let _ = writeln!(out, "Pending Reports: 0");
    out
}

/// Static placeholder page.
pub fn render_settings() -> String {
    "Settings\nThis is a placeholder settings page. Configure your application preferences here.\n"
        .to_string()
}
