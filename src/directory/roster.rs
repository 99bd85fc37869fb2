//! Roster shaping: which members appear on the page and in what order.
//!
//! Visibility is three predicates:
//!   - not a deleted account
//!   - not a bot
//!   - email ends with the configured suffix
//!
//! The email check is a plain suffix test, not a domain match: a filter
//! of `example.com` also keeps `user@notexample.com`, and the empty
//! filter keeps everyone.

use crate::directory::model::Member;

/// Keep the members that should appear on the page.
pub fn visible(members: Vec<Member>, email_filter: &str) -> Vec<Member> {
    members
        .into_iter()
        .filter(|m| !m.deleted && !m.is_bot && m.profile.email.ends_with(email_filter))
        .collect()
}

/// Order members by real name, case-insensitive ascending.
/// The sort is stable: members with equal names keep their upstream
/// order. Members without a real name sort first.
pub fn sort_by_real_name(members: &mut [Member]) {
    members.sort_by_key(|m| m.profile.real_name.to_lowercase());
}
