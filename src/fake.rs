//! Fabricated user records for the in-memory backend's demo seeding.

use chrono::{Duration, Utc};

use crate::models::{Role, User};
use crate::password;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter", "Wendy",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Clark", "Davis", "Evans", "Garcia", "Harris", "Jackson", "Johnson",
    "King", "Lewis", "Martin", "Moore", "Nelson", "Roberts", "Smith", "Taylor", "Walker", "White",
    "Young",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

fn pick<'a>(list: &[&'a str]) -> &'a str {
    list[rand::random_range(0..list.len())]
}

/// Fabricate a plausible user under the given id.
///
/// Roughly one in ten fabricated users carries no role, mirroring rows
/// written before a role was assigned.
pub fn user(id: i64) -> User {
    let first = pick(FIRST_NAMES);
    let last = pick(LAST_NAMES);
    let role = match rand::random_range(0..10) {
        0 => Role::Unspecified,
        1 => Role::Admin,
        _ => Role::User,
    };
    let created_at = Utc::now() - Duration::days(rand::random_range(1..730));
    let updated_at = if rand::random::<bool>() {
        Some(created_at + Duration::days(rand::random_range(0..365)))
    } else {
        None
    };

    User {
        id,
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            rand::random_range(1..1000),
            pick(EMAIL_DOMAINS)
        ),
        role,
        password_digest: password::digest(&hex::encode(rand::random::<[u8; 8]>())),
        created_at,
        updated_at,
    }
}
