use roster_model::{UserId, UserRecord, UserRole};

const SAMPLE_USERS: &[(u64, &str, &str, &str, UserRole, bool)] = &[
    (1, "Alice", "Johnson", "alice.johnson@example.com", UserRole::Admin, true),
    (2, "Bob", "Smith", "bob.smith@example.com", UserRole::User, true),
    (3, "Charlie", "Brown", "charlie.brown@example.com", UserRole::Manager, false),
    (4, "Diana", "Wilson", "diana.wilson@example.com", UserRole::User, true),
    (5, "Edward", "Davis", "edward.davis@example.com", UserRole::Admin, false),
    (6, "Fiona", "Miller", "fiona.miller@example.com", UserRole::User, true),
    (7, "George", "Garcia", "george.garcia@example.com", UserRole::Manager, true),
    (8, "Helen", "Martinez", "helen.martinez@example.com", UserRole::User, false),
    (9, "Ivan", "Rodriguez", "ivan.rodriguez@example.com", UserRole::Admin, true),
    (10, "Julia", "Lopez", "julia.lopez@example.com", UserRole::User, true),
    (11, "Kevin", "Gonzalez", "kevin.gonzalez@example.com", UserRole::Manager, false),
    (12, "Laura", "Hernandez", "laura.hernandez@example.com", UserRole::User, true),
];

/// The fixed sample set a fresh directory is seeded with.
pub fn sample_users() -> Vec<UserRecord> {
    SAMPLE_USERS
        .iter()
        .map(|&(id, first, last, email, role, status)| UserRecord {
            id: UserId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role,
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_set_is_unique() {
        let users = sample_users();
        assert_eq!(users.len(), 12);

        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        let emails: HashSet<_> = users.iter().map(|u| u.email.to_lowercase()).collect();
        assert_eq!(ids.len(), users.len());
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn sample_set_has_inactive_users() {
        let inactive = sample_users().iter().filter(|u| !u.status).count();
        assert_eq!(inactive, 4);
    }
}
