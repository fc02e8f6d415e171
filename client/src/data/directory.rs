//! The mock user set that stands in for an account system.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session reducer resolves a role selection against this directory. There
//! is no identity provider behind it: picking a role picks the first record
//! declared with that role.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use super::types::{Role, User};

/// Ordered list of sample users.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The three sample accounts, one per role.
    pub fn sample() -> Self {
        let alex = User::new("1", "Alex Chen", Role::Student, "alex@example.com").with_progress(2450, 8);
        Self::new(vec![
            alex.clone().with_badges(&["Water Warrior", "Recycling Champion", "Energy Saver"]),
            User::new("2", "Ms. Rodriguez", Role::Teacher, "rodriguez@example.com"),
            User::new("3", "John Smith", Role::Parent, "john@example.com").with_child(alex),
        ])
    }

    /// First user with `role`, in declaration order.
    pub fn find_by_role(&self, role: Role) -> Option<&User> {
        self.users.iter().find(|user| user.role == role)
    }
}
