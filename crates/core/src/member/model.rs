//! Team member model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Admin,
    Manager,
    User,
}

impl Default for MemberRole {
    fn default() -> Self {
        Self::User
    }
}

/// Whether a team member account is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A member of the team managing campaigns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
}

impl Member {
    /// Create a new member with a fresh random id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role: MemberRole::default(),
            status: MemberStatus::default(),
        }
    }

    /// Set the role
    pub fn with_role(mut self, role: MemberRole) -> Self {
        self.role = role;
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_defaults() {
        let member = Member::new("Jane Smith", "jane@example.com");
        assert_eq!(member.name, "Jane Smith");
        assert_eq!(member.email, "jane@example.com");
        assert_eq!(member.role, MemberRole::User);
        assert_eq!(member.status, MemberStatus::Active);
    }

    #[test]
    fn test_member_with_role_and_status() {
        let member = Member::new("John Doe", "john@example.com")
            .with_role(MemberRole::Admin)
            .with_status(MemberStatus::Inactive);
        assert_eq!(member.role, MemberRole::Admin);
        assert_eq!(member.status, MemberStatus::Inactive);
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = Member::new("A", "a@example.com");
        let b = Member::new("B", "b@example.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&MemberRole::Manager).unwrap();
        assert_eq!(json, "\"Manager\"");
        let json = serde_json::to_string(&MemberStatus::Inactive).unwrap();
        assert_eq!(json, "\"Inactive\"");
    }
}
