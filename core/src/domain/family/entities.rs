use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A named group of profiles analyzed together. Members are weak references
/// to profile ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Family {
    pub id: Uuid,
    pub name: String,
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Family {
    pub fn new(name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: name.trim().to_string(),
            member_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name.trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Adds the profile when absent, removes it otherwise. Returns whether
    /// the profile is a member afterwards.
    pub fn toggle_member(&mut self, profile_id: Uuid) -> bool {
        let is_member = if self.member_ids.contains(&profile_id) {
            self.member_ids.retain(|id| *id != profile_id);
            false
        } else {
            self.member_ids.push(profile_id);
            true
        };
        self.updated_at = Utc::now();
        is_member
    }

    pub fn remove_member(&mut self, profile_id: Uuid) -> bool {
        let before = self.member_ids.len();
        self.member_ids.retain(|id| *id != profile_id);
        let removed = before != self.member_ids.len();
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_member_adds_then_removes() {
        let mut family = Family::new(" Home ".to_string());
        let profile_id = Uuid::new_v4();

        assert_eq!(family.name, "Home");
        assert!(family.toggle_member(profile_id));
        assert_eq!(family.member_ids, vec![profile_id]);
        assert!(!family.toggle_member(profile_id));
        assert!(family.member_ids.is_empty());
    }

    #[test]
    fn remove_member_reports_change() {
        let mut family = Family::new("Home".to_string());
        let profile_id = Uuid::new_v4();
        family.toggle_member(profile_id);

        assert!(family.remove_member(profile_id));
        assert!(!family.remove_member(profile_id));
    }
}
