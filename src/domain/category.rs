//! Sidebar category entity carried in `UPDATE_CATEGORY` messages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CategoryId, TeamId, UserId};

/// A user's sidebar grouping of boards.
///
/// Wire keys use the `userID` / `teamID` spelling. Unknown keys are kept in
/// [`Category::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Owner of the category.
    #[serde(rename = "userID")]
    pub user_id: UserId,
    /// Team the category is scoped to.
    #[serde(rename = "teamID")]
    pub team_id: TeamId,
    /// Creation time, epoch milliseconds.
    #[serde(rename = "createAt")]
    pub create_at: i64,
    /// Last update time, epoch milliseconds.
    #[serde(rename = "updateAt")]
    pub update_at: i64,
    /// Deletion time, epoch milliseconds; zero while the category is live.
    #[serde(rename = "deleteAt")]
    pub delete_at: i64,
    /// Whether the category is collapsed in the sidebar.
    pub collapsed: bool,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    /// Returns `true` if the category has been deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn uses_upper_case_id_suffixes() {
        let category = Category {
            id: CategoryId::new("c1"),
            name: "Favorites".to_string(),
            user_id: UserId::new("u1"),
            team_id: TeamId::new("t1"),
            ..Category::default()
        };
        let value = serde_json::to_value(&category).unwrap_or_default();
        assert_eq!(value.get("userID"), Some(&Value::from("u1")));
        assert_eq!(value.get("teamID"), Some(&Value::from("t1")));
        assert!(value.get("userId").is_none());
    }

    #[test]
    fn decodes_deleted_category() {
        let json = r#"{"id":"c1","name":"Old","deleteAt":5,"collapsed":true}"#;
        let Ok(category) = serde_json::from_str::<Category>(json) else {
            panic!("category should decode");
        };
        assert!(category.is_deleted());
        assert!(category.collapsed);
    }
}
