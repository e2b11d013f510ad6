//! Block-to-category association carried in `UPDATE_BLOCK_CATEGORY` messages.

use serde::{Deserialize, Serialize};

use super::{BlockId, CategoryId, TeamId};

/// Announces that a block moved into a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockCategoryWebsocketData {
    /// Block whose membership changed.
    #[serde(rename = "blockID")]
    pub block_id: BlockId,
    /// Category the block now belongs to.
    #[serde(rename = "categoryID")]
    pub category_id: CategoryId,
    /// Team scope of the change; omitted when empty.
    #[serde(rename = "teamID", skip_serializing_if = "TeamId::is_empty")]
    pub team_id: TeamId,
}

impl BlockCategoryWebsocketData {
    /// Creates an association without a team scope.
    #[must_use]
    pub fn new(block_id: BlockId, category_id: CategoryId) -> Self {
        Self {
            block_id,
            category_id,
            team_id: TeamId::default(),
        }
    }
}
