//! Block entity carried in `UPDATE_BLOCK` messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{BlockId, UserId, WorkspaceId};
use crate::nullable::null_as_default;

/// A unit of board content (board, card, view, text, comment, ...).
///
/// Known fields are typed; any other key found on the wire is kept in
/// [`Block::extra`] and written back out unchanged. Timestamps are epoch
/// milliseconds. A block with a non-zero `delete_at` has been deleted and
/// is announced through the same `UPDATE_BLOCK` action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    /// Block identifier.
    pub id: BlockId,
    /// Identifier of the containing block, empty for top-level blocks.
    pub parent_id: BlockId,
    /// Identifier of the board this block belongs to.
    pub root_id: BlockId,
    /// User that created the block.
    pub created_by: UserId,
    /// User that last modified the block.
    pub modified_by: UserId,
    /// Schema version of the block.
    pub schema: i64,
    /// Block kind, e.g. `"board"`, `"card"`, `"view"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Display title.
    pub title: String,
    /// Kind-specific properties; `null` on the wire decodes as empty.
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Map<String, Value>,
    /// Creation time, epoch milliseconds.
    pub create_at: i64,
    /// Last update time, epoch milliseconds.
    pub update_at: i64,
    /// Deletion time, epoch milliseconds; zero while the block is live.
    pub delete_at: i64,
    /// Workspace the block belongs to.
    pub workspace_id: WorkspaceId,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    /// Creates a new live block stamped with the current time.
    #[must_use]
    pub fn new(id: BlockId, workspace_id: WorkspaceId, block_type: impl Into<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id,
            workspace_id,
            block_type: block_type.into(),
            schema: 1,
            create_at: now,
            update_at: now,
            ..Self::default()
        }
    }

    /// Returns `true` if the block has been deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }

    /// Returns the creation time, if it is a representable timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.create_at)
    }

    /// Returns the last update time, if it is a representable timestamp.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.update_at)
    }

    /// Returns the deletion time for deleted blocks.
    #[must_use]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        if self.is_deleted() {
            DateTime::from_timestamp_millis(self.delete_at)
        } else {
            None
        }
    }
}
