//! Server-to-client update messages.
//!
//! [`UpdateMsg`] is the literal wire record: an action tag plus three
//! optional payload fields, of which exactly one is expected to be set.
//! Decoding it never checks that expectation. [`Update`] is the typed view
//! where the expectation holds by construction; convert between the two
//! with `From` / `TryFrom`.

use serde::{Deserialize, Serialize};

use super::action::UpdateAction;
use crate::domain::{Block, BlockCategoryWebsocketData, Category};
use crate::error::DecodeError;

/// Wire field name of the block payload.
const FIELD_BLOCK: &str = "block";
/// Wire field name of the category payload.
const FIELD_CATEGORY: &str = "category";
/// Wire field name of the association payload.
const FIELD_BLOCK_CATEGORIES: &str = "blockCategories";

/// Notification of a single state change, as sent on the wire.
///
/// Unset payload fields are omitted from the JSON output, never written
/// as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMsg {
    /// Update kind, e.g. `"UPDATE_BLOCK"`.
    pub action: String,
    /// Changed block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
    /// Changed category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Changed block-category association.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_categories: Option<BlockCategoryWebsocketData>,
}

impl UpdateMsg {
    /// Returns the parsed action tag.
    #[must_use]
    pub fn kind(&self) -> UpdateAction {
        UpdateAction::from(self.action.as_str())
    }

    /// Returns the number of populated payload fields.
    #[must_use]
    pub fn payload_count(&self) -> usize {
        usize::from(self.block.is_some())
            + usize::from(self.category.is_some())
            + usize::from(self.block_categories.is_some())
    }
}

/// A single state change with exactly one payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// A block changed; sent as `UPDATE_BLOCK`.
    Block(Block),
    /// A category changed; sent as `UPDATE_CATEGORY`.
    Category(Category),
    /// A block-category association changed; sent as `UPDATE_BLOCK_CATEGORY`.
    BlockCategories(BlockCategoryWebsocketData),
}

impl Update {
    /// Returns the action tag this update is sent with.
    #[must_use]
    pub fn action(&self) -> UpdateAction {
        match self {
            Self::Block(_) => UpdateAction::UpdateBlock,
            Self::Category(_) => UpdateAction::UpdateCategory,
            Self::BlockCategories(_) => UpdateAction::UpdateBlockCategory,
        }
    }
}

impl From<Update> for UpdateMsg {
    fn from(update: Update) -> Self {
        let action = update.action().as_str().to_string();
        match update {
            Update::Block(block) => Self {
                action,
                block: Some(block),
                ..Self::default()
            },
            Update::Category(category) => Self {
                action,
                category: Some(category),
                ..Self::default()
            },
            Update::BlockCategories(data) => Self {
                action,
                block_categories: Some(data),
                ..Self::default()
            },
        }
    }
}

impl TryFrom<UpdateMsg> for Update {
    type Error = DecodeError;

    fn try_from(msg: UpdateMsg) -> Result<Self, Self::Error> {
        let kind = msg.kind();
        if !kind.is_known() {
            return Err(DecodeError::UnknownAction(msg.action));
        }
        if msg.payload_count() > 1 {
            return Err(DecodeError::ConflictingPayloads { action: msg.action });
        }

        let UpdateMsg {
            action,
            block,
            category,
            block_categories,
        } = msg;
        let (payload, field) = match kind {
            UpdateAction::UpdateBlock => (block.map(Self::Block), FIELD_BLOCK),
            UpdateAction::UpdateCategory => (category.map(Self::Category), FIELD_CATEGORY),
            UpdateAction::UpdateBlockCategory => (
                block_categories.map(Self::BlockCategories),
                FIELD_BLOCK_CATEGORIES,
            ),
            UpdateAction::Other(action) => return Err(DecodeError::UnknownAction(action)),
        };
        payload.ok_or(DecodeError::MissingPayload { action, field })
    }
}
