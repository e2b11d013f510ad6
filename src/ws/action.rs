//! Action vocabularies for both message directions.
//!
//! The `action` field is an open string on the wire. These enums name the
//! values this crate knows about and keep everything else in an `Other`
//! variant, so a newer peer's action survives a decode/encode cycle.

use std::fmt;

/// `action` value of an update for a block.
pub const ACTION_UPDATE_BLOCK: &str = "UPDATE_BLOCK";
/// `action` value of an update for a category.
pub const ACTION_UPDATE_CATEGORY: &str = "UPDATE_CATEGORY";
/// `action` value of an update for a block-category association.
pub const ACTION_UPDATE_BLOCK_CATEGORY: &str = "UPDATE_BLOCK_CATEGORY";

/// `action` value of a command authenticating the connection.
pub const ACTION_AUTH: &str = "AUTH";
/// `action` value of a command subscribing to blocks.
pub const ACTION_SUBSCRIBE_BLOCKS: &str = "SUBSCRIBE_BLOCKS";
/// `action` value of a command unsubscribing from blocks.
pub const ACTION_UNSUBSCRIBE_BLOCKS: &str = "UNSUBSCRIBE_BLOCKS";
/// `action` value of a command subscribing to a whole workspace.
pub const ACTION_SUBSCRIBE_WORKSPACE: &str = "SUBSCRIBE_WORKSPACE";
/// `action` value of a command unsubscribing from a whole workspace.
pub const ACTION_UNSUBSCRIBE_WORKSPACE: &str = "UNSUBSCRIBE_WORKSPACE";

/// Kind of a server-to-client update.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpdateAction {
    /// A block was created, changed or deleted.
    UpdateBlock,
    /// A category was created, changed or deleted.
    UpdateCategory,
    /// A block moved between categories.
    UpdateBlockCategory,
    /// Any action not listed above.
    Other(String),
}

impl UpdateAction {
    /// Returns the wire string for this action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::UpdateBlock => ACTION_UPDATE_BLOCK,
            Self::UpdateCategory => ACTION_UPDATE_CATEGORY,
            Self::UpdateBlockCategory => ACTION_UPDATE_BLOCK_CATEGORY,
            Self::Other(action) => action,
        }
    }

    /// Returns `true` unless this is an [`UpdateAction::Other`].
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for UpdateAction {
    fn from(action: &str) -> Self {
        match action {
            ACTION_UPDATE_BLOCK => Self::UpdateBlock,
            ACTION_UPDATE_CATEGORY => Self::UpdateCategory,
            ACTION_UPDATE_BLOCK_CATEGORY => Self::UpdateBlockCategory,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a client-to-server command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandAction {
    /// Authenticate the connection with `token`.
    Auth,
    /// Start receiving updates for `blockIds`.
    SubscribeBlocks,
    /// Stop receiving updates for `blockIds`.
    UnsubscribeBlocks,
    /// Start receiving updates for the whole workspace.
    SubscribeWorkspace,
    /// Stop receiving updates for the whole workspace.
    UnsubscribeWorkspace,
    /// Any action not listed above, including the empty string.
    Other(String),
}

impl CommandAction {
    /// Returns the wire string for this action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auth => ACTION_AUTH,
            Self::SubscribeBlocks => ACTION_SUBSCRIBE_BLOCKS,
            Self::UnsubscribeBlocks => ACTION_UNSUBSCRIBE_BLOCKS,
            Self::SubscribeWorkspace => ACTION_SUBSCRIBE_WORKSPACE,
            Self::UnsubscribeWorkspace => ACTION_UNSUBSCRIBE_WORKSPACE,
            Self::Other(action) => action,
        }
    }

    /// Returns `true` unless this is a [`CommandAction::Other`].
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns `true` for actions that operate on the `blockIds` list.
    #[must_use]
    pub const fn targets_blocks(&self) -> bool {
        matches!(self, Self::SubscribeBlocks | Self::UnsubscribeBlocks)
    }
}

impl From<&str> for CommandAction {
    fn from(action: &str) -> Self {
        match action {
            ACTION_AUTH => Self::Auth,
            ACTION_SUBSCRIBE_BLOCKS => Self::SubscribeBlocks,
            ACTION_UNSUBSCRIBE_BLOCKS => Self::UnsubscribeBlocks,
            ACTION_SUBSCRIBE_WORKSPACE => Self::SubscribeWorkspace,
            ACTION_UNSUBSCRIBE_WORKSPACE => Self::UnsubscribeWorkspace,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_update_actions_round_trip() {
        for action in [
            ACTION_UPDATE_BLOCK,
            ACTION_UPDATE_CATEGORY,
            ACTION_UPDATE_BLOCK_CATEGORY,
        ] {
            let parsed = UpdateAction::from(action);
            assert!(parsed.is_known());
            assert_eq!(parsed.as_str(), action);
        }
    }

    #[test]
    fn unknown_action_is_preserved() {
        let parsed = UpdateAction::from("UPDATE_BOARD_MEMBER");
        assert_eq!(parsed, UpdateAction::Other("UPDATE_BOARD_MEMBER".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(parsed.to_string(), "UPDATE_BOARD_MEMBER");
    }

    #[test]
    fn command_actions_are_case_sensitive() {
        assert_eq!(CommandAction::from("SUBSCRIBE_BLOCKS"), CommandAction::SubscribeBlocks);
        assert!(!CommandAction::from("subscribe_blocks").is_known());
    }

    #[test]
    fn block_targeting_actions() {
        assert!(CommandAction::SubscribeBlocks.targets_blocks());
        assert!(CommandAction::UnsubscribeBlocks.targets_blocks());
        assert!(!CommandAction::Auth.targets_blocks());
        assert!(!CommandAction::from("").targets_blocks());
    }
}
