//! Client-to-server commands.

use serde::{Deserialize, Serialize};

use super::action::CommandAction;
use crate::domain::{BlockId, WorkspaceId};
use crate::nullable::null_as_default;

/// A single request from a client.
///
/// Every field is optional on input: missing or `null` strings decode as
/// `""` and a missing or `null` `blockIds` decodes as an empty list. On
/// output all five keys are always written. Token values are never
/// validated here.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsocketCommand {
    /// Requested operation, e.g. `"SUBSCRIBE_BLOCKS"`.
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    /// Workspace the command applies to.
    #[serde(deserialize_with = "null_as_default")]
    pub workspace_id: WorkspaceId,
    /// Session token.
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    /// Read-only share token.
    #[serde(deserialize_with = "null_as_default")]
    pub read_token: String,
    /// Blocks the command concerns, in client order.
    #[serde(deserialize_with = "null_as_default")]
    pub block_ids: Vec<BlockId>,
}

impl WebsocketCommand {
    /// Creates a command with the given action and workspace and no
    /// credentials or block ids.
    #[must_use]
    pub fn new(action: impl Into<String>, workspace_id: WorkspaceId) -> Self {
        Self {
            action: action.into(),
            workspace_id,
            ..Self::default()
        }
    }

    /// Returns the parsed action tag.
    #[must_use]
    pub fn kind(&self) -> CommandAction {
        CommandAction::from(self.action.as_str())
    }

    /// Returns `true` if either credential is present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.token.is_empty() || !self.read_token.is_empty()
    }
}

// Tokens are credentials; keep them out of logs.
impl std::fmt::Debug for WebsocketCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebsocketCommand")
            .field("action", &self.action)
            .field("workspace_id", &self.workspace_id)
            .field("token", &redact(&self.token))
            .field("read_token", &redact(&self.read_token))
            .field("block_ids", &self.block_ids)
            .finish()
    }
}

fn redact(token: &str) -> &'static str {
    if token.is_empty() { "" } else { "<redacted>" }
}
