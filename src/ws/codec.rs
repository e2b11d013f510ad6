//! Configured encoder/decoder for both message directions.
//!
//! [`WsCodec`] applies the [`ProtocolConfig`] limits before handing text to
//! `serde_json`, and logs every rejected payload. It holds no mutable state,
//! so a single instance can be cloned into every connection task.

use serde::de::DeserializeOwned;

use super::command::WebsocketCommand;
use super::update::{Update, UpdateMsg};
use crate::config::ProtocolConfig;
use crate::error::{DecodeError, EncodeError};

/// Encodes and decodes protocol messages under a [`ProtocolConfig`].
#[derive(Debug, Clone, Default)]
pub struct WsCodec {
    config: ProtocolConfig,
}

impl WsCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: ProtocolConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Decodes a client command.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooLarge`] if the text exceeds the size limit,
    /// [`DecodeError::Malformed`] if it is not a command object, and, in
    /// strict mode, [`DecodeError::UnknownAction`] for an unrecognised
    /// action tag.
    pub fn decode_command(&self, text: &str) -> Result<WebsocketCommand, DecodeError> {
        let cmd: WebsocketCommand = self.parse(text, "command")?;
        if self.config.strict_actions && !cmd.kind().is_known() {
            tracing::warn!(action = %cmd.action, "rejected command with unknown action");
            return Err(DecodeError::UnknownAction(cmd.action));
        }
        tracing::debug!(
            action = %cmd.action,
            workspace_id = %cmd.workspace_id,
            block_ids = cmd.block_ids.len(),
            "decoded command"
        );
        Ok(cmd)
    }

    /// Decodes an update message without checking its payload fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooLarge`] if the text exceeds the size limit,
    /// [`DecodeError::Malformed`] if it is not an update object, and, in
    /// strict mode, [`DecodeError::UnknownAction`] for an unrecognised
    /// action tag.
    pub fn decode_update(&self, text: &str) -> Result<UpdateMsg, DecodeError> {
        let msg: UpdateMsg = self.parse(text, "update")?;
        if self.config.strict_actions && !msg.kind().is_known() {
            tracing::warn!(action = %msg.action, "rejected update with unknown action");
            return Err(DecodeError::UnknownAction(msg.action));
        }
        tracing::debug!(action = %msg.action, payloads = msg.payload_count(), "decoded update");
        Ok(msg)
    }

    /// Decodes an update message and converts it to the typed view.
    ///
    /// # Errors
    ///
    /// Returns any error of [`WsCodec::decode_update`], plus
    /// [`DecodeError::UnknownAction`], [`DecodeError::MissingPayload`] or
    /// [`DecodeError::ConflictingPayloads`] when the payload fields do not
    /// match the action tag.
    pub fn decode_typed_update(&self, text: &str) -> Result<Update, DecodeError> {
        let msg = self.decode_update(text)?;
        Update::try_from(msg).inspect_err(|err| {
            tracing::warn!(error = %err, "update payload does not match its action");
        })
    }

    /// Encodes an update message as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if serialization fails.
    pub fn encode_update(&self, msg: &UpdateMsg) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(msg)?)
    }

    /// Encodes a client command as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if serialization fails.
    pub fn encode_command(&self, cmd: &WebsocketCommand) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(cmd)?)
    }

    /// Checks the size limit, then parses `text` as `T`.
    fn parse<T: DeserializeOwned>(&self, text: &str, what: &'static str) -> Result<T, DecodeError> {
        let max = self.config.max_message_bytes;
        if text.len() > max {
            tracing::warn!(len = text.len(), max, what, "rejected oversized payload");
            return Err(DecodeError::TooLarge {
                len: text.len(),
                max,
            });
        }
        serde_json::from_str(text).map_err(|err| {
            tracing::warn!(error = %err, what, "rejected malformed payload");
            DecodeError::from(err)
        })
    }
}
