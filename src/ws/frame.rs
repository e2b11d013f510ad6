//! Conversion between protocol records and axum websocket frames.

use axum::extract::ws::Message;

use super::codec::WsCodec;
use super::command::WebsocketCommand;
use super::update::UpdateMsg;
use crate::error::{DecodeError, EncodeError};

impl WsCodec {
    /// Decodes a client command from a received frame.
    ///
    /// Control frames (ping, pong, close) carry no command and yield
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedFrame`] for binary frames when
    /// binary input is disabled, [`DecodeError::InvalidUtf8`] for binary
    /// frames that are not UTF-8, and any error of
    /// [`WsCodec::decode_command`].
    pub fn decode_command_frame(
        &self,
        frame: &Message,
    ) -> Result<Option<WebsocketCommand>, DecodeError> {
        match frame {
            Message::Text(text) => self.decode_command(text.as_str()).map(Some),
            Message::Binary(bytes) => {
                if !self.config().accept_binary {
                    tracing::warn!(len = bytes.len(), "rejected binary frame");
                    return Err(DecodeError::UnsupportedFrame("binary"));
                }
                let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
                self.decode_command(text).map(Some)
            }
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) => Ok(None),
        }
    }

    /// Encodes an update message as a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if serialization fails.
    pub fn update_frame(&self, msg: &UpdateMsg) -> Result<Message, EncodeError> {
        self.encode_update(msg).map(Message::text)
    }
}

/// Renders a decode failure as a text frame the peer can display.
#[must_use]
pub fn error_frame(err: &DecodeError) -> Message {
    let body = serde_json::to_string(&err.to_response()).unwrap_or_default();
    Message::text(body)
}
