//! # boards-ws
//!
//! WebSocket wire contract for a collaborative boards service.
//!
//! This crate defines the two JSON messages exchanged over the boards
//! websocket and a small codec around them. It does not track
//! subscriptions, check tokens or fan out updates; that is the job of the
//! dispatcher embedding it.
//!
//! ## Architecture
//!
//! ```text
//! Client                                Dispatcher (not in this crate)
//!   │  WebsocketCommand (ws/command)          ▲
//!   ├────────────────────────────────► WsCodec (ws/codec, ws/frame)
//!   │  UpdateMsg / Update (ws/update)         │
//!   ◄─────────────────────────────────────────┘
//!                   │
//!                   └── Block, Category, BlockCategoryWebsocketData (domain/)
//! ```
//!
//! ## Example
//!
//! ```
//! use boards_ws::domain::{Block, BlockId, WorkspaceId};
//! use boards_ws::ws::{Update, UpdateMsg, WsCodec};
//!
//! let codec = WsCodec::default();
//!
//! let cmd = codec
//!     .decode_command(r#"{"action":"SUBSCRIBE_BLOCKS","workspaceId":"ws1","blockIds":["b1"]}"#)
//!     .map_err(|err| err.to_string())?;
//! assert_eq!(cmd.block_ids, vec![BlockId::new("b1")]);
//!
//! let block = Block::new(BlockId::new("b1"), WorkspaceId::new("ws1"), "card");
//! let json = codec
//!     .encode_update(&UpdateMsg::from(Update::Block(block)))
//!     .map_err(|err| err.to_string())?;
//! assert!(json.starts_with(r#"{"action":"UPDATE_BLOCK","block":"#));
//! # Ok::<(), String>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
mod nullable;
pub mod ws;
