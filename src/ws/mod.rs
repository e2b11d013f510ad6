//! WebSocket wire contract: actions, updates, commands and their codec.
//!
//! Updates flow server → client, commands flow client → server. Both are
//! JSON objects. Subscription bookkeeping, authentication and broadcast
//! belong to the dispatcher that uses these types.

pub mod action;
pub mod codec;
pub mod command;
#[cfg(feature = "axum")]
pub mod frame;
pub mod update;

pub use action::{CommandAction, UpdateAction};
pub use codec::WsCodec;
pub use command::WebsocketCommand;
#[cfg(feature = "axum")]
pub use frame::error_frame;
pub use update::{Update, UpdateMsg};
