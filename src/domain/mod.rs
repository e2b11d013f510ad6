//! Entity payloads carried inside update messages.
//!
//! The websocket layer treats these as payloads: it never interprets them
//! beyond serialization. Known fields are typed for the convenience of
//! callers, and unknown fields are preserved so newer peers can add keys
//! without breaking older ones.

pub mod block;
pub mod block_category;
pub mod category;
pub mod ids;

pub use block::Block;
pub use block_category::BlockCategoryWebsocketData;
pub use category::Category;
pub use ids::{BlockId, CategoryId, TeamId, UserId, WorkspaceId};
