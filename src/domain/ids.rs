//! Type-safe entity identifiers.
//!
//! Every identifier is a newtype around a `String` so that block, category,
//! workspace, user and team ids cannot be confused with one another. On the
//! wire they serialize as bare JSON strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares one or more string-backed identifier newtypes.
macro_rules! string_id {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                /// Wraps an existing identifier string.
                #[must_use]
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                /// Returns the identifier as a string slice.
                #[must_use]
                pub fn as_str(&self) -> &str {
                    &self.0
                }

                /// Consumes the identifier, returning the inner string.
                #[must_use]
                pub fn into_inner(self) -> String {
                    self.0
                }

                /// Returns `true` if the identifier is the empty string.
                #[must_use]
                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }

            impl From<&str> for $name {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> Self {
                    id.0
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )+
    };
}

string_id! {
    /// Identifier of a block (card, board, view, comment, ...).
    BlockId,
    /// Identifier of a sidebar category.
    CategoryId,
    /// Identifier of the collaborative workspace a block lives in.
    WorkspaceId,
    /// Identifier of a user.
    UserId,
    /// Identifier of a team.
    TeamId,
}

/// Builds a fresh identifier: a one-letter kind prefix followed by the
/// 32 hex digits of a random UUID v4.
fn generate_with_prefix(prefix: char) -> String {
    let mut id = String::with_capacity(33);
    id.push(prefix);
    id.push_str(&uuid::Uuid::new_v4().simple().to_string());
    id
}

impl BlockId {
    /// Generates a new random block id, prefixed with `b`.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate_with_prefix('b'))
    }
}

impl CategoryId {
    /// Generates a new random category id, prefixed with `c`.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate_with_prefix('c'))
    }
}
