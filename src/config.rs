//! Codec configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Missing or unparsable values fall back to the defaults.

/// Default upper bound on an accepted payload, in bytes.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1_048_576;

/// Settings consumed by [`crate::ws::WsCodec`].
///
/// Loaded once at startup via [`ProtocolConfig::from_env`], or built
/// directly in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Payloads longer than this many bytes are rejected before parsing.
    pub max_message_bytes: usize,

    /// Reject action tags outside the known vocabulary.
    pub strict_actions: bool,

    /// Decode binary frames as UTF-8 JSON instead of rejecting them.
    pub accept_binary: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            strict_actions: false,
            accept_binary: true,
        }
    }
}

impl ProtocolConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads `WS_MAX_MESSAGE_BYTES`, `WS_STRICT_ACTIONS` and
    /// `WS_ACCEPT_BINARY`. Calls `dotenvy::dotenv().ok()` to optionally
    /// load a `.env` file first.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, using the
    /// same keys and fallbacks as [`ProtocolConfig::from_env`].
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            max_message_bytes: parse_value(
                lookup("WS_MAX_MESSAGE_BYTES").as_deref(),
                defaults.max_message_bytes,
            ),
            strict_actions: parse_bool(
                lookup("WS_STRICT_ACTIONS").as_deref(),
                defaults.strict_actions,
            ),
            accept_binary: parse_bool(
                lookup("WS_ACCEPT_BINARY").as_deref(),
                defaults.accept_binary,
            ),
        };
        tracing::debug!(
            max_message_bytes = config.max_message_bytes,
            strict_actions = config.strict_actions,
            accept_binary = config.accept_binary,
            "loaded websocket protocol config"
        );
        config
    }
}

/// Parses a raw setting as `T`, returning `default` on missing or invalid
/// values.
fn parse_value<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parses a raw setting as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
