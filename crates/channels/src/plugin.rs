use serde::{Deserialize, Serialize};

use crate::Result;

/// Core channel plugin trait. Each messaging platform implements this.
///
/// Everything beyond identity is an optional capability: a plugin returns
/// `Some(self)` (or a helper) from the accessors it supports and keeps the
/// `None` default for the rest.
pub trait ChannelPlugin: Send + Sync {
    /// Canonical channel identifier (e.g. "slack", "telegram").
    fn id(&self) -> &str;

    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Alternate names that should resolve to [`id`](Self::id).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Provider-specific tool argument handling.
    fn actions(&self) -> Option<&dyn ChannelActions> {
        None
    }

    /// Recipient normalization.
    fn messaging(&self) -> Option<&dyn ChannelMessaging> {
        None
    }
}

/// Recipient and account parsed out of a provider-specific tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedToolSend {
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Interpret a provider's own tool vocabulary.
pub trait ChannelActions: Send + Sync {
    /// Return the recipient if `args` describe a message send.
    ///
    /// `Ok(None)` means the call is not a send (e.g. a reaction or a read).
    /// `Err` is reserved for arguments that claim to be a send but are
    /// malformed.
    fn extract_tool_send(&self, args: &serde_json::Value) -> Result<Option<ExtractedToolSend>>;
}

/// Provider-aware recipient validation.
pub trait ChannelMessaging: Send + Sync {
    /// Canonical form of `raw`, or `None` if it is not a valid recipient.
    fn normalize_target(&self, raw: &str) -> Option<String>;
}
