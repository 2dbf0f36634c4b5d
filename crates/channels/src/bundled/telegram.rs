use serde_json::Value;

use crate::{
    ChannelActions, ChannelMessaging, ChannelPlugin, ExtractedToolSend, Result,
    bundled::{extract_send_message, strip_prefix_ci},
};

/// Telegram channel plugin.
pub struct TelegramPlugin;

impl ChannelPlugin for TelegramPlugin {
    fn id(&self) -> &str {
        "telegram"
    }

    fn name(&self) -> &str {
        "Telegram"
    }

    fn aliases(&self) -> &[&str] {
        &["tg"]
    }

    fn actions(&self) -> Option<&dyn ChannelActions> {
        Some(self)
    }

    fn messaging(&self) -> Option<&dyn ChannelMessaging> {
        Some(self)
    }
}

impl ChannelActions for TelegramPlugin {
    fn extract_tool_send(&self, args: &Value) -> Result<Option<ExtractedToolSend>> {
        extract_send_message("telegram", args)
    }
}

impl ChannelMessaging for TelegramPlugin {
    /// Chat ids (`-100123`) and `@usernames` both normalize to `telegram:<id>`.
    fn normalize_target(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let id = strip_prefix_ci(trimmed, "telegram:")
            .or_else(|| strip_prefix_ci(trimmed, "tg:"))
            .unwrap_or(trimmed)
            .trim();
        if id.is_empty() {
            return None;
        }
        Some(format!("telegram:{id}").to_lowercase())
    }
}
