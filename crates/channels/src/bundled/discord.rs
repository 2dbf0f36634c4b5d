use serde_json::Value;

use crate::{
    ChannelActions, ChannelMessaging, ChannelPlugin, ExtractedToolSend, Result,
    args::{id_arg, trimmed_arg},
    bundled::{explicit_kind, extract_send_message, kind_target, strip_prefix_ci},
};

/// Discord channel plugin.
pub struct DiscordPlugin;

impl ChannelPlugin for DiscordPlugin {
    fn id(&self) -> &str {
        "discord"
    }

    fn name(&self) -> &str {
        "Discord"
    }

    fn actions(&self) -> Option<&dyn ChannelActions> {
        Some(self)
    }

    fn messaging(&self) -> Option<&dyn ChannelMessaging> {
        Some(self)
    }
}

impl ChannelActions for DiscordPlugin {
    /// `sendMessage` reads `to`; `threadReply` targets the thread's `channelId`.
    fn extract_tool_send(&self, args: &Value) -> Result<Option<ExtractedToolSend>> {
        match trimmed_arg(args, "action") {
            Some("threadReply") => Ok(id_arg(args, "channelId").map(|id| ExtractedToolSend {
                to: format!("channel:{id}"),
                account_id: trimmed_arg(args, "accountId").map(str::to_string),
            })),
            _ => extract_send_message(self.id(), args),
        }
    }
}

impl ChannelMessaging for DiscordPlugin {
    /// Normalize to `user:<id>` or `channel:<id>`; bare ids are channels.
    fn normalize_target(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let target = strip_prefix_ci(trimmed, "discord:").unwrap_or(trimmed).trim();
        if target.is_empty() {
            return None;
        }

        if let Some(inner) = target.strip_prefix("<@").and_then(|s| s.strip_suffix('>')) {
            return kind_target("user", inner.strip_prefix('!').unwrap_or(inner));
        }
        if let Some(inner) = target.strip_prefix("<#").and_then(|s| s.strip_suffix('>')) {
            return kind_target("channel", inner);
        }
        if let Some(explicit) = explicit_kind(target) {
            return explicit;
        }
        kind_target("channel", target)
    }
}
