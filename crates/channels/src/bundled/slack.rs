use serde_json::Value;

use crate::{
    ChannelActions, ChannelMessaging, ChannelPlugin, ExtractedToolSend, Result,
    bundled::{explicit_kind, extract_send_message, kind_target, strip_prefix_ci},
};

/// Slack channel plugin.
pub struct SlackPlugin;

impl ChannelPlugin for SlackPlugin {
    fn id(&self) -> &str {
        "slack"
    }

    fn name(&self) -> &str {
        "Slack"
    }

    fn actions(&self) -> Option<&dyn ChannelActions> {
        Some(self)
    }

    fn messaging(&self) -> Option<&dyn ChannelMessaging> {
        Some(self)
    }
}

impl ChannelActions for SlackPlugin {
    fn extract_tool_send(&self, args: &Value) -> Result<Option<ExtractedToolSend>> {
        extract_send_message("slack", args)
    }
}

impl ChannelMessaging for SlackPlugin {
    /// Normalize to `user:<id>` or `channel:<id>`.
    ///
    /// Accepts Slack mention markup (`<@U1>`, `<#C1|general>`), `@user`,
    /// `#channel`, explicit `user:`/`channel:` prefixes, and bare ids, which
    /// default to channels.
    fn normalize_target(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let target = strip_prefix_ci(trimmed, "slack:").unwrap_or(trimmed).trim();
        if target.is_empty() {
            return None;
        }

        if let Some(inner) = target.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            // Mention markup may carry a display label after `|`.
            let inner = inner.split('|').next().unwrap_or_default();
            return match inner.chars().next() {
                Some('@') => kind_target("user", &inner[1..]),
                Some('#') => kind_target("channel", &inner[1..]),
                _ => None,
            };
        }
        if let Some(user) = target.strip_prefix('@') {
            return kind_target("user", user);
        }
        if let Some(channel) = target.strip_prefix('#') {
            return kind_target("channel", channel);
        }
        if let Some(explicit) = explicit_kind(target) {
            return explicit;
        }
        kind_target("channel", target)
    }
}
