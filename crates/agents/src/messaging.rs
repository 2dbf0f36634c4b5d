//! Detect tool calls that send a message and normalize them into a
//! provider-agnostic [`MessagingToolSend`].
//!
//! Two tool shapes are recognized:
//! - the generic `message` tool (`{ action: "send" | "thread-reply", to,
//!   provider? | channel?, accountId? }`);
//! - provider-named tools (`slack`, `telegram`, ...) whose plugin implements
//!   [`ChannelActions`](courier_channels::ChannelActions).
//!
//! Every intent returned carries a registered-or-hinted provider id and a
//! recipient that has already been through the provider's normalizer.
//! Anything unrecognized yields `None`; nothing here fails loudly.

use {
    courier_channels::{
        ChannelRegistry,
        args::{str_arg, trimmed_arg},
    },
    serde::Serialize,
    serde_json::Value,
    tracing::debug,
};

#[cfg(feature = "metrics")]
use courier_metrics::{counter, labels, messaging as msg_metrics};

/// Name of the generic messaging tool.
pub const MESSAGE_TOOL_NAME: &str = "message";

/// Provider used by the `message` tool when no hint is given.
const FALLBACK_PROVIDER: &str = "message";

const MESSAGE_SEND_ACTIONS: &[&str] = &["send", "thread-reply"];

/// A normalized "send this to that recipient via that provider" intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingToolSend {
    pub tool: String,
    /// Canonical lowercase provider id.
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Provider-normalized recipient.
    pub to: String,
}

/// Recognize a message send in a tool call.
pub fn extract_messaging_tool_send(
    registry: &ChannelRegistry,
    tool_name: &str,
    args: &Value,
) -> Option<MessagingToolSend> {
    let account_id = trimmed_arg(args, "accountId").map(str::to_string);

    let send = if tool_name == MESSAGE_TOOL_NAME {
        let action = trimmed_arg(args, "action").unwrap_or_default();
        extract_message_tool_send(registry, tool_name, action, account_id, args)
    } else {
        extract_provider_tool_send(registry, tool_name, account_id, args)
    };

    #[cfg(feature = "metrics")]
    {
        if let Some(send) = &send {
            counter!(
                msg_metrics::SENDS_EXTRACTED_TOTAL,
                labels::PROVIDER => send.provider.clone(),
                labels::TOOL => send.tool.clone()
            )
            .increment(1);
        }
    }

    send
}

fn extract_message_tool_send(
    registry: &ChannelRegistry,
    tool_name: &str,
    action: &str,
    account_id: Option<String>,
    args: &Value,
) -> Option<MessagingToolSend> {
    if !MESSAGE_SEND_ACTIONS.contains(&action) {
        return None;
    }
    let raw_to = str_arg(args, "to").filter(|to| !to.is_empty())?;

    let provider = match trimmed_arg(args, "provider").or_else(|| trimmed_arg(args, "channel")) {
        Some(hint) => registry
            .normalize_channel_id(hint)
            .unwrap_or_else(|| hint.to_lowercase()),
        None => FALLBACK_PROVIDER.to_string(),
    };

    let Some(to) = normalize_target_for_provider(registry, &provider, raw_to) else {
        debug!(tool = %tool_name, provider = %provider, "message tool recipient rejected");
        return None;
    };

    Some(MessagingToolSend {
        tool: tool_name.to_string(),
        provider,
        account_id,
        to,
    })
}

fn extract_provider_tool_send(
    registry: &ChannelRegistry,
    tool_name: &str,
    account_id: Option<String>,
    args: &Value,
) -> Option<MessagingToolSend> {
    let provider = registry.normalize_channel_id(tool_name)?;
    let actions = registry.get(&provider)?.actions()?;

    let extracted = match actions.extract_tool_send(args) {
        Ok(Some(extracted)) if !extracted.to.is_empty() => extracted,
        Ok(_) => return None,
        Err(e) => {
            debug!(
                tool = %tool_name,
                provider = %provider,
                error = %e,
                "tool send extraction failed"
            );
            #[cfg(feature = "metrics")]
            counter!(msg_metrics::PLUGIN_FAULTS_TOTAL, labels::PROVIDER => provider.clone())
                .increment(1);
            return None;
        },
    };

    let Some(to) = normalize_target_for_provider(registry, &provider, &extracted.to) else {
        debug!(tool = %tool_name, provider = %provider, "provider tool recipient rejected");
        return None;
    };

    Some(MessagingToolSend {
        tool: tool_name.to_string(),
        provider,
        account_id: extracted.account_id.or(account_id),
        to,
    })
}

/// Normalize a recipient for `provider`.
///
/// Uses the provider plugin's [`ChannelMessaging`](courier_channels::ChannelMessaging)
/// capability when it has one; a plugin returning `None` rejects the target.
/// Providers without that capability (or without a plugin) fall back to the
/// trimmed, lowercased input. Empty results are rejected.
pub fn normalize_target_for_provider(
    registry: &ChannelRegistry,
    provider: &str,
    raw: &str,
) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let messaging = registry
        .normalize_channel_id(provider)
        .and_then(|id| registry.get(&id))
        .and_then(|plugin| plugin.messaging());

    let normalized = match messaging {
        Some(messaging) => messaging.normalize_target(raw),
        None => Some(raw.trim().to_lowercase()),
    };
    normalized.filter(|to| !to.is_empty())
}
