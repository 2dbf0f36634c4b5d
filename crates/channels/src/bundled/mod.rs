//! Built-in channel plugins shipped with courier.
//!
//! These only implement argument extraction and recipient normalization;
//! delivery lives with the host's transport layer.

pub mod discord;
pub mod slack;
pub mod telegram;

use serde_json::Value;

use crate::{
    Error, ExtractedToolSend, Result,
    args::{str_arg, trimmed_arg},
    registry::ChannelRegistry,
};

pub use {discord::DiscordPlugin, slack::SlackPlugin, telegram::TelegramPlugin};

/// Register every bundled plugin.
pub fn register_bundled(registry: &mut ChannelRegistry) {
    registry.register(Box::new(SlackPlugin));
    registry.register(Box::new(TelegramPlugin));
    registry.register(Box::new(DiscordPlugin));
}

/// `{ action: "sendMessage", to, accountId? }`, the vocabulary shared by the
/// bundled provider tools.
pub(crate) fn extract_send_message(
    channel: &str,
    args: &Value,
) -> Result<Option<ExtractedToolSend>> {
    if trimmed_arg(args, "action") != Some("sendMessage") {
        return Ok(None);
    }
    let to = match args.get("to") {
        None | Some(Value::Null) => return Ok(None),
        Some(_) => str_arg(args, "to").ok_or_else(|| {
            Error::invalid_input(format!("{channel} sendMessage: `to` must be a string"))
        })?,
    };
    Ok(Some(ExtractedToolSend {
        to: to.to_string(),
        account_id: trimmed_arg(args, "accountId").map(str::to_string),
    }))
}

/// ASCII case-insensitive `strip_prefix`.
pub(crate) fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}

/// `kind:id` in lowercase, rejecting an empty id.
pub(crate) fn kind_target(kind: &str, id: &str) -> Option<String> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some(format!("{kind}:{id}").to_lowercase())
}

/// Explicit `user:` / `channel:` prefix, if present.
pub(crate) fn explicit_kind(input: &str) -> Option<Option<String>> {
    ["user:", "channel:"].iter().find_map(|prefix| {
        strip_prefix_ci(input, prefix).map(|id| kind_target(prefix.trim_end_matches(':'), id))
    })
}
