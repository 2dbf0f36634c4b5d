//! Agent-side tool call handling: bounding tool results before they reach the
//! model's context, and recognizing tool calls that send messages.

pub mod messaging;
pub mod tool_result;

pub use {
    messaging::{
        MESSAGE_TOOL_NAME, MessagingToolSend, extract_messaging_tool_send,
        normalize_target_for_provider,
    },
    tool_result::{
        TOOL_RESULT_MAX_CHARS, TRUNCATION_MARKER, is_tool_result_error, sanitize_tool_result,
        sanitize_tool_result_with_limit, truncate_tool_text,
    },
};
