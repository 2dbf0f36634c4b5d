//! Channel plugin system.
//!
//! Each messaging provider (Slack, Telegram, Discord, etc.) implements the
//! [`ChannelPlugin`] trait and opts into capabilities such as tool-send
//! extraction or recipient normalization. Plugins are looked up by canonical
//! id through the [`ChannelRegistry`].

pub mod args;
pub mod bundled;
pub mod error;
pub mod plugin;
pub mod registry;

pub use {
    error::{Error, Result},
    plugin::{ChannelActions, ChannelMessaging, ChannelPlugin, ExtractedToolSend},
    registry::ChannelRegistry,
};
