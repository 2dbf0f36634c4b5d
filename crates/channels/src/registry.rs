use std::collections::HashMap;

use tracing::debug;

use super::plugin::ChannelPlugin;

#[cfg(feature = "metrics")]
use courier_metrics::{channels as ch_metrics, gauge};

/// Registry of all loaded channel plugins, keyed by canonical id.
///
/// Populated once at startup and read-only afterwards, so it can be shared
/// behind an `Arc` by concurrent tool calls.
pub struct ChannelRegistry {
    plugins: HashMap<String, Box<dyn ChannelPlugin>>,
    /// Lowercased alias -> canonical id.
    aliases: HashMap<String, String>,
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Add configured aliases (e.g. from `[channels.aliases]`).
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (alias, target) in aliases {
            self.add_alias(alias.as_ref(), target.as_ref());
        }
        self
    }

    /// Map `alias` to `target`. A later mapping for the same alias wins.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        let alias = alias.trim().to_lowercase();
        let target = target.trim().to_lowercase();
        if alias.is_empty() || target.is_empty() {
            return;
        }
        self.aliases.insert(alias, target);
    }

    pub fn register(&mut self, plugin: Box<dyn ChannelPlugin>) {
        let id = plugin.id().trim().to_lowercase();
        for alias in plugin.aliases() {
            self.add_alias(alias, &id);
        }
        debug!(channel = %id, "registered channel plugin");
        self.plugins.insert(id, plugin);
        #[cfg(feature = "metrics")]
        gauge!(ch_metrics::REGISTERED).set(self.plugins.len() as f64);
    }

    pub fn get(&self, id: &str) -> Option<&dyn ChannelPlugin> {
        self.plugins.get(id).map(|p| p.as_ref())
    }

    /// Registered channel ids, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.plugins.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a free-form provider hint ("Slack", " tg ") to a registered id.
    ///
    /// Returns `None` for blank input and for anything that is neither a
    /// registered id nor an alias of one.
    pub fn normalize_channel_id(&self, raw: &str) -> Option<String> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if self.plugins.contains_key(&key) {
            return Some(key);
        }
        self.aliases
            .get(&key)
            .filter(|target| self.plugins.contains_key(target.as_str()))
            .cloned()
    }
}
