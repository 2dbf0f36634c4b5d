/// Config schema types (tool-result limits, channel aliases).
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default cap on a single text content item, in UTF-16 code units.
pub const DEFAULT_TOOL_RESULT_MAX_CHARS: usize = 8000;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    pub tools: ToolsConfig,
    pub channels: ChannelsConfig,
}

impl CourierConfig {
    /// Reject values that would make sanitization meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.tools.max_result_chars == 0 {
            return Err(Error::invalid(
                "tools.max_result_chars",
                "must be greater than zero",
            ));
        }
        for (alias, target) in &self.channels.aliases {
            if alias.trim().is_empty() || target.trim().is_empty() {
                return Err(Error::invalid(
                    "channels.aliases",
                    format!("empty alias or target in \"{alias}\" = \"{target}\""),
                ));
            }
        }
        Ok(())
    }
}

/// Tool result handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Maximum UTF-16 length of a text content item before truncation. Default 8000.
    pub max_result_chars: usize,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            max_result_chars: DEFAULT_TOOL_RESULT_MAX_CHARS,
        }
    }
}

/// Channel id resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    /// Extra provider aliases, e.g. `gchat = "googlechat"`. Keys are matched
    /// case-insensitively; targets must name a registered channel to resolve.
    pub aliases: HashMap<String, String>,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = CourierConfig::default();
        assert_eq!(cfg.tools.max_result_chars, 8000);
        assert!(cfg.channels.aliases.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: CourierConfig = toml::from_str("[channels.aliases]\ntg = \"telegram\"\n").unwrap();
        assert_eq!(cfg.tools.max_result_chars, DEFAULT_TOOL_RESULT_MAX_CHARS);
        assert_eq!(cfg.channels.aliases["tg"], "telegram");
    }

    #[test]
    fn zero_limit_is_invalid() {
        let mut cfg = CourierConfig::default();
        cfg.tools.max_result_chars = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("tools.max_result_chars"));
    }

    #[test]
    fn blank_alias_is_invalid() {
        let mut cfg = CourierConfig::default();
        cfg.channels.aliases.insert(" ".into(), "slack".into());
        assert!(cfg.validate().is_err());
    }
}
