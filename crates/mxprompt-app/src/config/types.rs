//! Configuration types

use mxprompt_core::AgentRole;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Role preselected in the Agent Role selector
    #[serde(default)]
    pub default_role: AgentRole,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal event poll timeout; also the spinner tick rate
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Show the Multi-Agent Setup card under the form
    #[serde(default = "default_true")]
    pub show_agent_setup: bool,

    /// Seed whose initial is drawn in the header avatar badge
    #[serde(default = "default_avatar_seed")]
    pub avatar_seed: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            show_agent_setup: true,
            avatar_seed: default_avatar_seed(),
        }
    }
}

/// Lower bound for the poll interval so the loop never spins
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

impl UiSettings {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    /// First character of the avatar seed, uppercased
    pub fn avatar_initial(&self) -> char {
        self.avatar_seed
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_avatar_seed() -> String {
    "Felix".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.behavior.default_role, AgentRole::ResearchAssistant);
        assert_eq!(settings.ui.poll_interval_ms, 50);
        assert!(settings.ui.show_agent_setup);
        assert_eq!(settings.ui.avatar_seed, "Felix");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
show_agent_setup = false
"#,
        )
        .unwrap();
        assert!(!settings.ui.show_agent_setup);
        assert_eq!(settings.ui.poll_interval_ms, 50);
        assert_eq!(settings.behavior.default_role, AgentRole::ResearchAssistant);
    }

    #[test]
    fn test_default_role_parses_snake_case() {
        let settings: Settings = toml::from_str(
            r#"
[behavior]
default_role = "financial_analyst"
"#,
        )
        .unwrap();
        assert_eq!(settings.behavior.default_role, AgentRole::FinancialAnalyst);
    }

    #[test]
    fn test_poll_interval_is_clamped() {
        let ui = UiSettings {
            poll_interval_ms: 0,
            ..UiSettings::default()
        };
        assert_eq!(ui.poll_interval().as_millis(), MIN_POLL_INTERVAL_MS as u128);
    }

    #[test]
    fn test_avatar_initial() {
        let mut ui = UiSettings::default();
        assert_eq!(ui.avatar_initial(), 'F');
        ui.avatar_seed = "ada".to_string();
        assert_eq!(ui.avatar_initial(), 'A');
        ui.avatar_seed.clear();
        assert_eq!(ui.avatar_initial(), '?');
    }
}
