//! Trainer settings and their JSON persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    error::Result,
    models::{Sampling, Scenario, TablePosition, TextStyle},
};

/// User-facing trainer configuration.
///
/// Fields missing from a stored file fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainerSettings {
    pub show_hand_rank: bool,
    pub hero_position: TablePosition,
    pub scenario: Scenario,
    pub text_style: TextStyle,
    pub sampling: Sampling,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        TrainerSettings {
            show_hand_rank: true,
            hero_position: TablePosition::RANDOM,
            scenario: Scenario::Rfi,
            text_style: TextStyle::Simple,
            sampling: Sampling::Uniform,
        }
    }
}

/// A partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub show_hand_rank: Option<bool>,
    pub hero_position: Option<TablePosition>,
    pub scenario: Option<Scenario>,
    pub text_style: Option<TextStyle>,
    pub sampling: Option<Sampling>,
}

impl TrainerSettings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.show_hand_rank {
            self.show_hand_rank = v;
        }
        if let Some(v) = patch.hero_position {
            self.hero_position = v;
        }
        if let Some(v) = patch.scenario {
            self.scenario = v;
        }
        if let Some(v) = patch.text_style {
            self.text_style = v;
        }
        if let Some(v) = patch.sampling {
            self.sampling = v;
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded trainer settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`load`](Self::load), but a missing or unreadable file yields the
    /// defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("using default settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("saved trainer settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_trainer() {
        let s = TrainerSettings::default();
        assert!(s.show_hand_rank);
        assert_eq!(s.hero_position, TablePosition::RANDOM);
        assert_eq!(s.scenario, Scenario::Rfi);
    }

    #[test]
    fn parses_stored_settings() {
        let s = TrainerSettings::from_json(
            r#"{"showHandRank": false, "heroPosition": "CO", "scenario": "RESPONSE"}"#,
        )
        .unwrap();
        assert!(!s.show_hand_rank);
        assert_eq!(s.hero_position, TablePosition::CO);
        assert_eq!(s.scenario, Scenario::Response);
        assert_eq!(s.text_style, TextStyle::Simple);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(TrainerSettings::from_json("{}").unwrap(), TrainerSettings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TrainerSettings::from_json("{not json").is_err());
        assert!(TrainerSettings::from_json(r#"{"heroPosition": "MP"}"#).is_err());
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let mut s = TrainerSettings::default();
        s.apply(SettingsPatch { hero_position: Some(TablePosition::SB), ..Default::default() });
        assert_eq!(s.hero_position, TablePosition::SB);
        assert!(s.show_hand_rank);
        assert_eq!(s.scenario, Scenario::Rfi);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("preflop_trainer_{}.json", std::process::id()));
        let mut s = TrainerSettings::default();
        s.text_style = TextStyle::Technical;
        s.sampling = Sampling::Combinatorial;
        s.save(&path).unwrap();
        assert_eq!(TrainerSettings::load(&path).unwrap(), s);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(TrainerSettings::load_or_default(&path), TrainerSettings::default());
    }
}
