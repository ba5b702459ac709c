//! Shuffle settings and preferences
//!
//! The only persisted preference is the move interval, stored as a plain
//! integer under `SHUFFLE_STORAGE_KEY`.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INTERVAL, MAX_INTERVAL, SHUFFLE_STORAGE_KEY};
use crate::persistence::{KeyValueStore, StoreError};

/// Speed presets offered by the speed menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Sprint,
    Run,
    #[default]
    Walk,
    Mosey,
}

impl SpeedPreset {
    /// Presets in menu order
    pub const ALL: [SpeedPreset; 4] = [
        SpeedPreset::Sprint,
        SpeedPreset::Run,
        SpeedPreset::Walk,
        SpeedPreset::Mosey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Sprint => "Sprint",
            SpeedPreset::Run => "Run",
            SpeedPreset::Walk => "Walk",
            SpeedPreset::Mosey => "Mosey",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sprint" => Some(SpeedPreset::Sprint),
            "run" => Some(SpeedPreset::Run),
            "walk" => Some(SpeedPreset::Walk),
            "mosey" => Some(SpeedPreset::Mosey),
            _ => None,
        }
    }

    /// Seconds between moves
    pub fn interval(&self) -> u16 {
        match self {
            SpeedPreset::Sprint => 0,
            SpeedPreset::Run => 1,
            SpeedPreset::Walk => 3,
            SpeedPreset::Mosey => 5,
        }
    }

    /// Preset with exactly this interval, if any
    pub fn from_interval(interval: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.interval() == interval)
    }
}

/// Shuffle settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Seconds to wait after each move
    pub interval: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Settings {
    /// Settings with a preset's interval
    pub fn from_preset(preset: SpeedPreset) -> Self {
        Self {
            interval: preset.interval(),
        }
    }

    /// Lengthen the interval by a second, saturating at `MAX_INTERVAL`
    pub fn slower(&mut self) -> u16 {
        self.interval = self.interval.saturating_add(1).min(MAX_INTERVAL);
        self.interval
    }

    /// Shorten the interval by a second, saturating at zero
    pub fn faster(&mut self) -> u16 {
        self.interval = self.interval.saturating_sub(1);
        self.interval
    }

    /// Load settings from a store, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.read_int(SHUFFLE_STORAGE_KEY) {
            Ok(Some(value)) => match u16::try_from(value) {
                Ok(interval) if interval <= MAX_INTERVAL => {
                    log::info!("Loaded interval {}s from store", interval);
                    Self { interval }
                }
                _ => {
                    log::warn!("Ignoring stored interval {}, using default", value);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings ({}), using default", e);
                Self::default()
            }
        }
    }

    /// Save settings to a store
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.write_int(SHUFFLE_STORAGE_KEY, i32::from(self.interval))?;
        log::info!("Settings saved (interval {}s)", self.interval);
        Ok(())
    }
}
