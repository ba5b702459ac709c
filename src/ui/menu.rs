//! Speed selection menu

use crate::settings::SpeedPreset;

/// Header drawn above the rows
pub const MENU_TITLE: &str = "Select speed";

/// One-section list of speed presets with a highlighted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedMenu {
    selected: usize,
}

impl SpeedMenu {
    /// Open with the row matching `interval` highlighted, else the first row
    pub fn open_at(interval: u16) -> Self {
        let selected = SpeedPreset::ALL
            .iter()
            .position(|p| p.interval() == interval)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn rows(&self) -> &'static [SpeedPreset] {
        &SpeedPreset::ALL
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> SpeedPreset {
        SpeedPreset::ALL[self.selected]
    }

    /// Move the highlight up, stopping at the first row
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the highlight down, stopping at the last row
    pub fn down(&mut self) {
        self.selected = (self.selected + 1).min(SpeedPreset::ALL.len() - 1);
    }
}
