//! Line-oriented text renderer

use std::io::Write;

use super::{Renderer, SpriteRect, Status};
use crate::sim::MoveRecord;
use crate::ui::SpeedMenu;
use crate::ui::menu::MENU_TITLE;

/// Writes one line per event to any `Write` sink
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(text).and_then(|_| self.out.write_all(b"\n")) {
            log::warn!("Render error: {}", e);
            return;
        }
        if let Err(e) = self.out.flush() {
            log::warn!("Render flush error: {}", e);
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn show_move(&mut self, record: &MoveRecord) {
        let rect = SpriteRect::for_move(record);
        self.line(format_args!(
            "{:<3} [sprite {},{}]",
            record.label(),
            rect.origin.x,
            rect.origin.y
        ));
    }

    fn show_menu(&mut self, menu: &SpeedMenu) {
        let rows: Vec<String> = menu
            .rows()
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                if i == menu.selected_row() {
                    format!("[{}]", preset.as_str())
                } else {
                    preset.as_str().to_string()
                }
            })
            .collect();
        self.line(format_args!("{}: {}", MENU_TITLE, rows.join(" ")));
    }

    fn hide_menu(&mut self) {
        self.line(format_args!("--"));
    }

    fn show_status(&mut self, status: Status) {
        let state = if status.paused { "paused" } else { "running" };
        self.line(format_args!("interval {}s, {}", status.interval, state));
    }
}
