//! Application event handlers
//!
//! `App` owns the shuffle state, settings, store and renderer. A host loop
//! calls `start` once, then `on_tick` at `TICK_PERIOD_MS` and `on_button` for
//! each press. Handlers run one at a time on the caller's thread.

use crate::persistence::KeyValueStore;
use crate::renderer::{Renderer, Status};
use crate::settings::Settings;
use crate::sim::{MoveTable, SequencerError, ShuffleState, TickOutcome, tick};
use crate::ui::{Button, ControlScheme, SpeedMenu};

/// What the host loop should do after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Shuffle app instance
pub struct App<S: KeyValueStore, R: Renderer> {
    scheme: ControlScheme,
    state: ShuffleState,
    settings: Settings,
    store: S,
    renderer: R,
    /// Open speed menu; ticks are ignored while it is up
    menu: Option<SpeedMenu>,
}

impl<S: KeyValueStore, R: Renderer> App<S, R> {
    pub fn new(
        scheme: ControlScheme,
        table: MoveTable,
        store: S,
        renderer: R,
    ) -> Result<Self, SequencerError> {
        let settings = Settings::load(&store);
        Ok(Self {
            scheme,
            state: ShuffleState::new(table, settings.interval)?,
            settings,
            store,
            renderer,
            menu: None,
        })
    }

    /// Seed the sequence and show the first move right away
    pub fn start(&mut self, seed: u64) -> Result<(), SequencerError> {
        self.state.start(seed)?;
        log::info!(
            "Starting shuffle (seed {}, interval {}s, {})",
            seed,
            self.settings.interval,
            self.scheme.as_str()
        );
        self.render_status();
        self.tick_once()
    }

    /// Timer tick
    pub fn on_tick(&mut self) -> Result<Control, SequencerError> {
        if self.menu.is_none() {
            self.tick_once()?;
        }
        Ok(Control::Continue)
    }

    /// Button press
    pub fn on_button(&mut self, button: Button) -> Result<Control, SequencerError> {
        log::debug!("Button {:?}", button);

        if let Some(mut menu) = self.menu {
            match button {
                Button::Up => menu.up(),
                Button::Down => menu.down(),
                Button::Select => {
                    self.settings = Settings::from_preset(menu.selected());
                    self.persist();
                    return self.close_menu().map(|_| Control::Continue);
                }
                Button::Back => return self.close_menu().map(|_| Control::Continue),
            }
            self.menu = Some(menu);
            self.renderer.show_menu(&menu);
            return Ok(Control::Continue);
        }

        match (self.scheme, button) {
            (_, Button::Back) => {
                log::info!("Exit requested");
                return Ok(Control::Exit);
            }
            (ControlScheme::SpeedMenu, Button::Select) => {
                let menu = SpeedMenu::open_at(self.settings.interval);
                self.menu = Some(menu);
                self.renderer.show_menu(&menu);
            }
            (ControlScheme::SpeedMenu, Button::Up | Button::Down) => {}
            (ControlScheme::Stepper, Button::Up) => {
                self.settings.slower();
                self.apply_interval();
            }
            (ControlScheme::Stepper, Button::Down) => {
                self.settings.faster();
                self.apply_interval();
            }
            (ControlScheme::Stepper, Button::Select) => {
                let paused = self.state.pacer.toggle_pause();
                log::info!("{}", if paused { "Paused" } else { "Resumed" });
                self.render_status();
            }
        }
        Ok(Control::Continue)
    }

    pub fn state(&self) -> &ShuffleState {
        &self.state
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn menu(&self) -> Option<&SpeedMenu> {
        self.menu.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn tick_once(&mut self) -> Result<(), SequencerError> {
        if let TickOutcome::Advanced(_) = tick(&mut self.state)? {
            if let Some(record) = self.state.current() {
                self.renderer.show_move(record);
            }
        }
        Ok(())
    }

    /// Close the menu and resume from the stored interval with a fresh move
    fn close_menu(&mut self) -> Result<(), SequencerError> {
        self.menu = None;
        self.renderer.hide_menu();

        self.settings = Settings::load(&self.store);
        self.state.pacer.set_interval(self.settings.interval);
        self.state.pacer.restart();
        self.render_status();
        self.tick_once()
    }

    fn apply_interval(&mut self) {
        self.state.pacer.set_interval(self.settings.interval);
        self.persist();
        self.render_status();
    }

    fn persist(&mut self) {
        if let Err(e) = self.settings.save(&mut self.store) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    fn render_status(&mut self) {
        self.renderer.show_status(Status {
            interval: self.settings.interval,
            paused: self.state.pacer.is_paused(),
        });
    }
}
