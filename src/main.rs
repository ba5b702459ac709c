//! Cube Shuffle entry point
//!
//! Runs the shuffle in a terminal: one tick per `--tick-ms`, buttons typed
//! on stdin (`+`/`-`, Enter to select, `q` to go back or quit).

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use clap::{Parser, ValueEnum};

    use cube_shuffle::consts::TICK_PERIOD_MS;
    use cube_shuffle::platform::{HostEvent, TickClock, spawn_stdin_buttons};
    use cube_shuffle::{
        App, Control, ControlScheme, JsonFileStore, KeyValueStore, MemoryStore, MoveTable,
        TextRenderer,
    };

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Scheme {
        SpeedMenu,
        Stepper,
    }

    impl From<Scheme> for ControlScheme {
        fn from(scheme: Scheme) -> Self {
            match scheme {
                Scheme::SpeedMenu => ControlScheme::SpeedMenu,
                Scheme::Stepper => ControlScheme::Stepper,
            }
        }
    }

    #[derive(Parser, Debug)]
    #[command(name = "cube-shuffle", version, about = "Endless random Rubik's cube moves")]
    struct Cli {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Button layout
        #[arg(long, value_enum, default_value_t = Scheme::SpeedMenu)]
        scheme: Scheme,
        /// Settings file
        #[arg(long, default_value = "cube-shuffle.json")]
        store: PathBuf,
        /// Keep settings in memory only
        #[arg(long)]
        ephemeral: bool,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
        /// Tick period in milliseconds
        #[arg(long, default_value_t = TICK_PERIOD_MS)]
        tick_ms: u64,
        /// Ignore stdin (ticks only)
        #[arg(long)]
        no_input: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();

        if cli.ephemeral {
            run_with_store(&cli, MemoryStore::new())
        } else {
            let store = JsonFileStore::open(&cli.store)
                .with_context(|| format!("opening settings store {}", cli.store.display()))?;
            run_with_store(&cli, store)
        }
    }

    fn run_with_store<S: KeyValueStore>(cli: &Cli, store: S) -> Result<()> {
        let seed = cli.seed.unwrap_or_else(time_seed);
        let renderer = TextRenderer::new(std::io::stdout());

        let mut app = App::new(cli.scheme.into(), MoveTable::standard(), store, renderer)
            .context("building move sequencer")?;
        app.start(seed).context("starting shuffle")?;

        let buttons = (!cli.no_input).then(spawn_stdin_buttons);
        let mut clock = TickClock::new(Duration::from_millis(cli.tick_ms.max(1)), buttons);
        let mut ticks = 0u64;

        loop {
            let control = match clock.next_event() {
                HostEvent::Tick => {
                    ticks += 1;
                    app.on_tick()?
                }
                HostEvent::Button(button) => app.on_button(button)?,
            };

            if control == Control::Exit || cli.ticks.is_some_and(|limit| ticks >= limit) {
                break;
            }
        }

        log::info!("Shuffle stopped after {} ticks", ticks);
        Ok(())
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host; the library is driven by the embedding page
}
