//! Platform abstraction layer
//!
//! Native host services for the terminal runner:
//! - Time/ticks (`TickClock`)
//! - Input events (stdin lines mapped to `Button`s)

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::Button;

/// Something that happened on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Tick,
    Button(Button),
}

/// Fixed-cadence tick source that also waits for button presses.
///
/// Ticks are scheduled against absolute deadlines so slow handlers don't
/// make the cadence drift.
pub struct TickClock {
    period: Duration,
    next: Instant,
    buttons: Option<Receiver<Button>>,
}

impl TickClock {
    pub fn new(period: Duration, buttons: Option<Receiver<Button>>) -> Self {
        Self {
            period,
            next: Instant::now() + period,
            buttons,
        }
    }

    /// Block until the next tick is due or a button arrives
    pub fn next_event(&mut self) -> HostEvent {
        loop {
            let now = Instant::now();
            if now >= self.next {
                self.next += self.period;
                // Way behind (suspended process): skip missed ticks
                if self.next < now {
                    self.next = now + self.period;
                }
                return HostEvent::Tick;
            }
            let wait = self.next - now;

            let Some(buttons) = &self.buttons else {
                thread::sleep(wait);
                continue;
            };
            match buttons.recv_timeout(wait) {
                Ok(button) => return HostEvent::Button(button),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("Input closed, ticks only");
                    self.buttons = None;
                }
            }
        }
    }
}

/// Read stdin lines on a helper thread and forward them as buttons
pub fn spawn_stdin_buttons() -> Receiver<Button> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match Button::from_str(&line) {
                Some(button) => {
                    if tx.send(button).is_err() {
                        break;
                    }
                }
                None => log::warn!("Unknown key {:?}", line.trim()),
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_without_input() {
        let mut clock = TickClock::new(Duration::from_millis(5), None);
        let start = Instant::now();
        assert_eq!(clock.next_event(), HostEvent::Tick);
        assert_eq!(clock.next_event(), HostEvent::Tick);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_button_preempts_tick() {
        let (tx, rx) = mpsc::channel();
        tx.send(Button::Up).unwrap();
        let mut clock = TickClock::new(Duration::from_secs(60), Some(rx));
        assert_eq!(clock.next_event(), HostEvent::Button(Button::Up));
    }

    #[test]
    fn test_closed_input_falls_back_to_ticks() {
        let (tx, rx) = mpsc::channel::<Button>();
        drop(tx);
        let mut clock = TickClock::new(Duration::from_millis(5), Some(rx));
        assert_eq!(clock.next_event(), HostEvent::Tick);
    }
}
