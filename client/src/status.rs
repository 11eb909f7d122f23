//! Blinking status banner
//!
//! The match only reports what the banner says. This toggles it on and off
//! from timestamps, polled once per rendered frame.

use game_core::StatusText;

pub const BLINK_INTERVAL: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct StatusBlinker {
    interval: f32,
    message: Option<String>,
    since: f32,
    shown: bool,
}

impl StatusBlinker {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            message: None,
            since: 0.0,
            shown: false,
        }
    }

    /// Poll with the latest status; returns whether the text is drawn this frame.
    pub fn poll(&mut self, status: &StatusText, now: f32) -> bool {
        if status.message != self.message {
            // New text always starts in the visible half of the cycle
            self.message = status.message.clone();
            self.since = now;
        }

        let shown = if !status.visible() || self.interval <= 0.0 {
            status.visible()
        } else {
            let phase = ((now - self.since) / self.interval).floor() as i64;
            phase % 2 == 0
        };

        if shown != self.shown {
            log::trace!("Status text {}", if shown { "shown" } else { "hidden" });
            self.shown = shown;
        }
        shown
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

impl Default for StatusBlinker {
    fn default() -> Self {
        Self::new(BLINK_INTERVAL)
    }
}
