//! Keyboard input handling

use std::path::Path;

use game_core::{FrameInput, InputSource, Side};
use serde::{Deserialize, Serialize};

/// Which paddle a key drives, and in which direction (+1 = up)
pub fn axis_for_key(key: &str) -> Option<(Side, f32)> {
    match key {
        "w" | "W" => Some((Side::Player1, 1.0)),
        "s" | "S" => Some((Side::Player1, -1.0)),
        "ArrowUp" => Some((Side::Player2, 1.0)),
        "ArrowDown" => Some((Side::Player2, -1.0)),
        _ => None,
    }
}

pub fn is_start_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "space")
}

/// Held keys, turned into a [`FrameInput`] once per frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    up: [bool; 2],
    down: [bool; 2],
    start_held: bool,
    start_edge: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        if is_start_key(key) {
            // Auto-repeat must not retrigger the start edge
            if !self.start_held {
                self.start_edge = true;
            }
            self.start_held = true;
        } else if let Some((side, dir)) = axis_for_key(key) {
            self.set(side, dir, true);
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        if is_start_key(key) {
            self.start_held = false;
        } else if let Some((side, dir)) = axis_for_key(key) {
            self.set(side, dir, false);
        }
    }

    fn set(&mut self, side: Side, dir: f32, held: bool) {
        if dir > 0.0 {
            self.up[side.index()] = held;
        } else {
            self.down[side.index()] = held;
        }
    }

    pub fn axis(&self, side: Side) -> f32 {
        let i = side.index();
        (self.up[i] as i8 - self.down[i] as i8) as f32
    }

    /// Snapshot for this frame; consumes the start edge.
    pub fn frame_input(&mut self) -> FrameInput {
        let start_pressed = std::mem::take(&mut self.start_edge);
        FrameInput {
            axes: [self.axis(Side::Player1), self.axis(Side::Player2)],
            start_pressed,
        }
    }
}

/// A key press or release at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub at: f32,
    pub key: String,
    #[serde(default = "default_down")]
    pub down: bool,
}

fn default_down() -> bool {
    true
}

/// Timed key events, loaded from JSON for headless runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<KeyEvent>,
}

impl Script {
    /// Tap space straight away and leave the paddles idle
    pub fn press_start() -> Self {
        Self {
            events: vec![
                KeyEvent {
                    at: 0.0,
                    key: "Space".to_string(),
                    down: true,
                },
                KeyEvent {
                    at: 0.1,
                    key: "Space".to_string(),
                    down: false,
                },
            ],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let mut script: Script = serde_json::from_str(json)?;
        script
            .events
            .sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&json)?)
    }
}

/// Replays a [`Script`] through a [`KeyboardState`]
pub struct ScriptedInput {
    script: Script,
    cursor: usize,
    keyboard: KeyboardState,
}

impl ScriptedInput {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            cursor: 0,
            keyboard: KeyboardState::new(),
        }
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.script.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, now: f32) -> FrameInput {
        while let Some(event) = self.script.events.get(self.cursor) {
            if event.at > now {
                break;
            }
            if event.down {
                self.keyboard.key_down(&event.key);
            } else {
                self.keyboard.key_up(&event.key);
            }
            self.cursor += 1;
        }
        self.keyboard.frame_input()
    }
}
