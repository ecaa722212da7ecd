//! Recorded pointer-event scripts.
//!
//! A script is a JSON array of events tagged by `type`:
//!
//! ```json
//! [
//!   {"type": "pointer_down", "x": 400, "y": 300, "modifiers": {"shift": true}},
//!   {"type": "pointer_move", "x": 400, "y": 300, "modifiers": {"shift": true}},
//!   {"type": "pointer_move", "x": 460, "y": 250, "modifiers": {"shift": true}},
//!   {"type": "pointer_up", "x": 460, "y": 250, "modifiers": {"shift": true}},
//!   {"type": "calculate_area"}
//! ]
//! ```
//!
//! `button` defaults to `primary` and missing modifier keys default to released.

use std::io::Read;
use std::path::Path;

use globe::camera::ScreenPoint;
use globe::input::{Button, Modifiers};
use serde::{Deserialize, Serialize};

use crate::ReplayError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Click {
        x: f64,
        y: f64,
    },
    CalculateArea,
}

impl ScriptEvent {
    /// Screen position of the event, if it has one.
    pub fn position(&self) -> Option<ScreenPoint> {
        match *self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::Click { x, y } => Some(ScreenPoint::new(x, y)),
            Self::CalculateArea => None,
        }
    }
}

pub fn parse(json: &str) -> Result<Vec<ScriptEvent>, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a script from `path`, or from stdin when no path is given.
pub fn load(path: Option<&Path>) -> Result<Vec<ScriptEvent>, ReplayError> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse(&json)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
