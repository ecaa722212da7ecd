//! Input model: modifier keys, mouse buttons, the drag modifier, and the
//! rectangle-drawing state machine states.
//!
//! `Modifiers` and `Button` describe a raw pointer event as the host saw it.
//! `DragModifier` names which held key turns a left-drag into rectangle
//! drawing instead of a camera gesture. `InteractionState` is the phase of the
//! drag currently being tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Only Shift held.
    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// The held key that gates rectangle drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragModifier {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl DragModifier {
    /// Whether this modifier is held in `modifiers`.
    #[must_use]
    pub fn is_held(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Ctrl => modifiers.ctrl,
            Self::Alt => modifiers.alt,
            Self::Meta => modifiers.meta,
        }
    }
}

/// Error returned when parsing an unknown [`DragModifier`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drag modifier '{0}' (expected shift, ctrl, alt or meta)")]
pub struct ParseDragModifierError(pub String);

impl FromStr for DragModifier {
    type Err = ParseDragModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shift" => Ok(Self::Shift),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            "meta" | "cmd" | "command" => Ok(Self::Meta),
            _ => Err(ParseDragModifierError(s.to_string())),
        }
    }
}

impl fmt::Display for DragModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Meta => "meta",
        };
        f.write_str(name)
    }
}

/// Phase of the rectangle-drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No drag in progress; waiting for a modified pointer-down.
    #[default]
    Idle,
    /// Pointer is down with the drag modifier; the first corner is not yet known.
    DragStarted,
    /// The first corner is captured; each further move reshapes the rectangle.
    DragActive {
        /// Geographic position of the first corner.
        first: GeoPoint,
    },
}

impl InteractionState {
    /// Whether a drag is in progress (pointer down with the drag modifier).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
