//! Drive an [`EngineCore`] through a script while a renderer task draws
//! every published selection snapshot.

use globe::camera::{Camera, ScreenPoint};
use globe::ellipsoid::Ellipsoid;
use globe::engine::{Action, EngineCore};
use globe::overlay::overlay_quad;
use globe::selector::Selection;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ReplayError;
use crate::config::ReplayConfig;
use crate::script::ScriptEvent;

/// What a replay produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    /// Area messages, in request order.
    pub messages: Vec<String>,
    /// Cursor the host would be showing after the last event.
    pub cursor: Option<String>,
    /// Final selection snapshot.
    pub selection: Selection,
    /// Snapshots the overlay renderer drew.
    pub frames: usize,
}

pub async fn run(config: &ReplayConfig, events: &[ScriptEvent]) -> Result<ReplayOutcome, ReplayError> {
    let mut core = EngineCore::new(config.selector, config.camera(), config.ellipsoid);
    let renderer = spawn_overlay_renderer(core.subscribe(), core.camera, core.ellipsoid());

    let mut messages = Vec::new();
    let mut cursor = None;
    for (index, event) in events.iter().enumerate() {
        tracing::trace!(index, ?event, position = ?event.position(), "event");
        for action in apply(&mut core, event) {
            match action {
                Action::ShowMessage(message) => {
                    tracing::info!(index, %message, "area requested");
                    messages.push(message);
                }
                Action::SetCursor(name) => cursor = Some(name),
                Action::SelectionChanged(selection) => {
                    tracing::debug!(index, visible = selection.visible, rectangle = ?selection.rectangle, "selection changed");
                }
                Action::RenderNeeded => {}
            }
        }
        // Let the renderer observe this event's snapshot before the next one.
        tokio::task::yield_now().await;
    }

    let selection = core.selection();
    // Dropping the engine closes the channel and ends the renderer.
    drop(core);
    let frames = renderer.await?;

    Ok(ReplayOutcome { messages, cursor, selection, frames })
}

fn apply(core: &mut EngineCore, event: &ScriptEvent) -> Vec<Action> {
    match *event {
        ScriptEvent::PointerDown { x, y, button, modifiers } => {
            core.on_pointer_down(ScreenPoint::new(x, y), button, modifiers)
        }
        ScriptEvent::PointerMove { x, y, modifiers } => core.on_pointer_move(ScreenPoint::new(x, y), modifiers),
        ScriptEvent::PointerUp { x, y, button, modifiers } => {
            core.on_pointer_up(ScreenPoint::new(x, y), button, modifiers)
        }
        ScriptEvent::Click { x, y } => core.on_click(ScreenPoint::new(x, y)),
        ScriptEvent::CalculateArea => vec![core.calculate_area()],
    }
}

/// Spawn a task that projects each new selection snapshot into an overlay
/// quad. Returns the number of snapshots drawn once the sender is dropped.
pub fn spawn_overlay_renderer(
    mut rx: watch::Receiver<Selection>,
    camera: Camera,
    ellipsoid: Ellipsoid,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut frames = 0;
        while rx.changed().await.is_ok() {
            let selection = *rx.borrow_and_update();
            frames += 1;
            match overlay_quad(&selection, &camera, &ellipsoid) {
                Some(quad) => tracing::info!(
                    frame = frames,
                    corners = ?quad.corners,
                    fill = %quad.fill.to_css(),
                    screen_area = quad.screen_area(),
                    "overlay drawn"
                ),
                None => tracing::info!(frame = frames, "overlay cleared"),
            }
        }
        frames
    })
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
