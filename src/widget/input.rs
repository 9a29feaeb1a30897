// Pointer input normalisation: mouse and touch events both reduce to a
// screen-space point. Only the first contact point of a touch is used.

use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerPhase {
    /// Map a DOM event type onto a stroke phase.
    pub(crate) fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "mousedown" | "touchstart" => Some(PointerPhase::Down),
            "mousemove" | "touchmove" => Some(PointerPhase::Move),
            "mouseup" | "mouseleave" | "touchend" | "touchcancel" => Some(PointerPhase::Up),
            _ => None,
        }
    }
}

/// Event types the surface listens to.
pub(crate) const POINTER_EVENTS: [&str; 8] = [
    "mousedown",
    "mousemove",
    "mouseup",
    "mouseleave",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
];

/// Screen-space position of a mouse event, or of the first touch.
/// `touchend` carries no remaining touches and yields `None`.
pub(crate) fn client_point(evt: &Event) -> Option<Point> {
    // Decide by event type: desktop browsers may not define `TouchEvent` at
    // all, so an instanceof check is not safe there.
    if evt.type_().starts_with("touch") {
        let te = evt.unchecked_ref::<TouchEvent>();
        let touch = te.touches().item(0)?;
        return Some(Point::new(touch.client_x() as f64, touch.client_y() as f64));
    }
    let me = evt.dyn_ref::<MouseEvent>()?;
    Some(Point::new(me.client_x() as f64, me.client_y() as f64))
}
