//! Pointer events arriving at the overlay from the outside.

use glam::Vec2;

/// A pointer event in client coordinates.
///
/// The overlay translates these into overlay-local space itself, so hosts
/// forward raw client positions without any pre-transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down.
    Pressed(Vec2),

    /// Pointer moved while the primary button is held.
    Moved(Vec2),

    /// Primary button was released.
    Released(Vec2),
}
