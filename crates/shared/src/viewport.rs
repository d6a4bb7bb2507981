//! Pan/zoom viewport core.
//!
//! The viewer renders the map image with
//! `translate(position) scale(base_scale * scale)` where `base_scale` fits
//! the image to its container and `scale` is the user zoom multiplier.
//! Everything here is plain arithmetic on `f64` so it can be unit tested
//! without a DOM.
//!
//! Coordinate convention: cursor / pinch-midpoint coordinates are relative to
//! the *container center*, not its top-left corner, because the image wrapper
//! is flex-centered and transformed about its own center.

/// Scale comparison tolerance for "zoom did nothing" checks.
const SCALE_EPSILON: f64 = 1e-9;

/// Zoom limits and step size. Immutable for the lifetime of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub scale_step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            scale_step: 0.25,
        }
    }
}

/// Active pointer gesture. A touch sequence is either a one-finger drag or a
/// two-finger pinch for its whole lifetime; the variants make a simultaneous
/// drag-and-pinch unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// `anchor` is `pointer - position` at drag start, so that
    /// `position = pointer - anchor` during the drag.
    Dragging { anchor: (f64, f64) },
    /// `last_distance` is the inter-finger distance (px) at the previous
    /// touch event. Always > 0 while pinching.
    Pinching { last_distance: f64 },
}

/// User-controlled transform state: zoom multiplier, pan offset from
/// centered, and the in-flight gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub position: (f64, f64),
    pub gesture: Gesture,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position: (0.0, 0.0),
            gesture: Gesture::Idle,
        }
    }
}

/// Base scale that makes an image exactly fit (contain) inside a container.
///
/// Returns `None` until both the container and the image have positive
/// measured dimensions; callers skip the refit rather than divide by zero.
pub fn fit_scale(container_w: f64, container_h: f64, image_w: f64, image_h: f64) -> Option<f64> {
    if container_w <= 0.0 || container_h <= 0.0 || image_w <= 0.0 || image_h <= 0.0 {
        return None;
    }
    Some((container_w / image_w).min(container_h / image_h))
}

/// Compute the pan offset that keeps `anchor` over the same content point
/// when the effective scale changes from `old_scale` to `new_scale`.
///
/// `anchor` and `position` are center-relative container pixels; the scales
/// are *effective* scales (`base_scale * user scale`).
pub fn anchored_position(
    anchor: (f64, f64),
    position: (f64, f64),
    old_scale: f64,
    new_scale: f64,
) -> (f64, f64) {
    let content_x = (anchor.0 - position.0) / old_scale;
    let content_y = (anchor.1 - position.1) / old_scale;
    (
        anchor.0 - content_x * new_scale,
        anchor.1 - content_y * new_scale,
    )
}

/// Euclidean distance between two points.
pub fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of two points.
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

impl Viewport {
    /// Back to identity: scale 1, centered, no gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// User zoom as a whole percentage for the controls label.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn at_min(&self, config: &ZoomConfig) -> bool {
        self.scale <= config.min_scale
    }

    pub fn at_max(&self, config: &ZoomConfig) -> bool {
        self.scale >= config.max_scale
    }

    /// Wheel zoom: one `scale_step` in or out, anchored at the cursor
    /// (center-relative). A step that clamps to the current scale is a
    /// no-op and leaves the state untouched. Returns whether anything
    /// changed.
    pub fn wheel_zoom(
        &mut self,
        config: &ZoomConfig,
        base_scale: f64,
        zoom_in: bool,
        cursor: (f64, f64),
    ) -> bool {
        let delta = if zoom_in {
            config.scale_step
        } else {
            -config.scale_step
        };
        let new_scale = (self.scale + delta).clamp(config.min_scale, config.max_scale);
        if (new_scale - self.scale).abs() < SCALE_EPSILON {
            return false;
        }
        self.position = anchored_position(
            cursor,
            self.position,
            base_scale * self.scale,
            base_scale * new_scale,
        );
        self.scale = new_scale;
        true
    }

    /// Begin a drag (primary mouse button or single touch). The anchor is
    /// chosen so that `drag_to` is a pure translation.
    pub fn begin_drag(&mut self, pointer: (f64, f64)) {
        self.gesture = Gesture::Dragging {
            anchor: (pointer.0 - self.position.0, pointer.1 - self.position.1),
        };
    }

    /// Follow the pointer while dragging. Ignored in any other state.
    pub fn drag_to(&mut self, pointer: (f64, f64)) {
        if let Gesture::Dragging { anchor } = self.gesture {
            self.position = (pointer.0 - anchor.0, pointer.1 - anchor.1);
        }
    }

    /// Pointer released or left the container. Only ends a drag — a pinch
    /// survives mouse events.
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.gesture = Gesture::Idle;
        }
    }

    /// Two fingers down: record their distance and stop any drag. Zero or
    /// negative distances (coincident fingers) leave the gesture idle.
    pub fn begin_pinch(&mut self, distance: f64) {
        self.gesture = if distance > 0.0 {
            Gesture::Pinching {
                last_distance: distance,
            }
        } else {
            Gesture::Idle
        };
    }

    /// Two-finger move: zoom by the ratio of the new inter-finger distance
    /// to the previous one, anchored at the finger midpoint
    /// (center-relative). The distance is updated every move so the zoom is
    /// incremental rather than absolute from gesture start.
    pub fn pinch_to(
        &mut self,
        config: &ZoomConfig,
        base_scale: f64,
        new_distance: f64,
        center: (f64, f64),
    ) {
        let Gesture::Pinching { last_distance } = self.gesture else {
            return;
        };
        if last_distance <= 0.0 || new_distance <= 0.0 {
            return;
        }

        let ratio = new_distance / last_distance;
        let new_scale = (self.scale * ratio).clamp(config.min_scale, config.max_scale);
        if (new_scale - self.scale).abs() >= SCALE_EPSILON {
            self.position = anchored_position(
                center,
                self.position,
                base_scale * self.scale,
                base_scale * new_scale,
            );
            self.scale = new_scale;
        }
        self.gesture = Gesture::Pinching {
            last_distance: new_distance,
        };
    }

    /// Any finger lifted: the whole touch gesture is over, whether it was a
    /// drag, a pinch, or some interrupted in-between.
    pub fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Button zoom: step in (`+1`) or out (`-1`) and re-center. Unlike wheel
    /// and pinch zoom there is no pointer to anchor to, so the position is
    /// always reset to `(0, 0)`.
    pub fn step_zoom(&mut self, config: &ZoomConfig, direction: i8) {
        let delta = config.scale_step * f64::from(direction.signum());
        self.scale = (self.scale + delta).clamp(config.min_scale, config.max_scale);
        self.position = (0.0, 0.0);
    }
}
