//! First-last-invert-play math for moving a flag between two render
//! locations (intro tile -> group card) while keeping it the same object.

/// Cross-render identity of a team's flag.
pub fn flag_key(team_id: &str) -> String {
    format!("flag-{team_id}")
}

/// Viewport-relative box of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Transform that makes an element laid out at `last` appear at `first`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTransform {
    pub dx: f64,
    pub dy: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

const EPSILON: f64 = 0.5;

impl FlipTransform {
    /// `None` when the element did not visibly move or either box is empty.
    pub fn between(first: Rect, last: Rect) -> Option<Self> {
        if last.width <= 0.0 || last.height <= 0.0 || first.width <= 0.0 || first.height <= 0.0 {
            return None;
        }
        let transform = Self {
            dx: first.left - last.left,
            dy: first.top - last.top,
            scale_x: first.width / last.width,
            scale_y: first.height / last.height,
        };
        if transform.dx.abs() < EPSILON
            && transform.dy.abs() < EPSILON
            && (first.width - last.width).abs() < EPSILON
            && (first.height - last.height).abs() < EPSILON
        {
            return None;
        }
        Some(transform)
    }

    /// CSS transform for the inverted start state. Requires
    /// `transform-origin: top left` on the element.
    pub fn css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}, {:.4})",
            self.dx, self.dy, self.scale_x, self.scale_y
        )
    }
}
