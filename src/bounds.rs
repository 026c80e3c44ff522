//! Axis-aligned rectangles for viewports and boundary policies.

use glam::Vec2;

/// Axis-aligned rectangle in screen space (Y grows downward).
///
/// Containment is inclusive on every edge. The constructors always produce
/// `min <= max`; swapped corners and negative sizes are normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle spanning two opposite corners, given in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Rectangle from a left/top corner and a size. A negative size extends
    /// left or up from the corner.
    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        let corner = Vec2::new(left, top);
        Self::new(corner, corner + Vec2::new(width, height))
    }

    /// Rectangle anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::from_origin_size(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test. NaN coordinates are never inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Inelastic wall collision: clamp `position` into the rectangle and
    /// zero the velocity component on every axis that was out of bounds.
    ///
    /// Never panics, even for a hand-built `Rect` with `min > max` or NaN
    /// edges.
    pub fn confine(&self, position: &mut Vec2, velocity: &mut Vec2) {
        let clamped = position.max(self.min).min(self.max);
        if clamped.x != position.x {
            position.x = clamped.x;
            velocity.x = 0.0;
        }
        if clamped.y != position.y {
            position.y = clamped.y;
            velocity.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::from_size(200.0, 100.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(200.0, 100.0)));
        assert!(!r.contains(Vec2::new(200.1, 50.0)));
        assert!(!r.contains(Vec2::new(f32::NAN, 50.0)));
    }

    #[test]
    fn test_confine_zeroes_offending_axis() {
        let r = Rect::from_size(800.0, 600.0);
        let mut pos = Vec2::new(850.0, 300.0);
        let mut vel = Vec2::new(40.0, -5.0);
        r.confine(&mut pos, &mut vel);
        assert_eq!(pos, Vec2::new(800.0, 300.0));
        assert_eq!(vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_inverted_corners_are_normalized() {
        let r = Rect::from_origin_size(0.0, 0.0, -10.0, 10.0);
        assert_eq!(r.min, Vec2::new(-10.0, 0.0));
        assert_eq!(r.max, Vec2::new(0.0, 10.0));
        assert_eq!(r.width(), 10.0);

        let r = Rect::new(Vec2::new(50.0, 40.0), Vec2::new(10.0, 20.0));
        assert_eq!(r, Rect::from_origin_size(10.0, 20.0, 40.0, 20.0));

        let mut pos = Vec2::new(5.0, 5.0);
        let mut vel = Vec2::new(3.0, 4.0);
        Rect::from_origin_size(0.0, 0.0, -10.0, 10.0).confine(&mut pos, &mut vel);
        assert_eq!(pos, Vec2::new(0.0, 5.0));
        assert_eq!(vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_confine_degenerate_rect_does_not_panic() {
        let inverted = Rect {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::new(0.0, 0.0),
        };
        let mut pos = Vec2::new(5.0, 5.0);
        let mut vel = Vec2::ONE;
        inverted.confine(&mut pos, &mut vel);
        assert!(pos.is_finite());

        let nan_edges = Rect {
            min: Vec2::splat(f32::NAN),
            max: Vec2::new(100.0, f32::NAN),
        };
        let mut pos = Vec2::new(150.0, 5.0);
        let mut vel = Vec2::ONE;
        nan_edges.confine(&mut pos, &mut vel);
        assert_eq!(pos, Vec2::new(100.0, 5.0));
        assert_eq!(vel, Vec2::new(0.0, 1.0));
    }
}
