//! Axis-aligned rectangle overlap
//!
//! Everything that can collide is an axis-aligned box. Touching edges are
//! not a hit: overlap needs a strictly positive area.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        intervals_overlap(self.x, self.right(), other.x, other.right())
            && intervals_overlap(self.y, self.bottom(), other.y, other.bottom())
    }
}

/// Open-interval overlap: (a_min, a_max) and (b_min, b_max) share interior points
#[inline]
pub fn intervals_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && a_max > b_min
}

/// Index of the first rect in `others` that overlaps `subject`
pub fn first_hit<'a>(subject: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> Option<usize> {
    others.into_iter().position(|r| subject.overlaps(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_first_hit_order() {
        let actor = Rect::new(120.0, 260.0, 30.0, 30.0);
        let obstacles = [
            Rect::new(400.0, 250.0, 30.0, 40.0),
            Rect::new(140.0, 250.0, 30.0, 40.0),
            Rect::new(130.0, 250.0, 30.0, 40.0),
        ];
        assert_eq!(first_hit(&actor, &obstacles), Some(1));
        assert_eq!(first_hit(&actor, &obstacles[..1]), None);
    }

    proptest! {
        #[test]
        fn prop_touching_rects_never_overlap(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
            w2 in 1.0f32..100.0,
            h2 in 1.0f32..100.0,
            slide in 0.0f32..1.0,
        ) {
            let a = Rect::new(x, y, w, h);
            // Flush against the right edge, sliding vertically along it
            let right = Rect::new(a.right(), y - h2 * slide, w2, h2);
            // Flush against the bottom edge
            let below = Rect::new(x - w2 * slide, a.bottom(), w2, h2);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
            prop_assert!(!right.overlaps(&a));
            prop_assert!(!below.overlaps(&a));
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            w in 1.0f32..50.0, h in 1.0f32..50.0,
        ) {
            let a = Rect::new(ax, ay, w, h);
            let b = Rect::new(bx, by, h, w);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
