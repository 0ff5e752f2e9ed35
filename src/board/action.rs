//! Actions: a piece moving from a source cell to a destination cell.

use std::fmt;

/// Relative offsets a piece may move by: unit steps, distance-2 diagonal and
/// straight jumps, and distance-3 straight jumps.
pub const MOVE_VECTORS: [(i32, i32); 18] = [
    (-1, -1),
    (-2, -2),
    (0, -1),
    (0, -2),
    (1, -1),
    (2, -2),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (-2, 2),
    (0, 1),
    (0, 2),
    (1, 1),
    (2, 2),
    (0, -3),
    (0, 3),
    (-3, 0),
    (3, 0),
];

/// The 8-neighbourhood: cells that get infected around a destination, and
/// the cells counted by the grouping score.
pub const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A move of a piece from `(src_x, src_y)` to `(dst_x, dst_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub src_x: i32,
    pub src_y: i32,
    pub dst_x: i32,
    pub dst_y: i32,
}

impl Action {
    pub fn new(src_x: i32, src_y: i32, dst_x: i32, dst_y: i32) -> Self {
        Action { src_x, src_y, dst_x, dst_y }
    }

    /// Returns true if the displacement exceeds one cell on either axis.
    /// Jumps vacate the source; slides leave the mover's piece behind.
    pub fn is_jump(&self) -> bool {
        (self.dst_x - self.src_x).abs() > 1 || (self.dst_y - self.src_y).abs() > 1
    }
}

/// Formats as the protocol reply `srcX:srcY:dstX:dstY:`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}:", self.src_x, self.src_y, self.dst_x, self.dst_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_trailing_colon() {
        assert_eq!(Action::new(0, 1, 2, 3).to_string(), "0:1:2:3:");
    }

    #[test]
    fn unit_steps_are_slides() {
        for &(dx, dy) in NEIGHBORS.iter() {
            assert!(!Action::new(3, 3, 3 + dx, 3 + dy).is_jump());
        }
    }

    #[test]
    fn long_vectors_are_jumps() {
        let jumps = MOVE_VECTORS
            .iter()
            .filter(|&&(dx, dy)| Action::new(3, 3, 3 + dx, 3 + dy).is_jump())
            .count();
        assert_eq!(jumps, 10);
    }

    #[test]
    fn move_vectors_are_distinct() {
        for (i, a) in MOVE_VECTORS.iter().enumerate() {
            for b in &MOVE_VECTORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
