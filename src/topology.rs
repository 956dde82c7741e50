//! Index patterns for each primitive [Mode].
//!
//! Patterns are data: a template of [Slot]s per mode, with [Slot::Max] standing in for the last
//! position index of whichever primitive the pattern is applied to.

use crate::{MeshPrimitive, Mode};

/// One entry of an index pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Fixed(u32),
    /// The last valid position index; the restart value when applied to a restart primitive.
    Max,
}

impl Slot {
    #[inline]
    pub fn resolve(self, max: u32) -> u32 {
        match self {
            Slot::Fixed(i) => i,
            Slot::Max => max,
        }
    }
}

use Slot::{Fixed, Max};

/// Index patterns in [Mode] order.
static PATTERNS: [&[Slot]; 7] = [
    // POINTS
    &[Fixed(0), Fixed(1), Max],
    // LINES
    &[Fixed(0), Fixed(1), Fixed(1), Max, Max, Fixed(0)],
    // LINE_LOOP
    &[Fixed(0), Fixed(1), Max],
    // LINE_STRIP
    &[Fixed(0), Fixed(1), Max, Fixed(0)],
    // TRIANGLES
    &[Fixed(0), Fixed(1), Max],
    // TRIANGLE_STRIP
    &[Fixed(0), Fixed(1), Max],
    // TRIANGLE_FAN
    &[Fixed(0), Fixed(1), Max],
];

impl Mode {
    /// The index pattern used by restart models drawn with this mode.
    #[inline]
    pub fn pattern(self) -> &'static [Slot] {
        PATTERNS[self as usize]
    }

    /// Resolve [pattern](Self::pattern) against a maximum index.
    pub fn indices(self, max: u32) -> Vec<u32> {
        self.pattern().iter().map(|s| s.resolve(max)).collect()
    }
}

/// Set the mode of `primitive` and replace its indices with the pattern for `mode`.
pub fn apply_topology(primitive: &mut MeshPrimitive, mode: Mode, max: u32) {
    primitive.mode = mode;
    primitive.indices = mode.indices(max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns() {
        assert_eq!(Mode::Points.indices(9), vec![0, 1, 9]);
        assert_eq!(Mode::Lines.indices(9), vec![0, 1, 1, 9, 9, 0]);
        assert_eq!(Mode::LineLoop.indices(9), vec![0, 1, 9]);
        assert_eq!(Mode::LineStrip.indices(9), vec![0, 1, 9, 0]);
        assert_eq!(Mode::Triangles.indices(9), vec![0, 1, 9]);
        assert_eq!(Mode::TriangleStrip.indices(9), vec![0, 1, 9]);
        assert_eq!(Mode::TriangleFan.indices(9), vec![0, 1, 9]);
    }

    #[test]
    fn every_pattern_uses_max() {
        for mode in Mode::ALL {
            let pattern = mode.pattern();
            assert!((3..=6).contains(&pattern.len()), "{mode}");
            assert!(pattern.contains(&Slot::Max), "{mode}");
        }
    }

    #[test]
    fn apply() {
        let mut prim = MeshPrimitive::default();
        apply_topology(&mut prim, Mode::LineStrip, 254);
        assert_eq!(prim.mode, Mode::LineStrip);
        assert_eq!(prim.indices, vec![0, 1, 254, 0]);
    }
}
