//! Slide placement relative to the active slide.
//!
//! The resolver is a pure function of `(current, total, index)`. Distances
//! wrap around the ends of the collection and take the short way; when both
//! ways are equally long (even totals, distance `total / 2`) the slide is
//! placed on the next (right) side. A plain `index - current` difference
//! folded into the ring would leave `-total / 2` on the left for slides
//! before the active one; here that tie is moved to the right as well, so
//! every slide at half the ring sits on the same side whichever way it wraps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative placement of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Active,
    NearLeft,
    FarLeft,
    NearRight,
    FarRight,
    Hidden,
}

impl Position {
    /// CSS class the host applies for this placement.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::NearLeft => "prev-1",
            Self::FarLeft => "prev-2",
            Self::NearRight => "next-1",
            Self::FarRight => "next-2",
            Self::Hidden => "hidden",
        }
    }

    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    const fn from_offset(offset: isize) -> Self {
        match offset {
            0 => Self::Active,
            -1 => Self::NearLeft,
            -2 => Self::FarLeft,
            1 => Self::NearRight,
            2 => Self::FarRight,
            _ => Self::Hidden,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::NearLeft => "near-left",
            Self::FarLeft => "far-left",
            Self::NearRight => "near-right",
            Self::FarRight => "far-right",
            Self::Hidden => "hidden",
        };
        f.write_str(label)
    }
}

/// How many neighbors are shown on each side of the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// 3D coverflow: two neighbors per side.
    #[default]
    Coverflow,
    /// Stacked cards: one neighbor per side.
    CardStack,
}

impl Layout {
    pub const fn neighbor_slots(self) -> usize {
        match self {
            Self::Coverflow => 2,
            Self::CardStack => 1,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coverflow => "coverflow",
            Self::CardStack => "card-stack",
        })
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "coverflow" => Ok(Self::Coverflow),
            "card-stack" | "cardstack" => Ok(Self::CardStack),
            other => Err(format!("unknown layout: {other}")),
        }
    }
}

/// Shortest signed circular distance from `current` to `index`.
///
/// Ties at exactly half the ring resolve to the positive (next) side.
pub const fn circular_offset(current: usize, total: usize, index: usize) -> isize {
    if total == 0 {
        return 0;
    }
    let forward = (index % total + total - current % total) % total;
    if 2 * forward > total {
        forward as isize - total as isize
    } else {
        forward as isize
    }
}

/// Maps slide indices to [`Position`] labels for one layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionResolver {
    layout: Layout,
}

impl PositionResolver {
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Position of slide `index` when slide `current` is active.
    ///
    /// Indices outside `[0, total)` and an empty collection resolve to
    /// [`Position::Hidden`].
    pub const fn resolve(&self, current: usize, total: usize, index: usize) -> Position {
        if total == 0 || index >= total {
            return Position::Hidden;
        }
        let offset = circular_offset(current, total, index);
        if offset.unsigned_abs() > self.layout.neighbor_slots() {
            return Position::Hidden;
        }
        Position::from_offset(offset)
    }

    /// Positions for every slide, in collection order.
    pub fn resolve_all(&self, current: usize, total: usize) -> Vec<Position> {
        (0..total)
            .map(|index| self.resolve(current, total, index))
            .collect()
    }
}

/// Coverflow position of slide `index`.
pub const fn resolve(current: usize, total: usize, index: usize) -> Position {
    PositionResolver::new(Layout::Coverflow).resolve(current, total, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_slide_ring() {
        let positions = PositionResolver::default().resolve_all(3, 5);
        assert_eq!(
            positions,
            vec![
                Position::FarRight, // wraps: 4 -> 0 is two steps forward
                Position::FarLeft,
                Position::NearLeft,
                Position::Active,
                Position::NearRight,
            ]
        );
    }

    #[test]
    fn test_exactly_one_active_for_all_inputs() {
        for total in 1..=9 {
            for current in 0..total {
                let positions = PositionResolver::default().resolve_all(current, total);
                assert_eq!(positions.len(), total);
                assert_eq!(
                    positions.iter().filter(|p| **p == Position::Active).count(),
                    1,
                    "total={total} current={current}"
                );
                assert_eq!(positions[current], Position::Active);
            }
        }
    }

    #[test]
    fn test_even_tie_prefers_next_side() {
        // total 4: slide two away in either direction is the same distance.
        assert_eq!(resolve(0, 4, 2), Position::FarRight);
        assert_eq!(resolve(2, 4, 0), Position::FarRight);
        assert_eq!(resolve(1, 4, 3), Position::FarRight);

        // total 2: the other slide is always on the right.
        assert_eq!(resolve(0, 2, 1), Position::NearRight);
        assert_eq!(resolve(1, 2, 0), Position::NearRight);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(PositionResolver::default().resolve_all(0, 0).is_empty());
        assert_eq!(resolve(0, 0, 0), Position::Hidden);
        assert_eq!(resolve(0, 1, 0), Position::Active);
        assert_eq!(resolve(0, 3, 7), Position::Hidden);
    }

    #[test]
    fn test_far_slides_are_hidden() {
        let positions = PositionResolver::default().resolve_all(0, 8);
        assert_eq!(positions[3], Position::Hidden);
        assert_eq!(positions[4], Position::Hidden);
        assert_eq!(positions[5], Position::Hidden);
        assert_eq!(positions[6], Position::FarLeft);
        assert_eq!(positions[7], Position::NearLeft);
    }

    #[test]
    fn test_card_stack_shows_one_neighbor() {
        let resolver = PositionResolver::new(Layout::CardStack);
        assert_eq!(
            resolver.resolve_all(0, 5),
            vec![
                Position::Active,
                Position::NearRight,
                Position::Hidden,
                Position::Hidden,
                Position::NearLeft,
            ]
        );
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Position::NearLeft.css_class(), "prev-1");
        assert_eq!(Position::FarRight.css_class(), "next-2");
        assert_eq!(Position::FarLeft.to_string(), "far-left");
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("card_stack".parse::<Layout>(), Ok(Layout::CardStack));
        assert_eq!("Coverflow".parse::<Layout>(), Ok(Layout::Coverflow));
        assert!("carousel".parse::<Layout>().is_err());
        assert_eq!(Layout::CardStack.to_string(), "card-stack");
        assert_eq!(
            Layout::CardStack.to_string().parse::<Layout>(),
            Ok(Layout::CardStack)
        );
    }
}
