//! Fixed-length tile count vectors.
//!
//! `TileCount` is the unit moved by every ledger operation: six non-negative
//! counts, one per [`TileColor`]. Arithmetic is explicit and checked; the
//! ledger relies on `checked_sub` failing to surface handler defects instead
//! of wrapping.

use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Index};

use super::color::TileColor;

/// Counts of tiles per color, in column order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCount([u8; 6]);

impl TileCount {
    /// The empty count.
    pub const EMPTY: TileCount = TileCount([0; 6]);

    /// Create from raw per-color counts.
    #[must_use]
    pub const fn new(counts: [u8; 6]) -> Self {
        Self(counts)
    }

    /// The same count for every color.
    #[must_use]
    pub const fn uniform(n: u8) -> Self {
        Self([n; 6])
    }

    /// `n` tiles of a single color.
    #[must_use]
    pub fn single(color: TileColor, n: u8) -> Self {
        let mut counts = [0; 6];
        counts[color.index()] = n;
        Self(counts)
    }

    /// Add `n` tiles of `color` (builder style).
    #[must_use]
    pub fn with(mut self, color: TileColor, n: u8) -> Self {
        self.0[color.index()] = self.0[color.index()].saturating_add(n);
        self
    }

    /// Count for one color.
    #[must_use]
    pub fn get(&self, color: TileColor) -> u8 {
        self.0[color.index()]
    }

    /// Total tiles across all colors.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&n| u16::from(n)).sum()
    }

    /// True if no color has any tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Per-color entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (TileColor, u8)> + '_ {
        TileColor::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Component-wise addition; `None` on overflow of any entry.
    #[must_use]
    pub fn checked_add(&self, other: &TileCount) -> Option<TileCount> {
        let mut out = [0; 6];
        for i in 0..6 {
            out[i] = self.0[i].checked_add(other.0[i])?;
        }
        Some(TileCount(out))
    }

    /// Component-wise subtraction; `None` if any entry would go negative.
    #[must_use]
    pub fn checked_sub(&self, other: &TileCount) -> Option<TileCount> {
        let mut out = [0; 6];
        for i in 0..6 {
            out[i] = self.0[i].checked_sub(other.0[i])?;
        }
        Some(TileCount(out))
    }

    /// First color whose entry cannot give up `other`'s entry, if any.
    ///
    /// Used to build precise underflow diagnostics.
    #[must_use]
    pub fn first_deficit(&self, other: &TileCount) -> Option<TileColor> {
        TileColor::ALL
            .into_iter()
            .find(|&c| self.get(c) < other.get(c))
    }
}

impl Index<TileColor> for TileCount {
    type Output = u8;

    fn index(&self, color: TileColor) -> &u8 {
        &self.0[color.index()]
    }
}

/// Saturating accumulation, for tallies that sum disjoint moves.
///
/// Ledger mutations never use this path; they go through the checked forms.
impl AddAssign<&TileCount> for TileCount {
    fn add_assign(&mut self, rhs: &TileCount) {
        for i in 0..6 {
            self.0[i] = self.0[i].saturating_add(rhs.0[i]);
        }
    }
}

impl std::fmt::Display for TileCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        f.write_str("[")?;
        for (color, n) in self.iter() {
            if n == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{n} {color}")?;
            first = false;
        }
        if first {
            f.write_str("empty")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_get() {
        let count = TileCount::single(TileColor::Red, 3);
        assert_eq!(count.get(TileColor::Red), 3);
        assert_eq!(count.get(TileColor::Blue), 0);
        assert_eq!(count.total(), 3);
    }

    #[test]
    fn test_with_builder() {
        let count = TileCount::EMPTY
            .with(TileColor::Orange, 2)
            .with(TileColor::Purple, 1);
        assert_eq!(count.get(TileColor::Orange), 2);
        assert_eq!(count.get(TileColor::Purple), 1);
        assert_eq!(count.total(), 3);
    }

    #[test]
    fn test_uniform_totals() {
        assert_eq!(TileCount::uniform(22).total(), 132);
        assert!(!TileCount::uniform(22).is_empty());
        assert!(TileCount::EMPTY.is_empty());
    }

    #[test]
    fn test_checked_sub_refuses_deficit() {
        let a = TileCount::single(TileColor::Green, 2);
        let b = TileCount::single(TileColor::Green, 3);
        assert!(a.checked_sub(&b).is_none());
        assert_eq!(
            b.checked_sub(&a),
            Some(TileCount::single(TileColor::Green, 1))
        );
    }

    #[test]
    fn test_first_deficit_names_the_color() {
        let a = TileCount::single(TileColor::Orange, 1);
        let b = TileCount::new([1, 0, 4, 0, 0, 0]);
        assert_eq!(a.first_deficit(&b), Some(TileColor::Blue));
        assert_eq!(b.first_deficit(&a), None);
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut tally = TileCount::EMPTY;
        tally += &TileCount::single(TileColor::Red, 2);
        tally += &TileCount::single(TileColor::Red, 1).with(TileColor::Blue, 4);
        assert_eq!(tally.get(TileColor::Red), 3);
        assert_eq!(tally.get(TileColor::Blue), 4);
    }

    #[test]
    fn test_display_skips_zero_entries() {
        let count = TileCount::single(TileColor::Yellow, 2).with(TileColor::Red, 1);
        assert_eq!(format!("{count}"), "[1 Red, 2 Yellow]");
        assert_eq!(format!("{}", TileCount::EMPTY), "[empty]");
    }

    #[test]
    fn test_serialization_round_trip() {
        let count = TileCount::new([1, 2, 3, 4, 5, 6]);
        let json = serde_json::to_string(&count).unwrap();
        let back: TileCount = serde_json::from_str(&json).unwrap();
        assert_eq!(count, back);
    }
}
