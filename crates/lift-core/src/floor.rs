//! Building levels and travel arithmetic.

use std::fmt;

use crate::call::Direction;

/// A building level, counted from the ground up (`Floor(0)` = ground).
///
/// Unlike the opaque ID wrappers in [`ids`][crate::ids], floors carry travel
/// arithmetic: cars step one floor per tick, and the dispatcher ranks cars by
/// floor distance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Absolute distance in floors to `other`.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Direction of travel from `self` toward `other`, or `None` if equal.
    #[inline]
    pub fn direction_to(self, other: Floor) -> Option<Direction> {
        use std::cmp::Ordering::*;
        match self.0.cmp(&other.0) {
            Less    => Some(Direction::Up),
            Greater => Some(Direction::Down),
            Equal   => None,
        }
    }

    /// The floor one step from `self` toward `other` (one floor per tick).
    ///
    /// Returns `self` unchanged when the floors are equal.
    #[inline]
    pub fn step_toward(self, other: Floor) -> Floor {
        match self.direction_to(other) {
            Some(Direction::Up)   => Floor(self.0 + 1),
            Some(Direction::Down) => Floor(self.0 - 1),
            None                  => self,
        }
    }

    /// `true` when `other` lies in direction `dir` from `self` (inclusive).
    ///
    /// Used by the dispatcher's en-route test: a car committed upward passes
    /// through every floor at or above its current one.
    #[inline]
    pub fn is_toward(self, other: Floor, dir: Direction) -> bool {
        match dir {
            Direction::Up   => other >= self,
            Direction::Down => other <= self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}
