//! Basic value types for both coordinate spaces. See the parent module
//! documentation for a description of cell space vs zone space.

use crate::util::saturate;
use derive_more::{Add, AddAssign, Display, From, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, ops};

/// The address of a single cell. The meaning of `x` and `y` depends on the
/// grid topology (e.g. on a horizontal hex grid `y` is the row and `x` the
/// position within that row). Points are compared structurally and have no
/// ordering.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", x, y)]
pub struct CellPoint {
    pub x: i32,
    pub y: i32,
}

impl CellPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A point in zone (world) space, rounded to integer units.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct ZonePoint {
    pub x: i32,
    pub y: i32,
}

impl ZonePoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A displacement in zone space. Movement calculations return these, and
/// [ZoneVector::ZERO] means "this input doesn't move anything".
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", x, y)]
pub struct ZoneVector {
    pub x: i32,
    pub y: i32,
}

impl ZoneVector {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

// Zone space ends at the i32 limits, so point math clamps there

impl ops::Add<ZoneVector> for ZonePoint {
    type Output = ZonePoint;

    fn add(self, rhs: ZoneVector) -> Self::Output {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl ops::Sub<ZonePoint> for ZonePoint {
    type Output = ZoneVector;

    fn sub(self, rhs: ZonePoint) -> Self::Output {
        ZoneVector::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
        )
    }
}

/// An axis-aligned rectangle in zone space. `(x, y)` is the top-left corner,
/// and the rectangle covers `[x, x + width)` by `[y, y + height)`.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[display(fmt = "{}x{} at ({}, {})", width, height, x, y)]
pub struct ZoneRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ZoneRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the rectangle that reaches `half_width` and `half_height` units
    /// out from `center` in every direction, inclusive. The center is always
    /// the middle unit, so both dimensions come out odd.
    pub fn around(center: ZonePoint, half_width: i32, half_height: i32) -> Self {
        let origin = center + ZoneVector::new(-half_width, -half_height);
        Self::new(
            origin.x,
            origin.y,
            saturate(half_width as i64 * 2 + 1),
            saturate(half_height as i64 * 2 + 1),
        )
    }

    /// The top-left corner
    pub fn origin(&self) -> ZonePoint {
        ZonePoint::new(self.x, self.y)
    }

    /// Exclusive right edge, which can sit past `i32::MAX`
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge, which can sit past `i32::MAX`
    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, point: ZonePoint) -> bool {
        point.x >= self.x
            && (point.x as i64) < self.right()
            && point.y >= self.y
            && (point.y as i64) < self.bottom()
    }

    /// Get the smallest rectangle that covers both this one and `other`
    pub fn union(&self, other: &Self) -> Self {
        let x = cmp::min(self.x, other.x);
        let y = cmp::min(self.y, other.y);
        let right = cmp::max(self.right(), other.right());
        let bottom = cmp::max(self.bottom(), other.bottom());
        Self::new(x, y, saturate(right - x as i64), saturate(bottom - y as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_point_math() {
        let point = ZonePoint::new(10, -4);
        assert_eq!(point + ZoneVector::new(-3, 4), ZonePoint::new(7, 0));
        assert_eq!(point - ZonePoint::new(10, 10), ZoneVector::new(0, -14));
        assert_eq!(-ZoneVector::new(2, -1), ZoneVector::new(-2, 1));
        assert_eq!(
            CellPoint::new(1, 2) + CellPoint::new(-1, 3),
            CellPoint::new(0, 5)
        );
    }

    #[test]
    fn test_rect_union() {
        let a = ZoneRect::new(0, 0, 10, 10);
        let b = ZoneRect::new(-5, 5, 10, 20);
        assert_eq!(a.union(&b), ZoneRect::new(-5, 0, 15, 25));
        assert_eq!(b.union(&a), a.union(&b));
    }

    #[test]
    fn test_point_math_clamps() {
        let point = ZonePoint::new(i32::MAX - 1, i32::MIN + 1);
        assert_eq!(
            point + ZoneVector::new(5, -5),
            ZonePoint::new(i32::MAX, i32::MIN)
        );
        assert_eq!(
            ZonePoint::new(i32::MIN, 0) - ZonePoint::new(1, 0),
            ZoneVector::new(i32::MIN, 0)
        );
    }

    #[test]
    fn test_rect_around() {
        let rect = ZoneRect::around(ZonePoint::new(10, 20), 3, 2);
        assert_eq!(rect, ZoneRect::new(7, 18, 7, 5));
        assert!(rect.contains(ZonePoint::new(7, 18)));
        assert!(rect.contains(ZonePoint::new(13, 22)));
        assert!(!rect.contains(ZonePoint::new(14, 22)));
    }

    #[test]
    fn test_rect_at_the_edge() {
        let rect = ZoneRect::new(i32::MAX - 4, 0, 10, 10);
        assert!(rect.contains(ZonePoint::new(i32::MAX, 0)));
        assert_eq!(
            rect.union(&ZoneRect::new(i32::MIN, 0, 1, 1)),
            ZoneRect::new(i32::MIN, 0, i32::MAX, 10)
        );
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = ZoneRect::new(0, 0, 10, 10);
        assert!(rect.contains(ZonePoint::new(0, 0)));
        assert!(rect.contains(ZonePoint::new(9, 9)));
        assert!(!rect.contains(ZonePoint::new(10, 0)));
        assert!(!rect.contains(ZonePoint::new(0, -1)));
    }

    #[test]
    fn test_cell_point_serde() {
        assert_tokens(
            &CellPoint::new(3, -2),
            &[
                Token::Struct {
                    name: "CellPoint",
                    len: 2,
                },
                Token::Str("x"),
                Token::I32(3),
                Token::Str("y"),
                Token::I32(-2),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CellPoint::new(1, -1).to_string(), "[1, -1]");
        assert_eq!(ZonePoint::new(1, -1).to_string(), "(1, -1)");
        assert_eq!(ZoneVector::new(0, 5).to_string(), "<0, 5>");
    }
}
