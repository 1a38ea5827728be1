//! Keyboard movement. The input vocabulary is eight
//! numeric keypad directions plus the four arrow keys. Each topology decides
//! how far (in zone space) each of those keys moves a token.

use crate::grid::point::ZoneVector;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A directional key that can move a token. Numpad 5 isn't a direction, so
/// it has no variant here.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MovementKey {
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    Left,
    Right,
    Up,
    Down,
}

impl MovementKey {
    // Virtual key codes for the arrow and numpad keys
    const VK_LEFT: u32 = 0x25;
    const VK_UP: u32 = 0x26;
    const VK_RIGHT: u32 = 0x27;
    const VK_DOWN: u32 = 0x28;
    const VK_NUMPAD0: u32 = 0x60;

    /// Map a raw virtual key code to a movement key. Any code outside the
    /// movement vocabulary (including numpad 5) gives `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            Self::VK_LEFT => Some(Self::Left),
            Self::VK_UP => Some(Self::Up),
            Self::VK_RIGHT => Some(Self::Right),
            Self::VK_DOWN => Some(Self::Down),
            _ => match code.checked_sub(Self::VK_NUMPAD0)? {
                1 => Some(Self::Numpad1),
                2 => Some(Self::Numpad2),
                3 => Some(Self::Numpad3),
                4 => Some(Self::Numpad4),
                6 => Some(Self::Numpad6),
                7 => Some(Self::Numpad7),
                8 => Some(Self::Numpad8),
                9 => Some(Self::Numpad9),
                _ => None,
            },
        }
    }

    /// The virtual key code for this key. Inverse of [Self::from_code].
    pub fn code(self) -> u32 {
        match self {
            Self::Numpad1 => Self::VK_NUMPAD0 + 1,
            Self::Numpad2 => Self::VK_NUMPAD0 + 2,
            Self::Numpad3 => Self::VK_NUMPAD0 + 3,
            Self::Numpad4 => Self::VK_NUMPAD0 + 4,
            Self::Numpad6 => Self::VK_NUMPAD0 + 6,
            Self::Numpad7 => Self::VK_NUMPAD0 + 7,
            Self::Numpad8 => Self::VK_NUMPAD0 + 8,
            Self::Numpad9 => Self::VK_NUMPAD0 + 9,
            Self::Left => Self::VK_LEFT,
            Self::Right => Self::VK_RIGHT,
            Self::Up => Self::VK_UP,
            Self::Down => Self::VK_DOWN,
        }
    }

    /// The on-screen direction of this key, as `(x, y)` signs. Zone space
    /// has `+y` pointing down, so numpad 8 (up) is `(0, -1)`.
    pub fn direction(self) -> (i32, i32) {
        match self {
            Self::Numpad1 => (-1, 1),
            Self::Numpad2 | Self::Down => (0, 1),
            Self::Numpad3 => (1, 1),
            Self::Numpad4 | Self::Left => (-1, 0),
            Self::Numpad6 | Self::Right => (1, 0),
            Self::Numpad7 => (-1, -1),
            Self::Numpad8 | Self::Up => (0, -1),
            Self::Numpad9 => (1, -1),
        }
    }
}

/// Movement on grids whose cells line up in rows and columns (square, and
/// gridless where the "cell" is the token's own bounding box). Every key
/// moves a full step along each axis it points along.
pub(super) fn orthogonal(key: MovementKey, step_x: i32, step_y: i32) -> ZoneVector {
    let (dx, dy) = key.direction();
    ZoneVector::new(dx * step_x, dy * step_y)
}

/// Movement on a horizontal hex grid (rows of hexes, points up). There is no
/// neighbor directly above or below a hex, so numpad 8/2 don't move. The
/// up/down arrows still move when snapping, by taking a diagonal: up goes
/// up-left and down goes down-right. That mirrors Left/Right on
/// [hex_vertical].
///
/// ```text
///     7   -   9
///   4     5     6
///     1   -   3
/// ```
pub(super) fn hex_horizontal(
    key: MovementKey,
    snap_to_grid: bool,
    size: i32,
    v_radius: f64,
    u_radius: f64,
) -> ZoneVector {
    let (size, size_h, size_v) = hex_steps(snap_to_grid, size, v_radius, u_radius);
    let (x, y) = match key {
        MovementKey::Numpad7 => (-size_h, -size_v),
        MovementKey::Numpad9 => (size_h, -size_v),
        MovementKey::Numpad4 | MovementKey::Left => (-size, 0),
        MovementKey::Numpad6 | MovementKey::Right => (size, 0),
        MovementKey::Numpad1 => (-size_h, size_v),
        MovementKey::Numpad3 => (size_h, size_v),
        MovementKey::Up => (if snap_to_grid { -size_h } else { 0 }, -size_v),
        MovementKey::Down => (if snap_to_grid { size_h } else { 0 }, size_v),
        MovementKey::Numpad2 | MovementKey::Numpad8 => (0, 0),
    };
    ZoneVector::new(x, y)
}

/// Movement on a vertical hex grid (columns of hexes, points to the sides).
/// The mirror image of [hex_horizontal]: no neighbor directly left or right.
///
/// ```text
///     7   8   9
///   -     5     -
///     1   2   3
/// ```
pub(super) fn hex_vertical(
    key: MovementKey,
    snap_to_grid: bool,
    size: i32,
    v_radius: f64,
    u_radius: f64,
) -> ZoneVector {
    let (size, size_h, size_v) = hex_steps(snap_to_grid, size, v_radius, u_radius);
    let (x, y) = match key {
        MovementKey::Numpad1 => (-size_v, size_h),
        MovementKey::Numpad2 | MovementKey::Down => (0, size),
        MovementKey::Numpad3 => (size_v, size_h),
        MovementKey::Numpad7 => (-size_v, -size_h),
        MovementKey::Numpad8 | MovementKey::Up => (0, -size),
        MovementKey::Numpad9 => (size_v, -size_h),
        MovementKey::Left => (-size_v, if snap_to_grid { -size_h } else { 0 }),
        MovementKey::Right => (size_v, if snap_to_grid { size_h } else { 0 }),
        MovementKey::Numpad4 | MovementKey::Numpad6 => (0, 0),
    };
    ZoneVector::new(x, y)
}

/// Full, half-width and row-pitch steps for a hex grid. When not snapping,
/// every step is a single unit.
fn hex_steps(
    snap_to_grid: bool,
    size: i32,
    v_radius: f64,
    u_radius: f64,
) -> (i32, i32, i32) {
    if snap_to_grid {
        (size, v_radius as i32, (u_radius * 1.5) as i32)
    } else {
        (1, 1, 1)
    }
}

/// Movement on an isometric grid. Diagonal keys follow the diamond edges
/// (one cell along a single cell axis), while the straight keys cross a
/// diamond corner to corner.
pub(super) fn isometric(
    key: MovementKey,
    snap_to_grid: bool,
    size: i32,
) -> ZoneVector {
    let (dx, dy) = key.direction();
    if !snap_to_grid {
        return ZoneVector::new(dx, dy);
    }
    if dx != 0 && dy != 0 {
        ZoneVector::new(dx * size, dy * (size / 2))
    } else {
        ZoneVector::new(dx * size * 2, dy * size)
    }
}
