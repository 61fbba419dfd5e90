// SPDX-License-Identifier: MPL-2.0
/// A point in integer pixels, either window-local or in desktop space depending on context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}
impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[inline] pub const fn x(&self) -> i32 { self.x }
    #[inline] pub const fn y(&self) -> i32 { self.y }
}

/// A width/height pair in integer pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    #[inline] pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }

    #[inline] pub const fn width(&self) -> i32 { self.width }
    #[inline] pub const fn height(&self) -> i32 { self.height }
}
