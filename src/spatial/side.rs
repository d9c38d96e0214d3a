//! Tile sides and the border strips sampled on them

use std::fmt;
use std::ops::Range;

/// One of the four sides of a rectangular tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Upper edge
    Top,
    /// Lower edge
    Bottom,
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl Side {
    /// All sides in scan order
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side a neighbor presents to this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position of this side in [`Side::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Pixel rectangle of the strip of `thickness` measured inward from this side
    ///
    /// Returns `None` when the thickness is zero or exceeds the tile
    /// dimension the strip grows into.
    pub fn strip_bounds(self, width: usize, height: usize, thickness: usize) -> Option<StripBounds> {
        let span = match self {
            Self::Top | Self::Bottom => height,
            Self::Left | Self::Right => width,
        };
        if thickness == 0 || thickness > span {
            return None;
        }

        let bounds = match self {
            Self::Top => StripBounds {
                columns: 0..width,
                rows: 0..thickness,
            },
            Self::Bottom => StripBounds {
                columns: 0..width,
                rows: height - thickness..height,
            },
            Self::Left => StripBounds {
                columns: 0..thickness,
                rows: 0..height,
            },
            Self::Right => StripBounds {
                columns: width - thickness..width,
                rows: 0..height,
            },
        };
        Some(bounds)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Half-open pixel ranges of a border strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripBounds {
    /// Horizontal pixel range (x)
    pub columns: Range<usize>,
    /// Vertical pixel range (y)
    pub rows: Range<usize>,
}

impl StripBounds {
    /// Number of pixels inside the strip
    pub fn pixel_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }
}
