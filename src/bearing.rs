//! Discrete travel directions and the glyphs that show them.

/// One of the nine directions the remote can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bearing {
    /// No direction. Also the fallback for unresolved input.
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Highlightable shapes on the direction pad.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Up,
    Down,
    Left,
    Right,
    /// Center circle.
    Stop,
}

impl Glyph {
    /// All glyphs, in the order they are erased before a redraw.
    pub const ALL: [Self; 5] = [Self::Down, Self::Left, Self::Up, Self::Right, Self::Stop];
}

impl Bearing {
    pub const ALL: [Self; 9] = [
        Self::Stop,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Glyphs lit for this bearing. Diagonals light two triangles.
    pub const fn glyphs(self) -> &'static [Glyph] {
        match self {
            Self::Stop => &[Glyph::Stop],
            Self::Up => &[Glyph::Up],
            Self::Down => &[Glyph::Down],
            Self::Left => &[Glyph::Left],
            Self::Right => &[Glyph::Right],
            Self::UpLeft => &[Glyph::Up, Glyph::Left],
            Self::UpRight => &[Glyph::Up, Glyph::Right],
            Self::DownLeft => &[Glyph::Down, Glyph::Left],
            Self::DownRight => &[Glyph::Down, Glyph::Right],
        }
    }

    /// Upper-case name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::UpLeft => "UP_LEFT",
            Self::UpRight => "UP_RIGHT",
            Self::DownLeft => "DOWN_LEFT",
            Self::DownRight => "DOWN_RIGHT",
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight)
    }
}
