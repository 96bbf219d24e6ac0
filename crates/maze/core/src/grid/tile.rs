/// Classification of a single tile.
///
/// Ground-truth grids only ever hold `Path`, `Wall` and `Item`. `Unknown`
/// exists for the agent's belief map.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    Path,
    Wall,
    Item,
    #[default]
    Unknown,
}

impl TileKind {
    /// Numeric code used by the maze matrix format.
    pub const fn code(self) -> u8 {
        match self {
            TileKind::Path => 0,
            TileKind::Wall => 1,
            TileKind::Item => 2,
            TileKind::Unknown => 3,
        }
    }

    /// Decodes a ground-truth code. `Unknown` is never valid input.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileKind::Path),
            1 => Some(TileKind::Wall),
            2 => Some(TileKind::Item),
            _ => None,
        }
    }

    /// Anything but a wall can be planned through, including unknown tiles.
    pub const fn is_traversable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, TileKind::Unknown)
    }

    /// Glyph used by the plain-text renderer.
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Path => '.',
            TileKind::Wall => '#',
            TileKind::Item => '*',
            TileKind::Unknown => '?',
        }
    }
}
