/// Terrain kinds. Closed set; color, walkability and sampling weight are
/// static lookups on the variant rather than scattered conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Dirt,
    Sand,
    Stone,
    Grass,
    Water,
    Tree,
    Rock,
}

impl Tile {
    pub const ALL: [Tile; 7] = [
        Tile::Dirt,
        Tile::Sand,
        Tile::Stone,
        Tile::Grass,
        Tile::Water,
        Tile::Tree,
        Tile::Rock,
    ];

    /// Relative weight for procedural sampling.
    pub fn weight(self) -> u32 {
        match self {
            Tile::Dirt => 30,
            Tile::Sand => 10,
            Tile::Stone => 10,
            Tile::Grass => 20,
            Tile::Water => 10,
            Tile::Tree => 10,
            Tile::Rock => 10,
        }
    }

    /// Retro palette index for the base tile rectangle.
    pub fn color(self) -> u8 {
        match self {
            Tile::Dirt => 4,
            Tile::Sand => 10,
            Tile::Stone => 5,
            Tile::Grass => 3,
            Tile::Water => 12,
            Tile::Tree => 11,
            Tile::Rock => 6,
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Water | Tile::Tree | Tile::Rock)
    }

    /// Glyph used by the hand-authored layout strings. Unknown glyphs
    /// normalize to rock so a typo in a layout can never open a hole.
    pub fn from_glyph(c: char) -> Tile {
        match c {
            '.' => Tile::Dirt,
            '~' => Tile::Sand,
            '#' => Tile::Stone,
            '^' => Tile::Grass,
            'o' => Tile::Water,
            'T' => Tile::Tree,
            'R' => Tile::Rock,
            _ => Tile::Rock,
        }
    }
}
