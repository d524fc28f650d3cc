use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::map::tile::Tile;

/// The hand-authored layout. Symmetric, two water ponds, tree-flanked
/// paths, open spawn region at center.
const FIXED_LAYOUT: [&str; 11] = [
    "RRRRRRRRRRR",
    "R.^^.T.^^.R",
    "R^..~..~^.R",
    "R.~oo~oo~.R",
    "RT.~..~.T.R",
    "R...^.^...R",
    "R.T.^.^.T.R",
    "R.~oo~oo~.R",
    "R^..~..~^.R",
    "R.^^.T.^^.R",
    "RRRRRRRRRRR",
];

/// Per-cell independent weighted terrain sampling. Border cells are always
/// rock; the center cell is forced to dirt after sampling so the spawn is
/// never buried. No smoothing or connectivity pass: a sealed-off spawn
/// neighborhood is possible and allowed.
pub fn generate_procedural(size: usize, seed: u64) -> Vec<Tile> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tiles = Vec::with_capacity(size * size);

    for y in 0..size {
        for x in 0..size {
            let tile = if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                Tile::Rock
            } else {
                sample_tile(&mut rng)
            };
            tiles.push(tile);
        }
    }

    let center = size / 2;
    tiles[center * size + center] = Tile::Dirt;

    tiles
}

/// The fixed layout, normalized to `size` x `size`.
pub fn generate_fixed(size: usize) -> Vec<Tile> {
    layout_to_grid(&FIXED_LAYOUT, size)
}

/// Normalize layout rows to an exact size x size grid: short rows are
/// right-padded with rock, long rows truncated, missing rows appended as
/// all-rock, surplus rows dropped.
pub(crate) fn layout_to_grid(rows: &[&str], size: usize) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(size * size);

    for y in 0..size {
        match rows.get(y) {
            Some(row) => {
                let mut chars = row.chars();
                for _ in 0..size {
                    tiles.push(match chars.next() {
                        Some(c) => Tile::from_glyph(c),
                        None => Tile::Rock,
                    });
                }
            }
            None => tiles.extend(std::iter::repeat(Tile::Rock).take(size)),
        }
    }

    tiles
}

fn sample_tile(rng: &mut StdRng) -> Tile {
    let total: u32 = Tile::ALL.iter().map(|t| t.weight()).sum();
    let mut roll = rng.gen_range(0..total);
    for t in Tile::ALL {
        if roll < t.weight() {
            return t;
        }
        roll -= t.weight();
    }
    Tile::Rock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MAP_SIZE;

    fn border_is_rock(tiles: &[Tile], size: usize) -> bool {
        (0..size).all(|i| {
            tiles[i] == Tile::Rock
                && tiles[(size - 1) * size + i] == Tile::Rock
                && tiles[i * size] == Tile::Rock
                && tiles[i * size + size - 1] == Tile::Rock
        })
    }

    #[test]
    fn procedural_border_and_center() {
        for seed in [0, 1, 42, 0xDEAD] {
            let tiles = generate_procedural(MAP_SIZE, seed);
            assert!(border_is_rock(&tiles, MAP_SIZE));
            let c = MAP_SIZE / 2;
            assert_eq!(tiles[c * MAP_SIZE + c], Tile::Dirt);
        }
    }

    #[test]
    fn procedural_is_deterministic_per_seed() {
        let a = generate_procedural(MAP_SIZE, 99);
        let b = generate_procedural(MAP_SIZE, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_border_and_center() {
        let tiles = generate_fixed(MAP_SIZE);
        assert!(border_is_rock(&tiles, MAP_SIZE));
        let c = MAP_SIZE / 2;
        assert!(tiles[c * MAP_SIZE + c].is_walkable());
    }

    #[test]
    fn fixed_is_deterministic() {
        assert_eq!(generate_fixed(MAP_SIZE), generate_fixed(MAP_SIZE));
    }

    #[test]
    fn short_rows_pad_with_rock() {
        let tiles = layout_to_grid(&["..", "."], 3);
        assert_eq!(
            tiles,
            vec![
                Tile::Dirt,
                Tile::Dirt,
                Tile::Rock,
                Tile::Dirt,
                Tile::Rock,
                Tile::Rock,
                Tile::Rock,
                Tile::Rock,
                Tile::Rock,
            ]
        );
    }

    #[test]
    fn long_rows_and_surplus_rows_truncate() {
        let tiles = layout_to_grid(&["....", "^^^^", "~~~~", "oooo"], 2);
        assert_eq!(tiles, vec![Tile::Dirt, Tile::Dirt, Tile::Grass, Tile::Grass]);
    }
}
