pub mod generator;
pub mod tile;

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::entity::Player;
use tile::Tile;

/// Grid side length.
pub const MAP_SIZE: usize = 11;
/// Logical screen width in pixels.
pub const SCREEN_PX: i32 = 256;
/// Vertical band reserved for the HUD; tiles draw below it.
pub const HUD_PX: i32 = 20;

/// The one drawing primitive the map needs. `color` is a retro palette
/// index; how it becomes a real color is the backend's business.
pub trait Surface {
    fn fill_rect(&mut self, px: i32, py: i32, w: i32, h: i32, color: u8);
}

#[derive(Clone)]
pub struct Map {
    pub size: usize,
    pub tile_px: i32,
    pub tiles: Vec<Tile>,
}

impl Map {
    pub fn new(procedural: bool, seed: u64) -> Self {
        let tiles = if procedural {
            generator::generate_procedural(MAP_SIZE, seed)
        } else {
            generator::generate_fixed(MAP_SIZE)
        };
        Self::from_tiles(MAP_SIZE, tiles)
    }

    pub(crate) fn from_tiles(size: usize, tiles: Vec<Tile>) -> Self {
        Self {
            size,
            // Integer division; the leftover pixels at the right/bottom
            // edge stay unfilled.
            tile_px: SCREEN_PX / size as i32,
            tiles,
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.idx(x, y)]
    }

    /// False for any out-of-bounds coordinate, otherwise the tile's own
    /// walkability. Never panics.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
            return false;
        }
        self.get(x as usize, y as usize).is_walkable()
    }

    /// Draw every cell: one base rectangle per tile plus a decorative
    /// overlay for the obstacle and accent kinds. Read-only; redraws the
    /// whole grid each call.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let ts = self.tile_px;

        for y in 0..self.size {
            for x in 0..self.size {
                let tile = self.get(x, y);
                let px = x as i32 * ts;
                let py = y as i32 * ts + HUD_PX;

                surface.fill_rect(px, py, ts, ts, tile.color());

                // Cosmetic overlays; offsets are not load-bearing.
                match tile {
                    Tile::Tree => surface.fill_rect(px + 2, py + 2, ts - 4, ts - 4, 11),
                    Tile::Rock => surface.fill_rect(px + 2, py + 2, ts - 4, ts - 4, 13),
                    Tile::Water => surface.fill_rect(px + 4, py + 4, 2, 2, 6),
                    Tile::Stone => surface.fill_rect(px + 4, py + 4, 2, 2, 13),
                    _ => {}
                }
            }
        }
    }

    /// Apply a movement request. While confused there is a 50% chance the
    /// requested direction is replaced by a random cardinal one. The
    /// candidate cell wraps toroidally; a non-walkable candidate leaves the
    /// player where they were. Confusion ticks down once per call whenever
    /// it was positive at entry, override or not, rejected or not.
    pub fn move_player(&self, player: &mut Player, dx: i32, dy: i32, rng: &mut StdRng) {
        let confused = player.confusion > 0;

        let (dx, dy) = if confused && rng.gen_bool(0.5) {
            const CARDINALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
            CARDINALS[rng.gen_range(0..4)]
        } else {
            (dx, dy)
        };

        let size = self.size as i32;
        let nx = (player.x + dx).rem_euclid(size);
        let ny = (player.y + dy).rem_euclid(size);

        if self.is_walkable(nx, ny) {
            player.x = nx;
            player.y = ny;
        }

        if confused {
            player.confusion -= 1;
        }
    }
}
