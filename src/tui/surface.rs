use crate::map::Surface;

/// Palette-indexed framebuffer backing the map's one drawing primitive.
/// The renderer samples it back out into terminal cells after a frame's
/// worth of `fill_rect` calls.
pub struct PixelSurface {
    pub width: i32,
    pub height: i32,
    data: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height).max(0) as usize],
        }
    }

    /// Palette index at a pixel; out-of-bounds reads come back black.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }
}

impl Surface for PixelSurface {
    fn fill_rect(&mut self, px: i32, py: i32, w: i32, h: i32, color: u8) {
        let x0 = px.max(0);
        let y0 = py.max(0);
        let x1 = (px + w).min(self.width);
        let y1 = (py + h).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.data[(y * self.width + x) as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_inside_bounds() {
        let mut s = PixelSurface::new(8, 8);
        s.fill_rect(2, 3, 2, 2, 7);
        assert_eq!(s.get(2, 3), 7);
        assert_eq!(s.get(3, 4), 7);
        assert_eq!(s.get(1, 3), 0);
        assert_eq!(s.get(4, 3), 0);
    }

    #[test]
    fn clips_to_the_framebuffer() {
        let mut s = PixelSurface::new(4, 4);
        s.fill_rect(-2, -2, 10, 10, 5);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.get(x, y), 5);
            }
        }
        assert_eq!(s.get(4, 0), 0);
        assert_eq!(s.get(-1, 0), 0);
    }

    #[test]
    fn degenerate_rects_are_no_ops() {
        let mut s = PixelSurface::new(4, 4);
        s.fill_rect(1, 1, 0, 5, 9);
        s.fill_rect(1, 1, -3, 2, 9);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.get(x, y), 0);
            }
        }
    }
}
