/// Point rasterizer for the fixed-size character grid
use crate::transform::CameraState;

/// Grid width in cells.
pub const WIDTH: usize = 60;
/// Grid height in cells.
pub const HEIGHT: usize = 60;
/// Character for an empty cell.
pub const BLANK: char = ' ';
/// Character drawn at a visible vertex.
pub const MARKER: char = 'k';

const CELL_COUNT: usize = WIDTH * HEIGHT;

/// 60x60 character grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [char; CELL_COUNT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            cells: [BLANK; CELL_COUNT],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    #[inline(always)]
    fn idx(x: usize, y: usize) -> Option<usize> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(y * WIDTH + x)
    }

    /// Cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        Self::idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = Self::idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Rows from top to bottom, each `WIDTH` cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(WIDTH)
    }

    /// Coordinates `(x, y)` of every cell holding `ch`, in row-major order.
    pub fn positions_of(&self, ch: char) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ch)
            .map(|(i, _)| (i % WIDTH, i / WIDTH))
            .collect()
    }

    /// Clear the grid and mark every projected point that lands on it.
    ///
    /// Returns how many points were plotted. Points outside the grid, or with
    /// non-finite coordinates, are dropped.
    pub fn rasterize<const N: usize>(
        &mut self,
        xs: &[f32; N],
        ys: &[f32; N],
        camera: &CameraState,
    ) -> usize {
        self.clear();

        let mut plotted = 0;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            if !x.is_finite() || !y.is_finite() {
                log::debug!("dropping non-finite projected point ({x}, {y})");
                continue;
            }

            let a = screen_coordinate(x, WIDTH, camera.x);
            let b = screen_coordinate(y, HEIGHT, camera.y);
            if let (Some(a), Some(b)) = (a, b) {
                self.set(a, b, MARKER);
                plotted += 1;
            }
        }
        plotted
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a normalized coordinate onto `0..extent`, centred at `extent / 2`.
///
/// The scaled value is truncated toward zero (not floored), then shifted by
/// the half extent and the camera offset. Arithmetic is done in `i64` with
/// saturation so huge inputs stay out of range instead of wrapping.
pub fn screen_coordinate(projected: f32, extent: usize, offset: i32) -> Option<usize> {
    let scaled = (projected * extent as f32 / 2.0) as i64;
    let coord = scaled
        .saturating_add((extent / 2) as i64)
        .saturating_add(i64::from(offset));

    usize::try_from(coord).ok().filter(|&c| c < extent)
}
