use sdl2::rect::Rect;

use crate::board::{BoardError, Grid};

pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 640;

/// Splits a fixed surface into `rows × columns` equal slots.
///
/// Slot sizes are truncated, so a surface that is not an exact multiple of
/// the grid leaves a strip unpainted on the right and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
}

impl Layout {
    pub fn new(grid: Grid, width: u32, height: u32) -> Result<Self, BoardError> {
        let too_small = BoardError::SurfaceTooSmall {
            rows: grid.rows(),
            columns: grid.columns(),
            width,
            height,
        };
        let columns = u32::try_from(grid.columns()).map_err(|_| too_small.clone())?;
        let rows = u32::try_from(grid.rows()).map_err(|_| too_small.clone())?;
        if columns > width || rows > height {
            return Err(too_small);
        }

        Ok(Self {
            grid,
            width,
            height,
            cell_width: width / columns,
            cell_height: height / rows,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn slot(&self, row: usize, column: usize) -> Rect {
        Rect::new(
            (column as u32 * self.cell_width) as i32,
            (row as u32 * self.cell_height) as i32,
            self.cell_width,
            self.cell_height,
        )
    }
}
