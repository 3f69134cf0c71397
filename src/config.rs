use clap::Parser;

use crate::{
    board::{BoardConfig, BoardError, Color, Grid, Palette},
    display::{WINDOW_HEIGHT, WINDOW_WIDTH},
};

/// Parse a coordinate string in format "row,column"
fn parse_coordinate(s: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err("Coordinate must be in format 'row,column'".to_string());
    }

    let row = parts[0]
        .trim()
        .parse::<usize>()
        .map_err(|_| "Invalid row value".to_string())?;
    let column = parts[1]
        .trim()
        .parse::<usize>()
        .map_err(|_| "Invalid column value".to_string())?;

    Ok((row, column))
}

/// Draws a checkerboard with one highlighted cell
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    pub columns: usize,

    /// Color even rows start with (name or #rrggbb)
    #[arg(long, default_value = "black")]
    pub primary: Color,

    /// Color odd rows start with (name or #rrggbb)
    #[arg(long, default_value = "red")]
    pub secondary: Color,

    /// Color of the highlighted cell (name or #rrggbb)
    #[arg(long, default_value = "green")]
    pub highlight: Color,

    /// Highlighted cell (format: "row,column"); out of range means none
    #[arg(long, default_value = "3,2", value_parser = parse_coordinate)]
    pub highlight_at: (usize, usize),

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: u32,

    /// Print the board as text instead of opening a window
    #[arg(long, default_value_t = false)]
    pub text: bool,
}

impl Args {
    pub fn board_config(&self) -> Result<BoardConfig, BoardError> {
        Ok(BoardConfig {
            grid: Grid::new(self.rows, self.columns)?,
            palette: Palette {
                primary: self.primary,
                secondary: self.secondary,
                highlight: self.highlight,
            },
            highlight_at: self.highlight_at,
        })
    }
}
