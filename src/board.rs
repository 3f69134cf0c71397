//! Board rendering.
//!
//! A board is a `rows × columns` grid of cells emitted in row-major order.
//! Each row starts on `primary` when its index is even and on `secondary`
//! when it is odd, then alternates column by column. One coordinate can be
//! forced to a highlight color without disturbing that alternation.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimension {rows}x{columns}: rows and columns must be positive")]
    InvalidDimension { rows: usize, columns: usize },
    #[error("{rows}x{columns} board does not fit a {width}x{height} surface")]
    SurfaceTooSmall {
        rows: usize,
        columns: usize,
        width: u32,
        height: u32,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color `{0}` (expected a color name or #rrggbb)")]
pub struct ColorParseError(pub String);

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const PINK: Color = Color::rgb(255, 175, 175);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);

    const NAMED: [(&'static str, Color); 13] = [
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("yellow", Color::YELLOW),
        ("cyan", Color::CYAN),
        ("magenta", Color::MAGENTA),
        ("orange", Color::ORANGE),
        ("pink", Color::PINK),
        ("gray", Color::GRAY),
        ("lightgray", Color::LIGHT_GRAY),
        ("darkgray", Color::DARK_GRAY),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Name of the color if it is one of the named constants.
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError(s.to_string()))
            };
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let key: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.replace("grey", "gray");

        Self::NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, (row, column): (usize, usize)) -> bool {
        row < self.rows && column < self.columns
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::BLACK,
            secondary: Color::RED,
            highlight: Color::GREEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub color: Color,
}

/// Everything needed to render one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub grid: Grid,
    pub palette: Palette,
    pub highlight_at: (usize, usize),
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid: Grid {
                rows: 10,
                columns: 10,
            },
            palette: Palette::default(),
            highlight_at: (3, 2),
        }
    }
}

impl BoardConfig {
    pub fn render(&self) -> Vec<Cell> {
        render(self.grid, &self.palette, self.highlight_at)
    }
}

/// Renders the board in row-major order.
///
/// The per-row cursor starts on `primary` for even rows and `secondary`
/// for odd rows and flips after every column. The cell at `highlight_at`
/// takes `palette.highlight` but the cursor still flips past it, so the
/// rest of the row is unaffected. A coordinate outside the grid never
/// matches.
pub fn render(grid: Grid, palette: &Palette, highlight_at: (usize, usize)) -> Vec<Cell> {
    if !grid.contains(highlight_at) {
        debug!(
            "highlight {:?} is outside the {}x{} grid, no cell will be highlighted",
            highlight_at, grid.rows, grid.columns
        );
    }

    let mut cells = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        // true while the cursor sits on primary
        let mut on_primary = row % 2 == 0;
        for column in 0..grid.columns {
            let color = if (row, column) == highlight_at {
                trace!("highlighting cell ({}, {})", row, column);
                palette.highlight
            } else if on_primary {
                palette.primary
            } else {
                palette.secondary
            };
            cells.push(Cell { row, column, color });
            on_primary = !on_primary;
        }
    }

    debug!(
        "rendered {}x{} board ({} cells)",
        grid.rows,
        grid.columns,
        cells.len()
    );
    cells
}

/// Validates the dimensions and renders in one step.
pub fn render_board(
    rows: usize,
    columns: usize,
    palette: &Palette,
    highlight_at: (usize, usize),
) -> Result<Vec<Cell>, BoardError> {
    Ok(render(Grid::new(rows, columns)?, palette, highlight_at))
}

/// Formats rendered cells as one line per row, `columns` symbols per line.
pub fn to_text<F>(cells: &[Cell], columns: usize, symbol: F) -> String
where
    F: Fn(Color) -> char,
{
    if columns == 0 {
        return String::new();
    }
    cells
        .chunks(columns)
        .map(|row| row.iter().map(|cell| symbol(cell.color)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// First letter of the color name, upper-cased, or `?` for unnamed colors.
pub fn initial(color: Color) -> char {
    color
        .name()
        .and_then(|name| name.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}
