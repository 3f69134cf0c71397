use checkerboard::{Cell, Color, Palette};
use rand::Rng;

/// Color the per-row cursor would hold at `(row, column)`, ignoring any highlight.
pub fn cursor_color(palette: &Palette, row: usize, column: usize) -> Color {
    if (row + column) % 2 == 0 {
        palette.primary
    } else {
        palette.secondary
    }
}

pub fn random_palette<R: Rng>(rng: &mut R) -> Palette {
    let mut pick = || Color::rgb(rng.gen(), rng.gen(), rng.gen());
    let primary = pick();
    let mut secondary = pick();
    while secondary == primary {
        secondary = pick();
    }
    let mut highlight = pick();
    while highlight == primary || highlight == secondary {
        highlight = pick();
    }
    Palette {
        primary,
        secondary,
        highlight,
    }
}

pub fn at(cells: &[Cell], columns: usize, row: usize, column: usize) -> Cell {
    cells[row * columns + column]
}
