pub mod board;
pub mod config;
pub mod display;
pub mod window;

pub use board::{render, render_board, BoardConfig, BoardError, Cell, Color, Grid, Palette};
