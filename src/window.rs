use std::{thread, time::Duration};

use log::{debug, info};
use sdl2::{
    event::Event,
    pixels,
    render::Canvas,
    video::{Window, WindowBuildError},
    IntegerOrSdlError,
};
use thiserror::Error;

use crate::{
    board::{Cell, Color},
    display::Layout,
};

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / 60);

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to build window: {0}")]
    Build(#[from] WindowBuildError),
    #[error("failed to build canvas: {0}")]
    Canvas(#[from] IntegerOrSdlError),
}

impl From<String> for WindowError {
    fn from(msg: String) -> Self {
        WindowError::Sdl(msg)
    }
}

impl From<Color> for pixels::Color {
    fn from(color: Color) -> Self {
        pixels::Color::RGB(color.r, color.g, color.b)
    }
}

/// Opens a window, paints `cells` into their slots and blocks until the
/// window is closed.
pub fn run(cells: &[Cell], layout: &Layout, title: &str) -> Result<(), WindowError> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(title, layout.width(), layout.height())
        .position_centered()
        .build()?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut canvas = window.into_canvas().build()?;

    info!(
        "opened {}x{} window for a {}x{} board",
        layout.width(),
        layout.height(),
        layout.grid().rows(),
        layout.grid().columns()
    );
    debug!(
        "slot size {}x{}",
        layout.cell_width(),
        layout.cell_height()
    );

    loop {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                info!("window closed");
                return Ok(());
            }
        }

        canvas.set_draw_color(pixels::Color::RGB(0, 0, 0));
        canvas.clear();
        paint(cells, layout, &mut canvas)?;
        canvas.present();

        thread::sleep(FRAME);
    }
}

fn paint(cells: &[Cell], layout: &Layout, canvas: &mut Canvas<Window>) -> Result<(), WindowError> {
    for cell in cells {
        canvas.set_draw_color(cell.color);
        canvas.fill_rect(layout.slot(cell.row, cell.column))?;
    }
    Ok(())
}
