use std::error::Error;

use checkerboard::{board, config::Args, display::Layout, window};
use clap::Parser;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.board_config()?;
    let cells = config.render();

    if args.text {
        println!("{}", board::to_text(&cells, config.grid.columns(), board::initial));
        return Ok(());
    }

    let layout = Layout::new(config.grid, args.width, args.height)?;
    window::run(&cells, &layout, "CheckerBoard")?;
    Ok(())
}
