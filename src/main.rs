use std::io;

use anyhow::Result;
use log::{debug, info};

use term_life::auxiliary::config::LifeConfig;
use term_life::auxiliary::terminal::{grid_dimensions, size_or_fallback, terminal_size};
use term_life::projects::{present, GridState};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = LifeConfig::default();
    let (rows, cols) = size_or_fallback(terminal_size(), &config);
    let (height, width) = grid_dimensions(rows, cols);
    info!("terminal {}x{}, grid {}x{}", rows, cols, height, width);

    let mut grid = GridState::with_fill(height, width, config.initial_fill);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    loop {
        present(&mut out, &grid, &config)?;
        debug!("rendered generation {}", grid.generation());
        grid.step();
    }
}
