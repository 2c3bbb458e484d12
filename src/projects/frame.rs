use std::io::Write;
use std::thread;

use anyhow::{Context, Result};

use super::life::GridState;
use crate::auxiliary::config::{LifeConfig, CLEAR_SCREEN_AND_HOME};

/// Glyph for each cell state.
pub const OUT_CHARS: [char; 2] = [' ', '#'];

/// Render the current generation as a bordered block of text:
///
/// ```text
/// +-----+
/// |# #  |
/// |  ## |
/// +-----+
/// ```
pub fn render_frame(grid: &GridState) -> String {
    let (height, width) = (grid.height(), grid.width());
    let mut border = String::with_capacity(width + 3);
    border.push('+');
    border.extend(std::iter::repeat('-').take(width));
    border.push_str("+\n");

    let mut out = String::with_capacity((height + 2) * (width + 3));
    out.push_str(&border);
    for row in 0..height {
        out.push('|');
        for col in 0..width {
            out.push(OUT_CHARS[grid.get(row, col).state() as usize]);
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// Write one frame to `out` and flush it, honoring the clear-screen and
/// frame-delay settings of `config`.
pub fn present<W: Write>(out: &mut W, grid: &GridState, config: &LifeConfig) -> Result<()> {
    if config.clear_screen {
        out.write_all(CLEAR_SCREEN_AND_HOME.as_bytes())
            .context("failed to clear screen")?;
    }
    out.write_all(render_frame(grid).as_bytes())
        .context("failed to write frame")?;
    out.flush().context("failed to flush frame")?;
    if let Some(delay) = config.frame_delay {
        thread::sleep(delay);
    }
    Ok(())
}
