use anyhow::Result;
use log::{debug, warn};

use super::config::{LifeConfig, BORDER_COLS, BORDER_ROWS};

/// Query the size of the terminal attached to stdout as `(rows, cols)`.
#[cfg(unix)]
pub fn terminal_size() -> Result<(u16, u16)> {
    use libc::{winsize, STDOUT_FILENO, TIOCGWINSZ};
    use std::mem;

    let winsz = unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(STDOUT_FILENO, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(anyhow::Error::from(std::io::Error::last_os_error())
                .context("ioctl(TIOCGWINSZ) on stdout failed"));
        }
        winsz
    };
    if winsz.ws_row == 0 || winsz.ws_col == 0 {
        anyhow::bail!(
            "terminal reported an empty size ({}x{})",
            winsz.ws_row,
            winsz.ws_col
        );
    }
    debug!("terminal size: {} rows, {} cols", winsz.ws_row, winsz.ws_col);
    Ok((winsz.ws_row, winsz.ws_col))
}

#[cfg(not(unix))]
pub fn terminal_size() -> Result<(u16, u16)> {
    anyhow::bail!("terminal size query is only supported on unix")
}

/// The queried `(rows, cols)`, or the configured fallback when the query failed.
pub fn size_or_fallback(query: Result<(u16, u16)>, config: &LifeConfig) -> (u16, u16) {
    query.unwrap_or_else(|e| {
        warn!(
            "{:#}; falling back to {}x{}",
            e, config.fallback_rows, config.fallback_cols
        );
        (config.fallback_rows, config.fallback_cols)
    })
}

/// Grid `(height, width)` that fits inside a `rows x cols` terminal once the
/// borders are drawn. Never smaller than 1x1.
pub fn grid_dimensions(rows: u16, cols: u16) -> (usize, usize) {
    let height = rows.saturating_sub(BORDER_ROWS).max(1);
    let width = cols.saturating_sub(BORDER_COLS).max(1);
    (height as usize, width as usize)
}
