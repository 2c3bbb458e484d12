use std::time::Duration;

/// Terminal size assumed when the real one can't be queried.
pub const DEFAULT_TERMINAL_ROWS: u16 = 24;
pub const DEFAULT_TERMINAL_COLS: u16 = 80;

/// Lines taken by the top and bottom borders plus the line the cursor rests on.
pub const BORDER_ROWS: u16 = 3;
/// Columns taken by the left and right borders.
pub const BORDER_COLS: u16 = 2;

/// A cell starts alive when its random sample clears this threshold.
pub const INITIAL_FILL: f32 = 0.5;

pub const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Tunables for a run. There are no flags or config files; `main` uses `default()`.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub fallback_rows: u16,
    pub fallback_cols: u16,
    pub initial_fill: f32,
    /// Prefix each frame with a clear-screen escape instead of appending.
    pub clear_screen: bool,
    /// Pause between frames. `None` runs flat out.
    pub frame_delay: Option<Duration>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            fallback_rows: DEFAULT_TERMINAL_ROWS,
            fallback_cols: DEFAULT_TERMINAL_COLS,
            initial_fill: INITIAL_FILL,
            clear_screen: false,
            frame_delay: None,
        }
    }
}
