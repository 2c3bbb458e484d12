pub mod frame;
pub mod life;

pub use frame::{present, render_frame};
pub use life::GridState;
