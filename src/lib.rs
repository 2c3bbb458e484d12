//! Conway's Game of Life on a torus, sized to and printed on the terminal.

pub mod auxiliary;
pub mod projects;
pub mod traits_and_structs;
