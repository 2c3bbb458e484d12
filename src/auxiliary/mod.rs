pub mod config;
pub mod randomizer;
pub mod terminal;
