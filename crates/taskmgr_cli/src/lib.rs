pub mod cli;
pub mod menu;
