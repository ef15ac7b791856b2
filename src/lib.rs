//! Starship: a wrap-around arena shooter for the terminal.
//!
//! [`sim`] holds the whole entity simulation and can be driven headless;
//! the remaining modules wire it to a crossterm/ratatui front end.

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod menu;
pub mod scoreboard;
pub mod sim;
pub mod ui;
