//! ghcal — GitHub contribution calendar in your terminal

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
