//! Type definitions for ghcal

mod calendar;
mod error;

pub use calendar::*;
pub use error::*;
