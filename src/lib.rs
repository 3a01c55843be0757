//! blockview library crate.
//!
//! Renders raster frames as colored half-block text. Two source pixel rows
//! map onto one character row: the top pixel colors the glyph, the bottom
//! pixel colors the cell background.

pub mod capture;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod output;
pub mod render;
pub mod session;
pub mod terminal;
