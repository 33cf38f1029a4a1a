//! e1002-convert
//!
//! Converts PNG images into six-color indexed PNGs for Spectra 6 e-paper
//! panels such as the reTerminal E1002.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
