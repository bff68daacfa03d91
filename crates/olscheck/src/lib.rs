//! olscheck library - exposes CLI modules for testing

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logging;
