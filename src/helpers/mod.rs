//! Display helpers shared by the CLI and the API

mod date;

pub use date::*;
