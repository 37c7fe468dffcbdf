pub mod boundary;
pub mod config;
pub mod error;
pub mod extractor;
pub mod generate;
pub mod placeholder;
pub mod substituter;
pub mod ui;
pub mod version;

pub use error::{ConfigureError, Result};
pub use version::{Component, VersionSet};
