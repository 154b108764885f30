// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod terminal;
pub mod ui;
pub mod validate;

pub use domain::{CountryCityTable, ErrorSet, Field, FieldSet, Snapshot};
