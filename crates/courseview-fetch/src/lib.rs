#![doc = include_str!("../README.md")]

pub mod data;
pub mod error;
pub mod loader;
pub mod source;

pub use data::DataService;
pub use error::{LoadError, Result};
pub use loader::{ContentLoader, Fetched, RequestGuard};
pub use source::{ContentSource, FsSource, HttpSource, source_for};
