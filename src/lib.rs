pub mod app;
pub mod config;
pub mod error;
pub mod output;
pub mod remote;
pub mod render;

pub use error::{Error, Result};
