#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod config;
pub mod document;
pub mod extract;
pub mod model;
pub mod timeline;

pub mod error {
    pub use anyhow::{Error, Result};
}
