pub mod asset;
pub mod error;
pub mod github;
pub mod http;
pub mod manifest;
pub mod resolver;

pub use error::{Error, Result};
