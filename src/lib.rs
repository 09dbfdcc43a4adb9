pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod module_file;
pub mod resolver;
pub mod ui;

pub use error::{BumpyError, Result};
pub use resolver::{resolve, Resolution, ResolveRequest};
