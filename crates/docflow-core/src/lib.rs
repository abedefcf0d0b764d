pub mod catalog;
pub mod error;
pub mod graph;
pub mod structure;
pub mod types;
pub mod usecase;
pub mod view;

pub use error::{DocflowError, Result};
