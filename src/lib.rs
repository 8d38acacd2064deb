pub mod config;
pub mod error;
pub mod fightfinder;
pub mod library;
pub mod logging;
pub mod navigate;
pub mod reconcile;
pub mod records;
pub mod store;

pub use error::{LibraryError, Result};
