//! Pipeline module - finding, loading and converting DeepLabCut output files

pub mod classify;
pub mod convert;
pub mod error;
pub mod loader;
pub mod result;
pub mod strategy;
pub mod walk;

pub use classify::*;
pub use convert::*;
pub use error::*;
pub use loader::*;
pub use result::*;
pub use strategy::*;
pub use walk::*;
