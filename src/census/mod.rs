//! The enumerate-classify-aggregate pipeline.
pub mod batches;
pub use batches::*;

pub mod census;
pub use census::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod frequency;
pub use frequency::*;

pub mod reference;
