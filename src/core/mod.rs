//! Core business logic layer
//!
//! The operation catalog, template rendering, the completion client seam and
//! the operations hub that ties them together.

pub mod catalog;
pub mod data;
pub mod operations;
pub mod template;
pub mod traits;
