//! Tool image tracking and availability resolution.
//!
//! This module provides:
//! - [`ToolImage`] and [`Availability`] for per-image state
//! - [`ToolImageRegistry`], the deduplicated collection of every tool image
//!   referenced by any Development Environment or catalog entry

pub mod registry;
pub mod tool_image;

pub use registry::ToolImageRegistry;
pub use tool_image::{Availability, ToolImage};
