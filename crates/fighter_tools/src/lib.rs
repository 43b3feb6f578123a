//! # Fighter Tools
//!
//! Command-line tooling around the pricing core:
//! - Catalog loading from RON files
//! - Catalog validation
//! - Build requests and price reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod report;
pub mod request;
pub mod validate;
