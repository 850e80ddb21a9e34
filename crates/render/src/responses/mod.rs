//! Resource types with their own response formats.
//!
//! - [`hal`] - HAL resources with links and embedded resources
//! - [`problem`] - Problem Details documents

pub mod hal;
pub mod problem;

pub use hal::{Hal, HalLink};
pub use problem::ApiProblem;
