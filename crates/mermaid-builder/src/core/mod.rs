//! Core pieces shared by every diagram kind
//!
//! Identifier sources, the [`Diagram`] trait with fencing and file output,
//! the error type and logging setup.

mod diagram;
mod error;
pub mod fence;
mod id;
pub mod logging;

pub use diagram::*;
pub use error::*;
pub use id::*;
pub use logging::*;
