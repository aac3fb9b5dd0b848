//! Diagram kinds
//!
//! Each plugin builds one kind of Mermaid diagram on top of the core
//! [`Diagram`](crate::core::Diagram) trait.

pub mod flowchart;

pub use flowchart::*;
