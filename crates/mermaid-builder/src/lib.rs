//! mermaid-builder - Build Mermaid.js diagrams from Rust
//!
//! Construct a flowchart as an object graph of nodes, links, style classes
//! and nested subgraphs, then render it to Mermaid text.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaid_builder::prelude::*;
//!
//! let mut chart = Flowchart::new();
//! let a = chart.add_node("A").id().clone();
//! let b = chart.add_node("B").id().clone();
//! chart.add_link(&a, &b);
//!
//! assert_eq!(chart.render(), "flowchart TB\n\t0(\"A\")\n\t1(\"B\")\n\t0 --> 1\n");
//! ```
//!
//! # Nesting
//!
//! Subgraphs nest to any depth up to [`MAX_SUBGRAPH_DEPTH`]. Identifiers come
//! from one source per flowchart, so they never collide across levels:
//!
//! ```rust
//! use mermaid_builder::prelude::*;
//!
//! let mut chart = Flowchart::new();
//! let outer = chart.add_subgraph("outer");
//! let inner = outer.add_subgraph("inner").unwrap();
//! inner.set_direction(Direction::LeftRight);
//!
//! assert_eq!(
//!     chart.render(),
//!     "flowchart TB\n\tsubgraph 0 [outer]\n\t\tsubgraph 1 [inner]\n\t\t\tdirection LR\n\t\tend\n\tend\n"
//! );
//! ```

pub mod core;
pub mod plugins;

pub use crate::core::*;
pub use crate::plugins::flowchart::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Diagram, DiagramError, ElementId, IdSource, PrefixedIds, SequentialIds};
    pub use crate::plugins::flowchart::{
        ArrowHead, Class, CurveStyle, Direction, Flowchart, LineStyle, Link, Node, NodeShape,
        NodeStyle, Subgraph, MAX_SUBGRAPH_DEPTH,
    };
}
