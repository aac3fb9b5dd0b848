//! Flowchart diagram plugin
//!
//! Builds Mermaid `flowchart` documents: nodes, links, style classes and
//! arbitrarily nested subgraphs.

#[allow(clippy::module_inception)]
mod flowchart;
mod link;
mod node;
mod style;
mod subgraph;
mod types;

pub use flowchart::*;
pub use link::*;
pub use node::*;
pub use style::*;
pub use subgraph::*;
pub use types::*;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::core::Diagram;

    #[test]
    fn test_full_document() {
        let mut chart = Flowchart::new();
        chart.set_direction(Direction::LeftRight);

        let critical = chart
            .add_class("critical")
            .set_style(NodeStyle::new().with_fill("#f96").with_stroke("#333"))
            .name()
            .to_string();

        let start = chart
            .add_node("Start")
            .set_shape(NodeShape::Stadium)
            .id()
            .clone();
        let check = chart
            .add_node("Check")
            .set_shape(NodeShape::Rhombus)
            .set_class_name(&critical)
            .id()
            .clone();

        let workers = chart.add_subgraph("Workers");
        workers.set_direction(Direction::TopToBottom);
        let worker = workers.add_node("Worker").id().clone();
        let workers_id = workers.id().clone();

        chart.add_link(&start, &check);
        chart
            .add_link(&check, &workers_id)
            .set_text("ok")
            .set_shape(LineStyle::Thick);
        chart
            .add_link(&worker, &start)
            .set_shape(LineStyle::Dotted)
            .set_length(1);

        let expected = "flowchart LR\n\
            \tclassDef critical fill:#f96,stroke:#333\n\
            \t0([\"Start\"])\n\
            \t1{\"Check\"}:::critical\n\
            \tsubgraph 2 [Workers]\n\
            \t\tdirection TB\n\
            \t\t3(\"Worker\")\n\
            \tend\n\
            \t0 --> 1\n\
            \t1 ==>|ok| 2\n\
            \t3 -..-> 0\n";

        assert_eq!(chart.render(), expected);
        assert!(chart.validate().is_ok());
    }
}
