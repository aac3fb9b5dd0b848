//! The flowchart root aggregate

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, debug_span, trace, warn};

use super::{Class, CurveStyle, Direction, Link, Node, Subgraph, INDENT};
use crate::core::{Diagram, DiagramError, ElementId, IdSource, SequentialIds};

/// A Mermaid flowchart under construction
///
/// Owns the top-level classes, nodes, subgraphs and links, and the identifier
/// source shared with every subgraph created inside it. Rendering never
/// mutates the flowchart, so it can be rendered any number of times.
///
/// # Example
///
/// ```rust
/// use mermaid_builder::prelude::*;
///
/// let mut chart = Flowchart::new();
/// let start = chart.add_node("Start").id().clone();
/// let end = chart.add_node("End").id().clone();
/// chart.add_link(&start, &end).set_text("go");
///
/// assert_eq!(
///     chart.render(),
///     "flowchart TB\n\t0(\"Start\")\n\t1(\"End\")\n\t0 -->|go| 1\n"
/// );
/// ```
#[derive(Debug)]
pub struct Flowchart {
    title: Option<String>,
    direction: Direction,
    curve: Option<CurveStyle>,
    classes: Vec<Class>,
    nodes: Vec<Node>,
    subgraphs: Vec<Subgraph>,
    links: Vec<Link>,
    ids: Arc<dyn IdSource>,
    fenced: bool,
}

impl Default for Flowchart {
    fn default() -> Self {
        Self::new()
    }
}

impl Flowchart {
    /// Create an empty flowchart numbering elements from zero
    pub fn new() -> Self {
        Self::with_id_source(Arc::new(SequentialIds::new()))
    }

    /// Create an empty flowchart drawing identifiers from `ids`
    ///
    /// Sharing one source between flowcharts is allowed but makes their
    /// identifiers interleave.
    pub fn with_id_source(ids: Arc<dyn IdSource>) -> Self {
        Self {
            title: None,
            direction: Direction::default(),
            curve: None,
            classes: Vec::new(),
            nodes: Vec::new(),
            subgraphs: Vec::new(),
            links: Vec::new(),
            ids,
            fenced: false,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn curve(&self) -> Option<CurveStyle> {
        self.curve
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    pub fn set_curve(&mut self, curve: CurveStyle) -> &mut Self {
        self.curve = Some(curve);
        self
    }

    pub fn enable_fence(&mut self) -> &mut Self {
        self.fenced = true;
        self
    }

    pub fn disable_fence(&mut self) -> &mut Self {
        self.fenced = false;
        self
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn subgraphs(&self) -> &[Subgraph] {
        &self.subgraphs
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Add a style class
    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Class {
        let class = Class::new(name);
        trace!(class = %class.name(), "Adding class");
        self.classes.push(class);
        let last = self.classes.len() - 1;
        &mut self.classes[last]
    }

    /// Add a top-level node
    pub fn add_node(&mut self, text: impl Into<String>) -> &mut Node {
        let node = Node::new(self.ids.next_id(), text);
        trace!(node_id = %node.id(), node_text = %node.text(), "Adding node");
        self.nodes.push(node);
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Add a top-level subgraph sharing this flowchart's identifier source
    pub fn add_subgraph(&mut self, title: impl Into<String>) -> &mut Subgraph {
        let subgraph = Subgraph::new(Arc::clone(&self.ids), title, 1);
        self.subgraphs.push(subgraph);
        let last = self.subgraphs.len() - 1;
        &mut self.subgraphs[last]
    }

    /// Add a top-level link
    pub fn add_link(&mut self, from: impl Into<ElementId>, to: impl Into<ElementId>) -> &mut Link {
        let link = Link::new(from.into(), to.into());
        trace!(from = %link.from(), to = %link.to(), "Adding link");
        self.links.push(link);
        let last = self.links.len() - 1;
        &mut self.links[last]
    }

    /// Every subgraph at every depth, depth first in insertion order
    pub fn all_subgraphs(&self) -> Vec<&Subgraph> {
        let mut found = Vec::new();
        for subgraph in &self.subgraphs {
            subgraph.walk(&mut |sg| found.push(sg));
        }
        found
    }

    /// Identifiers of every node and subgraph, nested ones included
    ///
    /// Top-level nodes come first, then each subgraph followed by its nodes,
    /// depth first.
    pub fn element_ids(&self) -> Vec<&ElementId> {
        let mut ids: Vec<&ElementId> = self.nodes.iter().map(Node::id).collect();
        for subgraph in self.all_subgraphs() {
            ids.push(subgraph.id());
            ids.extend(subgraph.nodes().iter().map(Node::id));
        }
        ids
    }

    /// Find a node anywhere in the flowchart
    pub fn find_node(&self, id: &ElementId) -> Option<&Node> {
        self.nodes
            .iter()
            .chain(self.all_subgraphs().into_iter().flat_map(|sg| sg.nodes()))
            .find(|node| node.id() == id)
    }

    /// Find a subgraph anywhere in the flowchart
    pub fn find_subgraph(&self, id: &ElementId) -> Option<&Subgraph> {
        self.all_subgraphs().into_iter().find(|sg| sg.id() == id)
    }

    /// Check that every link, nested ones included, points at an element of
    /// this flowchart
    pub fn validate(&self) -> Result<(), DiagramError> {
        let known: HashSet<&ElementId> = self.element_ids().into_iter().collect();
        let nested = self.all_subgraphs().into_iter().flat_map(|sg| sg.links());

        for link in self.links.iter().chain(nested) {
            for endpoint in [link.from(), link.to()] {
                if !known.contains(endpoint) {
                    warn!(
                        endpoint = %endpoint,
                        from = %link.from(),
                        to = %link.to(),
                        "Link endpoint not found"
                    );
                    return Err(DiagramError::missing_endpoint(
                        endpoint.clone(),
                        link.from().clone(),
                        link.to().clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate, then render
    pub fn try_render(&self) -> Result<String, DiagramError> {
        self.validate()?;
        Ok(self.render())
    }
}

impl Diagram for Flowchart {
    fn render_body(&self) -> String {
        let span = debug_span!("render_flowchart", direction = %self.direction);
        let _enter = span.enter();

        let mut out = String::new();

        if let Some(title) = &self.title {
            out.push_str(&format!("---\ntitle: {}\n---\n\n", title));
        }

        if let Some(curve) = self.curve {
            out.push_str(&format!(
                "%%{{init: {{\"flowchart\": {{\"curve\": \"{}\"}}}}}}%%\n",
                curve
            ));
        }

        out.push_str(&format!("flowchart {}\n", self.direction));

        for class in &self.classes {
            out.push_str(&class.render(INDENT));
        }

        for node in &self.nodes {
            out.push_str(&node.render(INDENT));
        }

        for subgraph in &self.subgraphs {
            out.push_str(&subgraph.render(INDENT));
        }

        for link in &self.links {
            out.push_str(&link.render(INDENT));
        }

        debug!(
            classes = self.classes.len(),
            nodes = self.nodes.len(),
            subgraphs = self.subgraphs.len(),
            links = self.links.len(),
            bytes = out.len(),
            "Rendered flowchart"
        );
        out
    }

    fn is_fenced(&self) -> bool {
        self.fenced
    }
}

impl fmt::Display for Flowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixedIds;
    use crate::plugins::flowchart::NodeStyle;

    #[test]
    fn test_empty_flowchart() {
        assert_eq!(Flowchart::new().render(), "flowchart TB\n");
    }

    #[test]
    fn test_header_order() {
        let mut chart = Flowchart::new();
        chart
            .set_title("Pipeline")
            .set_curve(CurveStyle::Basis)
            .set_direction(Direction::LeftRight);
        assert_eq!(
            chart.render(),
            "---\ntitle: Pipeline\n---\n\n%%{init: {\"flowchart\": {\"curve\": \"basis\"}}}%%\nflowchart LR\n"
        );
    }

    #[test]
    fn test_section_order() {
        let mut chart = Flowchart::new();
        let a = chart.add_node("A").id().clone();
        let sg = chart.add_subgraph("group").id().clone();
        chart.add_link(&a, &sg);
        chart
            .add_class("hot")
            .set_style(NodeStyle::new().with_fill("red"));

        assert_eq!(
            chart.render(),
            "flowchart TB\n\
             \tclassDef hot fill:red\n\
             \t0(\"A\")\n\
             \tsubgraph 1 [group]\n\
             \tend\n\
             \t0 --> 1\n"
        );
    }

    #[test]
    fn test_node_refers_to_added_class() {
        let mut chart = Flowchart::new();
        let hot = chart
            .add_class("hot")
            .set_style(NodeStyle::new().with_fill("red"))
            .clone();
        chart.add_class("unused");
        chart.add_node("A").set_class(&hot);

        assert_eq!(
            chart.render(),
            "flowchart TB\n\
             \tclassDef hot fill:red\n\
             \t0(\"A\"):::hot\n"
        );
    }

    #[test]
    fn test_fence_toggle() {
        let mut chart = Flowchart::new();
        chart.enable_fence();
        assert_eq!(chart.render(), "```mermaid\nflowchart TB\n```\n");
        chart.disable_fence();
        assert_eq!(chart.render(), "flowchart TB\n");
    }

    #[test]
    fn test_display_matches_render() {
        let mut chart = Flowchart::new();
        chart.add_node("A");
        assert_eq!(chart.to_string(), chart.render());
    }

    #[test]
    fn test_custom_id_source() {
        let mut chart = Flowchart::with_id_source(Arc::new(PrefixedIds::new("n")));
        let a = chart.add_node("A").id().clone();
        let sg = chart.add_subgraph("S");
        let inner = sg.add_subgraph("T").unwrap().id().clone();
        assert_eq!(a.as_str(), "n0");
        assert_eq!(inner.as_str(), "n2");
    }

    #[test]
    fn test_validate_rejects_unknown_endpoint() {
        let mut chart = Flowchart::new();
        let a = chart.add_node("A").id().clone();
        chart.add_link(&a, "ghost");

        let err = chart.validate().unwrap_err();
        match err {
            DiagramError::MissingEndpoint { endpoint, .. } => {
                assert_eq!(endpoint.as_str(), "ghost")
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(chart.try_render().is_err());
    }

    #[test]
    fn test_validate_checks_nested_links() {
        let mut chart = Flowchart::new();
        let a = chart.add_node("A").id().clone();
        let outer = chart.add_subgraph("outer");
        let inner = outer.add_subgraph("inner").unwrap();
        inner.add_link(&a, "99");

        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_subgraph_endpoints() {
        let mut chart = Flowchart::new();
        let outer = chart.add_subgraph("outer");
        let outer_id = outer.id().clone();
        let inner_node = outer.add_node("x").id().clone();
        chart.add_link(&outer_id, &inner_node);

        assert!(chart.validate().is_ok());
        assert!(chart.try_render().is_ok());
    }

    #[test]
    fn test_find_nested_node() {
        let mut chart = Flowchart::new();
        let sg = chart.add_subgraph("outer");
        let id = sg.add_subgraph("inner").unwrap().add_node("deep").id().clone();

        assert_eq!(chart.find_node(&id).map(Node::text), Some("deep"));
        assert!(chart.find_subgraph(&ElementId::new("1")).is_some());
        assert!(chart.find_node(&ElementId::new("1")).is_none());
    }
}
