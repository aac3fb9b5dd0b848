//! Subgraphs: the recursive container of a flowchart
//!
//! A subgraph owns its nodes, nested subgraphs and links. Every subgraph in
//! one flowchart shares the flowchart's [`IdSource`], so identifiers stay
//! unique across the whole tree no matter how deep it goes.

use std::sync::Arc;

use tracing::{trace, warn};

use super::{Direction, Link, Node};
use crate::core::{DiagramError, ElementId, IdSource};

/// One level of indentation in rendered output
pub const INDENT: &str = "\t";

/// Deepest allowed subgraph nesting; top-level subgraphs are at depth 1
pub const MAX_SUBGRAPH_DEPTH: usize = 64;

/// A titled, nestable group of nodes, subgraphs and links
#[derive(Debug, Clone)]
pub struct Subgraph {
    id: ElementId,
    title: String,
    direction: Option<Direction>,
    nodes: Vec<Node>,
    subgraphs: Vec<Subgraph>,
    links: Vec<Link>,
    ids: Arc<dyn IdSource>,
    depth: usize,
}

impl Subgraph {
    pub(crate) fn new(ids: Arc<dyn IdSource>, title: impl Into<String>, depth: usize) -> Self {
        let id = ids.next_id();
        let title = title.into();
        trace!(subgraph_id = %id, subgraph_title = %title, depth, "Creating subgraph");
        Self {
            id,
            title,
            direction: None,
            nodes: Vec::new(),
            subgraphs: Vec::new(),
            links: Vec::new(),
            ids,
            depth,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Nesting depth; top-level subgraphs are at depth 1
    pub fn depth(&self) -> usize {
        self.depth
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

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    /// Add a node rendered inside this subgraph
    pub fn add_node(&mut self, text: impl Into<String>) -> &mut Node {
        let node = Node::new(self.ids.next_id(), text);
        trace!(subgraph_id = %self.id, node_id = %node.id(), "Adding node to subgraph");
        self.nodes.push(node);
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Add a nested subgraph
    ///
    /// The child draws its identifier from the same source as this subgraph.
    /// Fails if the child would be nested deeper than [`MAX_SUBGRAPH_DEPTH`].
    pub fn add_subgraph(
        &mut self,
        title: impl Into<String>,
    ) -> Result<&mut Subgraph, DiagramError> {
        let depth = self.depth + 1;
        if depth > MAX_SUBGRAPH_DEPTH {
            warn!(
                parent_id = %self.id,
                depth,
                max = MAX_SUBGRAPH_DEPTH,
                "Rejecting nested subgraph"
            );
            return Err(DiagramError::nesting_too_deep(depth, MAX_SUBGRAPH_DEPTH));
        }

        let child = Subgraph::new(Arc::clone(&self.ids), title, depth);
        self.subgraphs.push(child);
        let last = self.subgraphs.len() - 1;
        Ok(&mut self.subgraphs[last])
    }

    /// Add a link scoped to this subgraph
    pub fn add_link(&mut self, from: impl Into<ElementId>, to: impl Into<ElementId>) -> &mut Link {
        let link = Link::new(from.into(), to.into());
        trace!(
            subgraph_id = %self.id,
            from = %link.from(),
            to = %link.to(),
            "Adding link to subgraph"
        );
        self.links.push(link);
        let last = self.links.len() - 1;
        &mut self.links[last]
    }

    /// Render this subgraph and everything beneath it
    ///
    /// The opening and closing lines sit at `indent`; this subgraph's own
    /// direction, nodes and links sit one level deeper. Nested subgraphs
    /// render before this subgraph's links.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent);
        out
    }

    fn render_into(&self, out: &mut String, indent: &str) {
        let inner = format!("{}{}", indent, INDENT);

        out.push_str(&format!("{}subgraph {} [{}]\n", indent, self.id, self.title));

        if let Some(direction) = self.direction {
            out.push_str(&format!("{}direction {}\n", inner, direction));
        }

        for node in &self.nodes {
            out.push_str(&node.render(&inner));
        }

        for child in &self.subgraphs {
            child.render_into(out, &inner);
        }

        for link in &self.links {
            out.push_str(&link.render(&inner));
        }

        out.push_str(&format!("{}end\n", indent));
    }

    /// Visit this subgraph and all nested subgraphs, depth first in insertion order
    pub(crate) fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Subgraph)) {
        visit(self);
        for child in &self.subgraphs {
            child.walk(visit);
        }
    }
}
