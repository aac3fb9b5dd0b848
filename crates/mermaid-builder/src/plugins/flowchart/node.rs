//! Flowchart nodes

use tracing::trace;

use super::{Class, NodeShape, NodeStyle};
use crate::core::ElementId;

/// A leaf element of a flowchart
///
/// Created through [`Flowchart::add_node`](super::Flowchart::add_node) or
/// [`Subgraph::add_node`](super::Subgraph::add_node); the identifier is
/// fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: ElementId,
    text: String,
    shape: NodeShape,
    style: Option<NodeStyle>,
    class: Option<String>,
}

impl Node {
    pub(crate) fn new(id: ElementId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            shape: NodeShape::default(),
            style: None,
            class: None,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn style(&self) -> Option<&NodeStyle> {
        self.style.as_ref()
    }

    /// Name of the class this node refers to
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Set the display text. It is emitted verbatim; escaping is up to the caller.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_shape(&mut self, shape: NodeShape) -> &mut Self {
        trace!(node_id = %self.id, ?shape, "Setting node shape");
        self.shape = shape;
        self
    }

    pub fn set_style(&mut self, style: NodeStyle) -> &mut Self {
        self.style = Some(style);
        self
    }

    pub fn set_class(&mut self, class: &Class) -> &mut Self {
        self.set_class_name(class.name())
    }

    pub fn set_class_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.class = Some(name.into());
        self
    }

    /// Render the definition line and, if styled, the style line
    ///
    /// A style with no properties is skipped.
    pub fn render(&self, indent: &str) -> String {
        let mut out = format!("{}{}{}", indent, self.id, self.shape.wrap(&self.text));
        if let Some(class) = &self.class {
            out.push_str(":::");
            out.push_str(class);
        }
        out.push('\n');

        if let Some(style) = self.style.as_ref().filter(|style| !style.is_empty()) {
            out.push_str(&format!("{}style {} {}\n", indent, self.id, style));
        }
        out
    }
}
