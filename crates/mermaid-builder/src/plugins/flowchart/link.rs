//! Links between nodes and subgraphs

use tracing::trace;

use super::{ArrowHead, LineStyle};
use crate::core::ElementId;

/// A directed, styled connection between two elements
///
/// Endpoints are element identifiers, so a link always has both ends.
/// Whether those identifiers belong to the diagram is checked by
/// [`Flowchart::validate`](super::Flowchart::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    from: ElementId,
    to: ElementId,
    shape: LineStyle,
    head: ArrowHead,
    tail: ArrowHead,
    text: Option<String>,
    length: i64,
}

impl Link {
    pub(crate) fn new(from: ElementId, to: ElementId) -> Self {
        Self {
            from,
            to,
            shape: LineStyle::Open,
            head: ArrowHead::Arrow,
            tail: ArrowHead::None,
            text: None,
            length: 0,
        }
    }

    pub fn from(&self) -> &ElementId {
        &self.from
    }

    pub fn to(&self) -> &ElementId {
        &self.to
    }

    pub fn shape(&self) -> LineStyle {
        self.shape
    }

    pub fn head(&self) -> ArrowHead {
        self.head
    }

    pub fn tail(&self) -> ArrowHead {
        self.tail
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Set the label. Emitted verbatim between `|` delimiters.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn set_shape(&mut self, shape: LineStyle) -> &mut Self {
        self.shape = shape;
        self
    }

    pub fn set_head(&mut self, head: ArrowHead) -> &mut Self {
        self.head = head;
        self
    }

    pub fn set_tail(&mut self, tail: ArrowHead) -> &mut Self {
        self.tail = tail;
        self
    }

    /// Extra line glyphs to add. Zero or negative adds none.
    pub fn set_length(&mut self, length: i64) -> &mut Self {
        if length < 0 {
            trace!(
                from = %self.from,
                to = %self.to,
                length,
                "Negative link length, clamping to zero"
            );
        }
        self.length = length;
        self
    }

    /// Render the link as one line
    ///
    /// Invisible links carry no markers; `~~~` is their only form.
    pub fn render(&self, indent: &str) -> String {
        let extension: String = std::iter::repeat(self.shape.extension_glyph())
            .take(self.length.max(0) as usize)
            .collect();

        let label = match &self.text {
            Some(text) => format!("|{}|", text),
            None => String::new(),
        };

        let (tail, head) = match self.shape {
            LineStyle::Invisible => (ArrowHead::None, ArrowHead::None),
            _ => (self.tail, self.head),
        };

        format!(
            "{}{} {}{}{}{} {}\n",
            indent,
            self.from,
            tail.as_tail(),
            self.shape.render(&extension, head != ArrowHead::None),
            head.as_head(),
            label,
            self.to
        )
    }
}
