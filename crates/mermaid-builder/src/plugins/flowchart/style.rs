//! Node styles and style classes

use std::fmt;

use tracing::trace;

/// Inline style for a node or a class definition
///
/// Unset properties are omitted. Properties render in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Stroke width in pixels
    pub stroke_width: Option<u32>,
    /// Text color
    pub color: Option<String>,
    pub stroke_dasharray: Option<String>,
}

impl NodeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut props: Vec<String> = Vec::new();
        if let Some(fill) = &self.fill {
            props.push(format!("fill:{}", fill));
        }
        if let Some(stroke) = &self.stroke {
            props.push(format!("stroke:{}", stroke));
        }
        if let Some(width) = self.stroke_width {
            props.push(format!("stroke-width:{}px", width));
        }
        if let Some(color) = &self.color {
            props.push(format!("color:{}", color));
        }
        if let Some(dash) = &self.stroke_dasharray {
            props.push(format!("stroke-dasharray:{}", dash));
        }
        f.write_str(&props.join(","))
    }
}

/// A named style class (`classDef`)
///
/// Nodes refer to a class by name; the class does not own its nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    style: NodeStyle,
}

impl Class {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: NodeStyle::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: NodeStyle) -> &mut Self {
        trace!(class = %self.name, style = %style, "Setting class style");
        self.style = style;
        self
    }

    /// Render the `classDef` line, or nothing if the class has no style
    pub fn render(&self, indent: &str) -> String {
        if self.style.is_empty() {
            trace!(class = %self.name, "Skipping class without style");
            return String::new();
        }
        format!("{}classDef {} {}\n", indent, self.name, self.style)
    }
}
