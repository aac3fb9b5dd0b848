//! Flowchart vocabulary
//!
//! Directions, curve styles, node shapes, line styles and arrow markers.
//! Every literal token here is what Mermaid expects, byte for byte.

use std::fmt;

/// Flow direction of a flowchart or subgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (`TB`)
    #[default]
    TopToBottom,
    /// Bottom to top (`BT`)
    BottomUp,
    /// Right to left (`RL`)
    RightLeft,
    /// Left to right (`LR`)
    LeftRight,
}

impl Direction {
    /// Mermaid keyword for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::BottomUp => "BT",
            Direction::RightLeft => "RL",
            Direction::LeftRight => "LR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge curve interpolation, set through the flowchart init directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveStyle {
    Basis,
    BumpX,
    BumpY,
    Cardinal,
    CatmullRom,
    Linear,
    MonotoneX,
    MonotoneY,
    Natural,
    Step,
    StepAfter,
    StepBefore,
}

impl CurveStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveStyle::Basis => "basis",
            CurveStyle::BumpX => "bumpX",
            CurveStyle::BumpY => "bumpY",
            CurveStyle::Cardinal => "cardinal",
            CurveStyle::CatmullRom => "catmullRom",
            CurveStyle::Linear => "linear",
            CurveStyle::MonotoneX => "monotoneX",
            CurveStyle::MonotoneY => "monotoneY",
            CurveStyle::Natural => "natural",
            CurveStyle::Step => "step",
            CurveStyle::StepAfter => "stepAfter",
            CurveStyle::StepBefore => "stepBefore",
        }
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node shapes
///
/// Each shape is a template with one slot for the node text; the text is
/// always quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    /// `["text"]`
    Rectangle,
    /// `("text")`
    #[default]
    RoundEdges,
    /// `(["text"])`
    Stadium,
    /// `[["text"]]`
    Subroutine,
    /// `[("text")]`
    Cylindrical,
    /// `(("text"))`
    Circle,
    /// `>"text"]`
    Asymmetric,
    /// `{"text"}`
    Rhombus,
    /// `{{"text"}}`
    Hexagon,
    /// `[/"text"/]`
    Parallelogram,
    /// `[\"text"\]`
    ParallelogramAlt,
    /// `[/"text"\]`
    Trapezoid,
    /// `[\"text"/]`
    TrapezoidAlt,
    /// `((("text")))`
    DoubleCircle,
}

impl NodeShape {
    /// Opening and closing delimiters around the quoted text
    fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rectangle => ("[", "]"),
            NodeShape::RoundEdges => ("(", ")"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Subroutine => ("[[", "]]"),
            NodeShape::Cylindrical => ("[(", ")]"),
            NodeShape::Circle => ("((", "))"),
            NodeShape::Asymmetric => (">", "]"),
            NodeShape::Rhombus => ("{", "}"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Parallelogram => ("[/", "/]"),
            NodeShape::ParallelogramAlt => ("[\\", "\\]"),
            NodeShape::Trapezoid => ("[/", "\\]"),
            NodeShape::TrapezoidAlt => ("[\\", "/]"),
            NodeShape::DoubleCircle => ("(((", ")))"),
        }
    }

    /// Substitute `text` into this shape's template
    pub fn wrap(&self, text: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{}\"{}\"{}", open, text, close)
    }
}

/// Line style of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LineStyle {
    /// `---`
    #[default]
    Open,
    /// `-.-`
    Dotted,
    /// `===`
    Thick,
    /// `~~~`
    Invisible,
}

impl LineStyle {
    /// Glyph repeated to lengthen the line
    pub fn extension_glyph(&self) -> char {
        match self {
            LineStyle::Open => '-',
            LineStyle::Dotted => '.',
            LineStyle::Thick => '=',
            LineStyle::Invisible => '~',
        }
    }

    /// Render the line body with `extension` spliced in
    ///
    /// A head marker takes the place of the last glyph on open and thick
    /// lines (`-->`, `==>`), but follows the full body of a dotted line
    /// (`-.->`).
    pub fn render(&self, extension: &str, headed: bool) -> String {
        match (self, headed) {
            (LineStyle::Open, true) => format!("--{}", extension),
            (LineStyle::Open, false) => format!("---{}", extension),
            (LineStyle::Dotted, _) => format!("-.{}-", extension),
            (LineStyle::Thick, true) => format!("=={}", extension),
            (LineStyle::Thick, false) => format!("==={}", extension),
            (LineStyle::Invisible, _) => format!("~~~{}", extension),
        }
    }
}

/// Marker drawn at either end of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ArrowHead {
    #[default]
    None,
    /// `>` at the head, `<` at the tail
    Arrow,
    /// `o`
    Circle,
    /// `x`
    Cross,
}

impl ArrowHead {
    /// Marker text when placed after the line
    pub fn as_head(&self) -> &'static str {
        match self {
            ArrowHead::None => "",
            ArrowHead::Arrow => ">",
            ArrowHead::Circle => "o",
            ArrowHead::Cross => "x",
        }
    }

    /// Marker text when placed before the line
    pub fn as_tail(&self) -> &'static str {
        match self {
            ArrowHead::None => "",
            ArrowHead::Arrow => "<",
            ArrowHead::Circle => "o",
            ArrowHead::Cross => "x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::TopToBottom.to_string(), "TB");
        assert_eq!(Direction::BottomUp.to_string(), "BT");
        assert_eq!(Direction::RightLeft.to_string(), "RL");
        assert_eq!(Direction::LeftRight.to_string(), "LR");
        assert_eq!(Direction::default(), Direction::TopToBottom);
    }

    #[test]
    fn test_curve_style_display() {
        assert_eq!(CurveStyle::Basis.to_string(), "basis");
        assert_eq!(CurveStyle::CatmullRom.to_string(), "catmullRom");
        assert_eq!(CurveStyle::StepBefore.to_string(), "stepBefore");
    }

    #[test]
    fn test_node_shape_templates() {
        assert_eq!(NodeShape::RoundEdges.wrap("Start"), "(\"Start\")");
        assert_eq!(NodeShape::Rectangle.wrap("x"), "[\"x\"]");
        assert_eq!(NodeShape::Stadium.wrap("x"), "([\"x\"])");
        assert_eq!(NodeShape::Subroutine.wrap("x"), "[[\"x\"]]");
        assert_eq!(NodeShape::Cylindrical.wrap("x"), "[(\"x\")]");
        assert_eq!(NodeShape::Circle.wrap("x"), "((\"x\"))");
        assert_eq!(NodeShape::Asymmetric.wrap("x"), ">\"x\"]");
        assert_eq!(NodeShape::Rhombus.wrap("x"), "{\"x\"}");
        assert_eq!(NodeShape::Hexagon.wrap("x"), "{{\"x\"}}");
        assert_eq!(NodeShape::Parallelogram.wrap("x"), "[/\"x\"/]");
        assert_eq!(NodeShape::ParallelogramAlt.wrap("x"), "[\\\"x\"\\]");
        assert_eq!(NodeShape::Trapezoid.wrap("x"), "[/\"x\"\\]");
        assert_eq!(NodeShape::TrapezoidAlt.wrap("x"), "[\\\"x\"/]");
        assert_eq!(NodeShape::DoubleCircle.wrap("x"), "(((\"x\")))");
    }

    #[test]
    fn test_line_style_render() {
        assert_eq!(LineStyle::Open.render("", false), "---");
        assert_eq!(LineStyle::Open.render("", true), "--");
        assert_eq!(LineStyle::Dotted.render("", false), "-.-");
        assert_eq!(LineStyle::Dotted.render("", true), "-.-");
        assert_eq!(LineStyle::Thick.render("", false), "===");
        assert_eq!(LineStyle::Thick.render("", true), "==");
        assert_eq!(LineStyle::Invisible.render("", false), "~~~");
        assert_eq!(LineStyle::Dotted.render("..", true), "-...-");
        assert_eq!(LineStyle::Open.render("--", false), "-----");
    }

    #[test]
    fn test_arrow_markers() {
        assert_eq!(ArrowHead::Arrow.as_head(), ">");
        assert_eq!(ArrowHead::Arrow.as_tail(), "<");
        assert_eq!(ArrowHead::Circle.as_tail(), "o");
        assert_eq!(ArrowHead::Cross.as_head(), "x");
        assert_eq!(ArrowHead::None.as_head(), "");
    }
}
