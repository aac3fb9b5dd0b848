//! Core diagram trait
//!
//! Every diagram kind renders itself to text. Fencing and file output are
//! shared and layered on top of [`Diagram::render_body`].

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{fence, DiagramError};

/// File extensions that are always written with a Markdown fence
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Core trait for renderable diagrams
pub trait Diagram {
    /// Render the diagram text without any fence
    fn render_body(&self) -> String;

    /// Whether [`Diagram::render`] wraps the output in a Markdown fence
    fn is_fenced(&self) -> bool;

    /// Render the diagram text, fenced if the diagram asks for it
    fn render(&self) -> String {
        let body = self.render_body();
        if self.is_fenced() {
            fence::wrap(&body)
        } else {
            body
        }
    }

    /// Render the diagram into a file
    ///
    /// Creates missing parent directories. Markdown files (`.md`,
    /// `.markdown`) are always fenced; other files follow
    /// [`Diagram::is_fenced`]. The diagram's own fence setting is not touched.
    fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), DiagramError>
    where
        Self: Sized,
    {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DiagramError::io_error(parent, e))?;
        }

        let fenced = self.is_fenced() || is_markdown(path);
        let body = self.render_body();
        let text = if fenced { fence::wrap(&body) } else { body };

        debug!(path = %path.display(), fenced, bytes = text.len(), "Writing diagram");
        fs::write(path, &text).map_err(|e| DiagramError::io_error(path, e))?;
        info!(path = %path.display(), "Diagram written");
        Ok(())
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        fenced: bool,
    }

    impl Diagram for Fixed {
        fn render_body(&self) -> String {
            "flowchart TB\n".to_string()
        }

        fn is_fenced(&self) -> bool {
            self.fenced
        }
    }

    #[test]
    fn test_render_respects_fence_toggle() {
        assert_eq!(Fixed { fenced: false }.render(), "flowchart TB\n");
        assert_eq!(
            Fixed { fenced: true }.render(),
            "```mermaid\nflowchart TB\n```\n"
        );
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("docs/flow.md")));
        assert!(is_markdown(Path::new("FLOW.MD")));
        assert!(is_markdown(Path::new("flow.markdown")));
        assert!(!is_markdown(Path::new("flow.mmd")));
        assert!(!is_markdown(Path::new("flow")));
    }
}
