//! Markdown fence wrapping
//!
//! Wraps rendered diagram text in a ```` ```mermaid ```` code fence so it can
//! be embedded in Markdown documents.

/// Opening line of a Mermaid code fence
pub const MARKDOWN_FENCE_START: &str = "```mermaid\n";

/// Closing line of a Mermaid code fence
pub const MARKDOWN_FENCE_END: &str = "```\n";

/// Wrap `body` in a Mermaid code fence
pub fn wrap(body: &str) -> String {
    let mut out =
        String::with_capacity(MARKDOWN_FENCE_START.len() + body.len() + MARKDOWN_FENCE_END.len());
    out.push_str(MARKDOWN_FENCE_START);
    out.push_str(body);
    out.push_str(MARKDOWN_FENCE_END);
    out
}

/// Strip a Mermaid code fence, returning the body
///
/// Returns `None` if `text` is not exactly one fenced block.
pub fn unwrap(text: &str) -> Option<&str> {
    text.strip_prefix(MARKDOWN_FENCE_START)?
        .strip_suffix(MARKDOWN_FENCE_END)
}

/// Whether `text` is wrapped in a Mermaid code fence
pub fn is_fenced(text: &str) -> bool {
    unwrap(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let wrapped = wrap("flowchart TB\n");
        assert_eq!(wrapped, "```mermaid\nflowchart TB\n```\n");
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(
            unwrap("```mermaid\nflowchart LR\n```\n"),
            Some("flowchart LR\n")
        );
        assert_eq!(unwrap("flowchart LR\n"), None);
        assert_eq!(unwrap("```mermaid\nflowchart LR\n"), None);
    }

    #[test]
    fn test_is_fenced() {
        assert!(is_fenced(&wrap("")));
        assert!(!is_fenced("```\nplain\n```\n"));
    }
}
