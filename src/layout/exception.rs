//! Root-cause-first rendering of error chains.

use crate::event::ErrorChain;

const WRAPPED_BY: &str = "Wrapped by: ";

/// Renders an [`ErrorChain`] as multi-line text, innermost cause first.
///
/// Each wrapping layer is introduced with `Wrapped by: `, stack frames are
/// indented `\tat` lines, and frames shared with the already-printed cause
/// are folded into a single `... N common frames omitted` line.
#[derive(Debug, Clone, Default)]
pub struct ExceptionRenderer {
    started: bool,
}

impl ExceptionRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self { started: false }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn stop(&mut self) {
        self.started = false;
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Produces the full rendering without a trailing newline.
    #[must_use]
    pub fn render(&self, error: &ErrorChain) -> String {
        let chain: Vec<&ErrorChain> = error.chain().collect();
        let mut out = String::new();

        for (index, link) in chain.iter().rev().enumerate() {
            if index > 0 {
                out.push('\n');
                out.push_str(WRAPPED_BY);
            }
            push_header(&mut out, link);

            let common = link
                .cause
                .as_deref()
                .map_or(0, |cause| common_frame_count(&link.frames, &cause.frames));
            let own = link.frames.len() - common;
            for frame in &link.frames[..own] {
                out.push_str("\n\tat ");
                out.push_str(frame);
            }
            if common > 0 {
                out.push_str(&format!("\n\t... {common} common frames omitted"));
            }
        }
        out
    }
}

fn push_header(out: &mut String, link: &ErrorChain) {
    match (&link.kind, link.message.is_empty()) {
        (Some(kind), true) => out.push_str(kind),
        (Some(kind), false) => {
            out.push_str(kind);
            out.push_str(": ");
            out.push_str(&link.message);
        }
        (None, _) => out.push_str(&link.message),
    }
}

/// Number of trailing frames shared between an error and its cause.
fn common_frame_count(frames: &[String], cause_frames: &[String]) -> usize {
    frames
        .iter()
        .rev()
        .zip(cause_frames.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn single_error_prints_header_and_frames() {
        let error = ErrorChain::new("disk offline").with_kind("io.Error")
            .with_frames(frames(&["read(store.rs:10)", "main(main.rs:3)"]));
        let renderer = ExceptionRenderer::new();
        assert_eq!(
            renderer.render(&error),
            "io.Error: disk offline\n\tat read(store.rs:10)\n\tat main(main.rs:3)"
        );
    }

    #[test]
    fn chain_prints_root_cause_first() {
        let root = ErrorChain::new("connection refused").with_kind("Db");
        let middle = ErrorChain::new("lookup failed").with_kind("Repo").caused_by(root);
        let outer = ErrorChain::new("request failed").with_kind("Api").caused_by(middle);

        let text = ExceptionRenderer::new().render(&outer);
        assert_eq!(
            text,
            "Db: connection refused\n\
             Wrapped by: Repo: lookup failed\n\
             Wrapped by: Api: request failed"
        );
    }

    #[test]
    fn shared_tail_frames_are_folded() {
        let root = ErrorChain::new("boom").with_kind("Low").with_frames(frames(&[
            "inner(a.rs:1)",
            "shared_one(b.rs:2)",
            "shared_two(c.rs:3)",
        ]));
        let outer = ErrorChain::new("wrapped boom").with_kind("High")
            .with_frames(frames(&[
                "outer(d.rs:9)",
                "shared_one(b.rs:2)",
                "shared_two(c.rs:3)",
            ]))
            .caused_by(root);

        let text = ExceptionRenderer::new().render(&outer);
        assert_eq!(
            text,
            "Low: boom\n\
             \tat inner(a.rs:1)\n\
             \tat shared_one(b.rs:2)\n\
             \tat shared_two(c.rs:3)\n\
             Wrapped by: High: wrapped boom\n\
             \tat outer(d.rs:9)\n\
             \t... 2 common frames omitted"
        );
    }

    #[test]
    fn fully_shared_frames_leave_only_the_omitted_line() {
        let shared = frames(&["handler(h.rs:5)", "main(m.rs:1)"]);
        let root = ErrorChain::new("cause").with_kind("Inner").with_frames(shared.clone());
        let outer = ErrorChain::new("effect").with_kind("Outer")
            .with_frames(shared)
            .caused_by(root);

        let text = ExceptionRenderer::new().render(&outer);
        assert_eq!(
            text,
            "Inner: cause\n\
             \tat handler(h.rs:5)\n\
             \tat main(m.rs:1)\n\
             Wrapped by: Outer: effect\n\
             \t... 2 common frames omitted"
        );
    }

    #[test]
    fn kindless_error_prints_message_alone() {
        let error = ErrorChain::new("plain failure");
        assert_eq!(ExceptionRenderer::new().render(&error), "plain failure");
    }

    #[test]
    fn kind_without_message_prints_kind_alone() {
        let error = ErrorChain::new("").with_kind("TimeoutError");
        assert_eq!(ExceptionRenderer::new().render(&error), "TimeoutError");
    }

    #[test]
    fn no_trailing_newline() {
        let error = ErrorChain::new("x").with_frames(frames(&["f(a.rs:1)"]));
        let text = ExceptionRenderer::new().render(&error);
        assert!(!text.ends_with('\n'));
    }
}
