//! Intermediate representation for rendered code.

/// A piece of code prior to indentation.
///
/// Nodes describe their output as fragments; [`CodeBuilder`](super::CodeBuilder)
/// turns fragments into indented lines, so no node ever computes indentation
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line at the current depth.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments one level deeper.
    Indent(Vec<CodeFragment>),
    /// Fragments at the current depth.
    Sequence(Vec<CodeFragment>),
    /// A `//` comment line.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// An Allman-style braced block: `header`, `{`, indented body, `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::Block {
                header: "{".to_string(),
                body,
                close: Some("}".to_string()),
            },
        ])
    }

    /// Join groups of fragments with one blank line between groups.
    ///
    /// Empty groups are skipped, so no leading, trailing or doubled blank
    /// lines appear.
    pub fn separated(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !out.is_empty() {
                out.push(Self::Blank);
            }
            out.extend(group);
        }
        out
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render to indented lines starting at depth zero.
    fn render(&self) -> Vec<String> {
        let mut builder = super::CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_skips_empty_groups() {
        let out = CodeFragment::separated(vec![
            vec![],
            vec![CodeFragment::line("a")],
            vec![],
            vec![CodeFragment::line("b"), CodeFragment::line("c")],
            vec![],
        ]);
        assert_eq!(
            out,
            vec![
                CodeFragment::line("a"),
                CodeFragment::Blank,
                CodeFragment::line("b"),
                CodeFragment::line("c"),
            ]
        );
    }

    #[test]
    fn test_separated_all_empty() {
        assert!(CodeFragment::separated(vec![vec![], vec![]]).is_empty());
    }
}
