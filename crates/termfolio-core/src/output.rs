//! Renderable command output.
//!
//! Commands produce an `Output` tree instead of preformatted text so that any
//! presenter can walk it: the TUI turns it into styled lines, `exec` mode
//! turns it into plain text.

/// Structured output of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A paragraph made of inline spans.
    Text(Vec<Inline>),
    /// A bulleted list; each item is itself an output block.
    List(Vec<Output>),
    /// A standalone link on its own line.
    Link(Link),
    /// A sequence of blocks rendered one after another.
    Composite(Vec<Output>),
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Strong(String),
    Code(String),
    Link(Link),
}

/// What following a link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Opens a page.
    External,
    /// Composes an email (`mailto:` target).
    Mail,
    /// Downloads a file.
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub target: String,
    pub kind: LinkKind,
}

impl Link {
    pub fn external(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            kind: LinkKind::External,
        }
    }

    pub fn mail(address: &str) -> Self {
        Self {
            label: address.to_string(),
            target: format!("mailto:{address}"),
            kind: LinkKind::Mail,
        }
    }

    pub fn download(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            kind: LinkKind::Download,
        }
    }

    /// Label followed by the target, unless the label already is the target.
    pub fn display_text(&self) -> String {
        if self.label == self.target {
            self.target.clone()
        } else {
            format!("{} <{}>", self.label, self.target)
        }
    }
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code(text.into())
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            Inline::Plain(text) | Inline::Strong(text) | Inline::Code(text) => out.push_str(text),
            Inline::Link(link) => out.push_str(&link.display_text()),
        }
    }
}

impl Output {
    /// A paragraph holding a single plain span.
    pub fn text(text: impl Into<String>) -> Self {
        Output::Text(vec![Inline::plain(text)])
    }

    /// A paragraph from inline spans.
    pub fn paragraph(spans: Vec<Inline>) -> Self {
        Output::Text(spans)
    }

    /// Output that renders nothing.
    pub fn empty() -> Self {
        Output::Composite(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Output::Text(spans) => spans.is_empty(),
            Output::List(items) => items.is_empty(),
            Output::Link(_) => false,
            Output::Composite(blocks) => blocks.iter().all(Output::is_empty),
        }
    }

    /// Renders the output as plain text lines (no styling).
    ///
    /// List items are prefixed with `- `; continuation lines of an item are
    /// indented by two spaces.
    pub fn to_plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.write_plain_lines(&mut lines);
        lines
    }

    /// Renders the output as plain text joined with newlines.
    pub fn to_plain_text(&self) -> String {
        self.to_plain_lines().join("\n")
    }

    fn write_plain_lines(&self, lines: &mut Vec<String>) {
        match self {
            Output::Text(spans) => {
                let mut line = String::new();
                for span in spans {
                    span.write_plain(&mut line);
                }
                lines.push(line);
            }
            Output::Link(link) => lines.push(link.display_text()),
            Output::List(items) => {
                for item in items {
                    for (idx, line) in item.to_plain_lines().into_iter().enumerate() {
                        if idx == 0 {
                            lines.push(format!("- {line}"));
                        } else {
                            lines.push(format!("  {line}"));
                        }
                    }
                }
            }
            Output::Composite(blocks) => {
                for block in blocks {
                    block.write_plain_lines(lines);
                }
            }
        }
    }
}
