/// A styled span of text (UI-agnostic).
///
/// This is a minimal representation that can be converted to
/// ratatui Span/Line types at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

/// A line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }

    /// Appends text, merging into the last span when the style matches.
    pub fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(StyledSpan {
                text: text.to_string(),
                style,
            }),
        }
    }

    pub fn push_char(&mut self, ch: char, style: Style) {
        let mut buf = [0u8; 4];
        self.push(ch.encode_utf8(&mut buf), style);
    }

    /// Removes trailing whitespace, dropping spans left empty.
    pub fn trim_end(&mut self) {
        while let Some(last) = self.spans.last_mut() {
            let trimmed_len = last.text.trim_end().len();
            if trimmed_len > 0 {
                last.text.truncate(trimmed_len);
                return;
            }
            self.spans.pop();
        }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Semantic style identifiers (UI-agnostic).
///
/// These are translated to actual terminal styles by the renderer using the
/// active theme palette. This keeps the transcript module free of terminal
/// dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Default text color.
    Plain,
    /// Prompt before an echoed command.
    Prompt,
    /// Echoed command text.
    Command,
    /// Emphasized name or keyword (bold).
    Strong,
    /// Command usage (`help`).
    Code,
    /// Link label (underlined).
    Link,
    /// Link target shown after the label (dim).
    LinkTarget,
    /// List bullet.
    Bullet,
}
