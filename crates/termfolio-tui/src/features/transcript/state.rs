//! Transcript state: the list of entries and the scroll position.

use termfolio_core::Output;
use termfolio_core::dispatch::welcome_output;

/// One block of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// The submitted line as typed; `None` for the welcome banner.
    pub command: Option<String>,
    pub output: Output,
}

impl TranscriptEntry {
    pub fn welcome() -> Self {
        Self {
            command: None,
            output: welcome_output(),
        }
    }

    pub fn command(line: impl Into<String>, output: Output) -> Self {
        Self {
            command: Some(line.into()),
            output,
        }
    }
}

/// Where the viewport sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Pinned to the newest line.
    FollowLatest,
    /// Pinned to a line offset from the top.
    Anchored { offset: usize },
}

#[derive(Debug, Clone)]
pub struct TranscriptState {
    entries: Vec<TranscriptEntry>,
    scroll: ScrollMode,
    /// Wrapped line count from the last layout pass.
    total_lines: usize,
    /// Visible rows from the last layout pass.
    viewport_height: usize,
    /// Width `total_lines` was wrapped at; `None` once entries change.
    measured_width: Option<usize>,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    /// Creates a transcript holding only the welcome banner.
    pub fn new() -> Self {
        Self {
            entries: vec![TranscriptEntry::welcome()],
            scroll: ScrollMode::FollowLatest,
            total_lines: 0,
            viewport_height: 0,
            measured_width: None,
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll
    }

    /// Appends an entry and jumps to the newest line.
    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.scroll = ScrollMode::FollowLatest;
        self.measured_width = None;
    }

    /// Drops every entry and shows the welcome banner again.
    pub fn reset(&mut self) {
        self.entries = vec![TranscriptEntry::welcome()];
        self.scroll = ScrollMode::FollowLatest;
        self.measured_width = None;
    }

    /// Line count from the last layout pass, if it is still valid for `width`.
    pub fn measured_lines(&self, width: usize) -> Option<usize> {
        (self.measured_width == Some(width)).then_some(self.total_lines)
    }

    /// Marks the next `update_layout` count as wrapped at `width`.
    pub fn set_measured_width(&mut self, width: usize) {
        self.measured_width = Some(width);
    }

    /// Records the result of a layout pass and clamps the scroll position.
    pub fn update_layout(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;
        if let ScrollMode::Anchored { offset } = self.scroll {
            self.anchor(offset);
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    /// First visible line.
    pub fn scroll_offset(&self) -> usize {
        self.offset_within(self.total_lines, self.viewport_height)
    }

    /// First visible line for an explicit layout.
    ///
    /// Render uses this with the line count it just built, which can be ahead
    /// of the last layout pass right after an append.
    pub fn offset_within(&self, total_lines: usize, viewport_height: usize) -> usize {
        let max_offset = total_lines.saturating_sub(viewport_height);
        match self.scroll {
            ScrollMode::FollowLatest => max_offset,
            ScrollMode::Anchored { offset } => offset.min(max_offset),
        }
    }

    /// Lines hidden below the viewport.
    pub fn lines_below(&self) -> usize {
        self.max_offset() - self.scroll_offset()
    }

    /// Anchors at `offset`, falling back to following once the bottom is reached.
    fn anchor(&mut self, offset: usize) {
        self.scroll = if offset >= self.max_offset() {
            ScrollMode::FollowLatest
        } else {
            ScrollMode::Anchored { offset }
        };
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let offset = self.scroll_offset().saturating_sub(lines);
        // Everything fits: stay in follow mode.
        if self.max_offset() > 0 {
            self.scroll = ScrollMode::Anchored { offset };
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let offset = self.scroll_offset().saturating_add(lines);
        self.anchor(offset);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }
}
