/// Placeholder shown in a box that has no text yet.
pub const DEFAULT_PLACEHOLDER: &str = "Empty Sticky Note";

/// One editable box on the board, bound to a single note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteElement {
    pub id: u64,
    pub value: String,
    pub placeholder: String,
}

impl NoteElement {
    /// The text a reader sees: the value, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }

    /// Plain-text rendering of the box.
    pub fn render(&self) -> String {
        let mut out = format!("[{}]\n", self.id);
        for line in self.display_text().lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
