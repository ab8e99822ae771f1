//! Formatted derivation traces.

use crate::domain::entities::document::{HeadingLevel, relevel};

/// Separator between step lines: a Markdown hard break.
pub const MD_NEWLINE: &str = "  \n";

/// One formatted derivation: a heading (the final form) and one line per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceBlock {
    heading: String,
    lines: Vec<String>,
}

impl TraceBlock {
    pub fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn step_count(&self) -> usize {
        self.lines.len()
    }

    /// Render at the canonical level 2: `## {heading}\n{lines}\n`.
    pub fn render(&self) -> String {
        format!("## {}\n{}\n", self.heading, self.lines.join(MD_NEWLINE))
    }

    /// Render nested under an outer heading.
    pub fn render_at(&self, level: HeadingLevel) -> String {
        relevel(&self.render(), level)
    }
}

/// Trace blocks keyed by heading, in first-insertion order.
///
/// Inserting a block whose heading is already present replaces the earlier
/// block in place: the last derivation with a given display text wins, at
/// the position of the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceBlocks {
    blocks: Vec<TraceBlock>,
}

impl TraceBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, returning the block that was replaced, if any.
    pub fn insert(&mut self, block: TraceBlock) -> Option<TraceBlock> {
        match self.blocks.iter_mut().find(|b| b.heading == block.heading) {
            Some(slot) => Some(std::mem::replace(slot, block)),
            None => {
                self.blocks.push(block);
                None
            }
        }
    }

    pub fn get(&self, heading: &str) -> Option<&TraceBlock> {
        self.blocks.iter().find(|b| b.heading == heading)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceBlock> {
        self.blocks.iter()
    }

    pub fn extend(&mut self, other: TraceBlocks) {
        for block in other {
            self.insert(block);
        }
    }
}

impl IntoIterator for TraceBlocks {
    type Item = TraceBlock;
    type IntoIter = std::vec::IntoIter<TraceBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TraceBlocks {
    type Item = &'a TraceBlock;
    type IntoIter = std::slice::Iter<'a, TraceBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl FromIterator<TraceBlock> for TraceBlocks {
    fn from_iter<I: IntoIterator<Item = TraceBlock>>(iter: I) -> Self {
        let mut blocks = Self::new();
        for block in iter {
            blocks.insert(block);
        }
        blocks
    }
}
