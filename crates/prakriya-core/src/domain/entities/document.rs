//! Heading-structured documents.
//!
//! Sections carry no heading markers of their own; the marker for a section
//! (and for the trace blocks under it) is derived from its nesting depth when
//! the tree is rendered. Empty sections are dropped on insertion, so a
//! category combination that derived nothing never produces a heading.

use crate::domain::entities::trace::{TraceBlock, TraceBlocks};

/// A Markdown heading level, clamped to `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H2: HeadingLevel = HeadingLevel(2);

    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, 6))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One level deeper; stays at 6 once there.
    pub fn deeper(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn marker(self) -> String {
        "#".repeat(self.0 as usize)
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

/// Rewrite every level-2 heading marker in `content` to `level`.
///
/// Only markers that open a line (`## `) are touched; everything else is
/// copied through, including line endings.
pub fn relevel(content: &str, level: HeadingLevel) -> String {
    let marker = level.marker();
    content
        .split_inclusive('\n')
        .map(|line| match line.strip_prefix("## ") {
            Some(rest) => format!("{marker} {rest}"),
            None => line.to_string(),
        })
        .collect()
}

/// A heading with trace blocks and nested subsections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    title: String,
    blocks: Vec<TraceBlock>,
    children: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[TraceBlock] {
        &self.blocks
    }

    pub fn children(&self) -> &[Section] {
        &self.children
    }

    pub fn push_block(&mut self, block: TraceBlock) {
        self.blocks.push(block);
    }

    pub fn with_blocks(mut self, blocks: TraceBlocks) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Nest `child`, unless it holds no trace at any depth.
    pub fn push_child(&mut self, child: Section) {
        if !child.is_empty() {
            self.children.push(child);
        }
    }

    /// No blocks here or anywhere below.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.children.iter().all(Section::is_empty)
    }

    /// Total trace blocks in this subtree.
    pub fn block_count(&self) -> usize {
        self.blocks.len() + self.children.iter().map(Section::block_count).sum::<usize>()
    }

    /// Render with this section's heading at `level`; blocks and children
    /// go one level deeper.
    pub fn render(&self, level: HeadingLevel) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&format!("{} {}\n", level.marker(), self.title));
        }
        let inner = level.deeper();
        for block in &self.blocks {
            out.push_str(&block.render_at(inner));
        }
        for child in &self.children {
            out.push_str(&child.render(inner));
        }
        out
    }
}

/// A titled Markdown document, written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Render top-level sections at `##`.
    pub fn from_sections(title: impl Into<String>, sections: &[Section]) -> Self {
        let content = sections
            .iter()
            .map(|s| s.render(HeadingLevel::H2))
            .collect::<String>();
        Self::new(title, content)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block(heading: &str) -> TraceBlock {
        TraceBlock::new(heading, vec!["step".into()])
    }

    #[test]
    fn heading_level_clamps() {
        assert_eq!(HeadingLevel::new(0).get(), 1);
        assert_eq!(HeadingLevel::new(9).get(), 6);
        assert_eq!(HeadingLevel::new(6).deeper().get(), 6);
        assert_eq!(HeadingLevel::new(3).marker(), "###");
    }

    #[test]
    fn relevel_touches_only_line_start_markers() {
        let content = "## a\nx ## y\n## b\n";
        assert_eq!(relevel(content, HeadingLevel::new(4)), "#### a\nx ## y\n#### b\n");
    }

    #[test]
    fn relevel_leaves_deeper_headings_alone() {
        let content = "### keep\n## move\n";
        assert_eq!(relevel(content, HeadingLevel::new(5)), "### keep\n##### move\n");
    }

    #[test]
    fn empty_children_are_dropped() {
        let mut root = Section::new("root");
        root.push_child(Section::new("empty"));
        let mut nested = Section::new("outer");
        nested.push_child(Section::new("inner-empty"));
        root.push_child(nested);
        assert!(root.children().is_empty());
        assert!(root.is_empty());
    }

    #[test]
    fn nesting_sets_heading_depth() {
        let mut lakara = Section::new("लट्");
        let mut leaf = Section::new("प्रथमपुरुषः एकवचनम्");
        leaf.push_block(block("भवति"));
        lakara.push_child(leaf);
        let mut prayoga = Section::new("कर्तरि");
        prayoga.push_child(lakara);

        let doc = Document::from_sections("भू", &[prayoga]);
        assert_eq!(
            doc.content(),
            "## कर्तरि\n### लट्\n#### प्रथमपुरुषः एकवचनम्\n##### भवति\nstep\n"
        );
    }

    #[test]
    fn block_count_sums_subtree() {
        let mut root = Section::new("r");
        root.push_block(block("a"));
        let mut child = Section::new("c");
        child.push_block(block("b"));
        child.push_block(block("c"));
        root.push_child(child);
        assert_eq!(root.block_count(), 3);
    }

    proptest! {
        #[test]
        fn relevel_moves_every_level_two_marker(
            titles in proptest::collection::vec("[a-z]{1,8}", 0..10),
            depth in 3u8..=6,
        ) {
            let content: String = titles.iter().map(|t| format!("## {t}\nbody\n")).collect();
            let out = relevel(&content, HeadingLevel::new(depth));
            let marker = format!("{} ", "#".repeat(depth as usize));
            let moved = out.lines().filter(|l| l.starts_with(&marker)).count();
            let left = out.lines().filter(|l| l.starts_with("## ")).count();
            prop_assert_eq!(moved, titles.len());
            prop_assert_eq!(left, 0);
        }
    }
}
