//! Markdown documents with TOML front matter.
//!
//! ```text
//! +++
//! title = "चोरयति"
//! +++
//!
//! ## चोरयति
//! ...
//! ```

use std::{path::Path, sync::Arc};

use serde::Serialize;
use tracing::instrument;

use prakriya_core::{
    application::{
        ApplicationError,
        ports::{DocumentWriter, Filesystem},
    },
    domain::Document,
    error::PrakriyaResult,
};

const DELIMITER: &str = "+++";

#[derive(Debug, Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
}

/// Writes a document as `+++ front matter +++` followed by its body.
#[derive(Clone)]
pub struct MarkdownWriter {
    fs: Arc<dyn Filesystem>,
}

impl MarkdownWriter {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// The full file text for `document`.
    pub fn render(document: &Document) -> PrakriyaResult<String> {
        let front = toml::to_string(&FrontMatter {
            title: document.title(),
        })
        .map_err(|e| ApplicationError::RenderingFailed {
            reason: format!("front matter for '{}': {e}", document.title()),
        })?;

        Ok(format!(
            "{DELIMITER}\n{front}{DELIMITER}\n\n{}",
            document.content()
        ))
    }
}

impl DocumentWriter for MarkdownWriter {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn write(&self, path: &Path, document: &Document) -> PrakriyaResult<()> {
        let text = Self::render(document)?;
        self.fs.write_file(path, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Title {
        title: String,
    }

    #[test]
    fn front_matter_carries_the_title() {
        let doc = Document::new("चोरयति", "## चोरयति\nline\n");
        let text = MarkdownWriter::render(&doc).unwrap();

        assert!(text.starts_with("+++\ntitle = "));
        assert!(text.ends_with("+++\n\n## चोरयति\nline\n"));

        let front = text
            .trim_start_matches("+++\n")
            .split("+++")
            .next()
            .unwrap();
        let parsed: Title = toml::from_str(front).unwrap();
        assert_eq!(parsed.title, "चोरयति");
    }

    #[test]
    fn quotes_in_titles_are_escaped() {
        let text = MarkdownWriter::render(&Document::new("a \"b\"", "")).unwrap();
        let front = text.trim_start_matches("+++\n").split("+++").next().unwrap();
        let parsed: Title = toml::from_str(front).unwrap();
        assert_eq!(parsed.title, "a \"b\"");
    }

    #[test]
    fn writes_through_the_filesystem_port() {
        let fs = Arc::new(MemoryFilesystem::new());
        fs.create_dir_all(Path::new("out")).unwrap();
        let writer = MarkdownWriter::new(fs.clone());

        writer
            .write(Path::new("out/x.md"), &Document::new("x", "body"))
            .unwrap();

        let written = fs.read_file(Path::new("out/x.md")).unwrap();
        assert!(written.ends_with("+++\n\nbody"));
    }
}
