//! Sūtra table loader.
//!
//! Rule texts come as tab-separated lines:
//!
//! ```text
//! source<TAB>code<TAB>text
//! Ashtadhyayi	1.1.1	vfdDirAdEc
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. A directory is
//! loaded by reading every `*.tsv` file below it, in path order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use prakriya_core::{
    application::ApplicationError,
    domain::{Sutra, SutraTable},
    error::{PrakriyaError, PrakriyaResult},
};

/// Parse TSV content. Malformed lines are skipped with a warning.
pub fn parse_sutras(content: &str) -> SutraTable {
    let mut table = SutraTable::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(code), Some(text)) if !source.is_empty() && !code.is_empty() => {
                table.insert(Sutra {
                    source: source.to_string(),
                    code: code.to_string(),
                    text: text.to_string(),
                });
            }
            _ => warn!(line = number + 1, "Skipping malformed sutra line"),
        }
    }
    table
}

/// Load one TSV file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_sutra_file(path: &Path) -> PrakriyaResult<SutraTable> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;
    let table = parse_sutras(&content);
    debug!(sutras = table.len(), "Loaded sutra file");
    Ok(table)
}

/// Load every `*.tsv` under `dir`.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_sutra_dir(dir: &Path) -> PrakriyaResult<SutraTable> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| load_error(dir, e.to_string()))?;
        let is_tsv = entry.path().extension().is_some_and(|ext| ext == "tsv");
        if entry.file_type().is_file() && is_tsv {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut table = SutraTable::new();
    for file in &files {
        table.merge(load_sutra_file(file)?);
    }
    debug!(files = files.len(), sutras = table.len(), "Loaded sutra directory");
    Ok(table)
}

/// Load from a file or a directory, whichever `path` is.
pub fn load_sutras(path: &Path) -> PrakriyaResult<SutraTable> {
    if path.is_dir() {
        load_sutra_dir(path)
    } else {
        load_sutra_file(path)
    }
}

fn load_error(path: &Path, reason: String) -> PrakriyaError {
    ApplicationError::DataLoad {
        what: "sutra table",
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_lines_and_skips_noise() {
        let table = parse_sutras(
            "# header\n\nAshtadhyayi\t1.1.1\tvfdDirAdEc\r\nbroken line\nDhatupatha\t01.0001\tBU sattAyAm\n",
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Ashtadhyayi", "1.1.1"), Some("vfdDirAdEc"));
        assert_eq!(table.get("Dhatupatha", "01.0001"), Some("BU sattAyAm"));
    }

    #[test]
    fn text_may_contain_tabs() {
        let table = parse_sutras("A\t1\tone\ttwo\n");
        assert_eq!(table.get("A", "1"), Some("one\ttwo"));
    }

    #[test]
    fn directory_loads_nested_tsv_files_only() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("a.tsv"), "Ashtadhyayi\t1.1.1\tvfdDirAdEc\n").unwrap();
        fs::write(nested.join("b.tsv"), "Ashtadhyayi\t1.1.2\tadeN guRaH\n").unwrap();
        fs::write(temp.path().join("notes.txt"), "Ashtadhyayi\t9.9.9\tignored\n").unwrap();

        let table = load_sutras(temp.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get("Ashtadhyayi", "9.9.9").is_none());
    }

    #[test]
    fn missing_file_is_a_data_load_error() {
        let err = load_sutras(Path::new("/does/not/exist.tsv")).unwrap_err();
        assert!(err.to_string().contains("sutra table"));
    }
}
