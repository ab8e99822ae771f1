//! Test doubles for the ports that have no mockall mock.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        Workbench,
        ports::{
            Deriver, DocumentWriter, Filesystem, Lexicon, MockDeriver, MockLexicon,
            NameSanitizer, Transliterator,
        },
    },
    domain::{Document, SutraTable},
    error::PrakriyaResult,
};

/// Transliterates the handful of words the tests use; passes everything
/// else through.
pub struct TableLipi {
    forward: HashMap<&'static str, &'static str>,
}

impl TableLipi {
    pub fn new() -> Self {
        let forward = HashMap::from([
            ("Ashtadhyayi", "आस्ह्तद्ह्ययि"),
            ("Dhatupatha", "धतुपथ"),
            ("BU", "भू"),
            ("Bavati", "भवति"),
            ("Bavatu", "भवतु"),
            ("Bavanti", "भवन्ति"),
            ("BU+kvi~p", "भू+क्विँप्"),
            ("cura~", "चुरँ"),
            ("corayati", "चोरयति"),
            ("nadI", "नदी"),
            ("x", "क्ष"),
            ("y", "य"),
            ("x,y", "क्ष,य"),
        ]);
        Self { forward }
    }
}

impl Transliterator for TableLipi {
    fn to_display(&self, internal: &str) -> String {
        self.forward
            .get(internal)
            .map(|s| s.to_string())
            .unwrap_or_else(|| internal.to_string())
    }

    fn to_internal(&self, display: &str) -> String {
        self.forward
            .iter()
            .find(|(_, d)| **d == display)
            .map(|(i, _)| i.to_string())
            .unwrap_or_else(|| display.to_string())
    }
}

pub struct PlainNames;

impl NameSanitizer for PlainNames {
    fn storage_name(&self, title: &str) -> String {
        title.replace(' ', "_")
    }
}

/// Records every write; directories are tracked but not checked.
#[derive(Clone, Default)]
pub struct RecordingFs {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> PrakriyaResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PrakriyaResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Writes `title\n---\ncontent` through the recording filesystem.
#[derive(Clone, Default)]
pub struct PlainWriter {
    pub fs: RecordingFs,
}

impl DocumentWriter for PlainWriter {
    fn write(&self, path: &Path, document: &Document) -> PrakriyaResult<()> {
        self.fs.write_file(
            path,
            &format!("{}\n---\n{}", document.title(), document.content()),
        )
    }
}

/// Workbench over mocks plus the doubles above. Returns the shared
/// filesystem so tests can inspect writes.
pub fn workbench(
    lexicon: impl Lexicon + 'static,
    deriver: impl Deriver + 'static,
    sutras: SutraTable,
) -> (Workbench, RecordingFs) {
    let fs = RecordingFs::default();
    let wb = Workbench::builder()
        .lexicon(lexicon)
        .deriver(deriver)
        .transliterator(TableLipi::new())
        .sanitizer(PlainNames)
        .filesystem(Arc::new(fs.clone()))
        .writer(PlainWriter { fs: fs.clone() })
        .sutras(sutras)
        .build()
        .unwrap();
    (wb, fs)
}

/// A lexicon mock with no expectations, for tests that never look up.
pub fn unused_lexicon() -> MockLexicon {
    MockLexicon::new()
}

pub fn unused_deriver() -> MockDeriver {
    MockDeriver::new()
}
