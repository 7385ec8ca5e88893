use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::collect_notes;
use crate::config::Config;
use crate::error::{NotesIndexError, Result};
use crate::renderer::render_index;
use crate::sorter::sort_notes;
use crate::writer::write_index;

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct IndexReport {
    /// Rendered document
    pub content: String,
    /// Where the document is (or would be) written
    pub output: PathBuf,
    pub note_count: usize,
    /// Note count per category, in output order
    pub categories: BTreeMap<String, usize>,
}

/// Runs collect, sort, render and write over one notes root
pub struct IndexGenerator {
    root: PathBuf,
    config: Config,
}

impl IndexGenerator {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Generator using `<root>/.notes/config.toml` (or defaults)
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(&root)?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the index without touching the output file
    pub fn build(&self) -> Result<IndexReport> {
        let notes = collect_notes(&self.root, &self.config.collect_options())?;
        let notes = sort_notes(notes);

        let header = read_resource(&self.config.header_path(&self.root))?;
        let footer = read_resource(&self.config.footer_path(&self.root))?;

        let mut categories = BTreeMap::new();
        for note in &notes {
            *categories.entry(note.category().to_string()).or_insert(0) += 1;
        }

        Ok(IndexReport {
            content: render_index(&notes, &header, &footer),
            output: self.config.output_path(&self.root),
            note_count: notes.len(),
            categories,
        })
    }

    /// Render and write the index. Nothing is written if any stage fails.
    pub fn generate(&self) -> Result<IndexReport> {
        let report = self.build()?;
        write_index(&report.output, &report.content)?;
        Ok(report)
    }
}

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NotesIndexError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })
}
