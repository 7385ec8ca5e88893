use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{NotesIndexError, Result};
use crate::note::{parse_title, Note};

/// Default suffix a note filename must end with
pub const DEFAULT_NOTE_EXTENSION: &str = ".md";

/// Prefix marking root-level entries that are never traversed
const HIDDEN_PREFIX: char = '.';

/// Options controlling which files are collected
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub extension: String,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_NOTE_EXTENSION.to_string(),
        }
    }
}

impl CollectOptions {
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    fn is_note(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

/// Walk `root` and build a [`Note`] for every qualifying file.
///
/// Hidden entries directly under the root are pruned along with everything
/// below them. Files sitting in the root itself have no category and are
/// skipped. The returned order follows the filesystem and is not stable.
pub fn collect_notes(root: &Path, options: &CollectOptions) -> Result<Vec<Note>> {
    if !root.is_dir() {
        return Err(NotesIndexError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut notes = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_hidden_root_entry(e));

    for entry in walker {
        let entry = entry?;

        if is_dir_entry(&entry) || entry.depth() == 1 {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !options.is_note(&file_name) {
            continue;
        }

        let Some(category) = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };

        let title = read_title(entry.path())?;
        notes.push(Note::new(category, file_name, title));
    }

    Ok(notes)
}

/// Directories, including symlinks to directories (which are not descended)
fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn is_hidden_root_entry(entry: &DirEntry) -> bool {
    entry.depth() == 1
        && entry
            .file_name()
            .to_string_lossy()
            .starts_with(HIDDEN_PREFIX)
}

/// Read only the first line of a note and turn it into a title
fn read_title(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut first_line = String::new();

    if reader.read_line(&mut first_line)? == 0 {
        return Err(NotesIndexError::EmptyNote {
            path: path.to_path_buf(),
        });
    }

    Ok(parse_title(&first_line))
}
