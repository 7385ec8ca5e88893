pub mod collector;
pub mod config;
pub mod error;
pub mod index;
pub mod note;
pub mod renderer;
pub mod sorter;
pub mod writer;

pub use collector::{collect_notes, CollectOptions, DEFAULT_NOTE_EXTENSION};
pub use config::{Config, IndexConfig};
pub use error::{NotesIndexError, Result};
pub use index::{IndexGenerator, IndexReport};
pub use note::{extract_date, parse_title, Note};
pub use renderer::{render_category_heading, render_index, render_item};
pub use sorter::{compare_notes, sort_notes};
pub use writer::write_index;
