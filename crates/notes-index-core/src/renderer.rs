use crate::note::Note;

/// Compose the index document from sorted notes and the static fragments.
///
/// A category heading is emitted each time the category changes, so the
/// input must already be grouped (see [`crate::sorter::sort_notes`]).
pub fn render_index(notes: &[Note], header: &str, footer: &str) -> String {
    let mut content = String::from(header);
    let mut current: Option<&str> = None;

    for note in notes {
        if current != Some(note.category()) {
            current = Some(note.category());
            content.push_str(&render_category_heading(note.category()));
        }

        content.push_str(&render_item(note));
    }

    content.push_str(footer);
    content
}

pub fn render_category_heading(category: &str) -> String {
    format!("\n### {}\n\n", category)
}

/// One list item line, terminated by `\n`
pub fn render_item(note: &Note) -> String {
    if note.has_date() {
        format!(
            "- [{}]({}) - {}\n",
            note.title().to_lowercase(),
            note.filepath(),
            note.created_at()
        )
    } else {
        format!("- [{}]({})\n", note.title().to_lowercase(), note.filepath())
    }
}
