use std::cmp::Ordering;

use crate::note::Note;

/// Order notes by category ascending, then date descending, then title
/// ascending.
///
/// Dates compare as plain strings, so an empty date is the smallest value and
/// dateless notes land after every dated note of their category. The sort is
/// stable: exact ties keep their input order.
pub fn sort_notes(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by(compare_notes);
    notes
}

pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    a.category()
        .cmp(b.category())
        .then_with(|| b.created_at().cmp(a.created_at()))
        .then_with(|| a.title().cmp(b.title()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title()).collect()
    }

    /// Three successive stable passes, the reference ordering
    fn sort_in_passes(mut notes: Vec<Note>) -> Vec<Note> {
        notes.sort_by(|a, b| a.title().cmp(b.title()));
        notes.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        notes.sort_by(|a, b| a.category().cmp(b.category()));
        notes
    }

    fn sample() -> Vec<Note> {
        vec![
            Note::new("notes", "gamma.md", "Gamma"),
            Note::new("notes", "2021-01-01-beta.md", "Beta"),
            Note::new("books", "dune.md", "Dune"),
            Note::new("notes", "2023-05-01-alpha.md", "Alpha"),
            Note::new("books", "2020-01-01-emma.md", "Emma"),
            Note::new("notes", "2023-05-01-aardvark.md", "aardvark"),
            Note::new("notes", "2023-05-01-zeta.md", "Zeta"),
        ]
    }

    #[test]
    fn sorts_by_category_then_date_desc_then_title() {
        let sorted = sort_notes(sample());
        assert_eq!(
            titles(&sorted),
            vec!["Emma", "Dune", "Alpha", "Zeta", "aardvark", "Beta", "Gamma"]
        );
    }

    #[test]
    fn dateless_notes_sort_last_within_category() {
        let sorted = sort_notes(vec![
            Note::new("c", "undated.md", "A"),
            Note::new("c", "1970-01-01-old.md", "Z"),
        ]);
        assert_eq!(titles(&sorted), vec!["Z", "A"]);
    }

    #[test]
    fn matches_three_pass_stable_sort() {
        let mut input = sample();
        input.push(Note::new("notes", "gamma-copy.md", "Gamma"));
        input.push(Note::new("books", "2020-01-01-emma-2.md", "Emma"));

        let single = sort_notes(input.clone());
        let passes = sort_in_passes(input);
        assert_eq!(single, passes);
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let first = Note::new("c", "2022-02-02-one.md", "Same");
        let second = Note::new("c", "2022-02-02-two.md", "Same");

        let sorted = sort_notes(vec![first.clone(), second.clone()]);
        assert_eq!(sorted, vec![first.clone(), second.clone()]);

        let sorted = sort_notes(vec![second.clone(), first.clone()]);
        assert_eq!(sorted, vec![second, first]);
    }

    #[test]
    fn sorting_is_deterministic_for_shuffled_input() {
        let mut reversed = sample();
        reversed.reverse();
        let mut rotated = sample();
        rotated.rotate_left(3);

        assert_eq!(sort_notes(reversed), sort_notes(rotated));
    }

    #[test]
    fn output_respects_pairwise_order() {
        let sorted = sort_notes(sample());
        for pair in sorted.windows(2) {
            assert_ne!(compare_notes(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn empty_input() {
        assert!(sort_notes(Vec::new()).is_empty());
    }
}
