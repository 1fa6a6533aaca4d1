//! Small rendering helpers shared across screens: the cover art table,
//! width-aware line layout, and the translation from structured library
//! errors to user-facing messages.

use crate::library::LibraryError;
use crate::models::Cover;

/// ASCII motifs standing in for playlist cover art. A `Cover` indexes into
/// this table modulo its length, so new cover values never go out of
/// bounds.
const COVER_ART: &[&str] = &["/\\/\\", "*+*+", "oOo.", "=--=", "<>><", "~..~"];

/// Resolve a cover reference to its motif.
pub(crate) fn cover_motif(cover: Cover) -> &'static str {
    COVER_ART[cover.0 % COVER_ART.len()]
}

/// Lay out `left` and `right` on one row of the given width, padding the
/// gap with spaces. Truncates `left` when the row is too narrow so the
/// right-hand value (typically a duration) stays visible.
pub(crate) fn spread(left: &str, right: &str, width: usize) -> String {
    let right_len = right.chars().count();
    if width <= right_len + 1 {
        return right.to_string();
    }

    let left_budget = width - right_len - 1;
    let left_trimmed: String = left.chars().take(left_budget).collect();
    let gap = width - left_trimmed.chars().count() - right_len;
    format!("{left_trimmed}{}{right}", " ".repeat(gap))
}

/// Build the footer message for a failed library operation. The facade
/// returns structured errors; the wording lives here so the core never
/// produces display text.
pub(crate) fn feedback_message(err: &LibraryError) -> String {
    match err {
        LibraryError::EmptyField(field) => format!("{field} is required."),
        LibraryError::DuplicateName(name) => format!("{name} already exists."),
        LibraryError::InvalidNumber(text) => format!("Duration {text:?} is not a number."),
        LibraryError::SongNotFound(missing) => format!("No song named {}.", missing.0),
        LibraryError::PlaylistNotFound(missing) => format!("No playlist named {}.", missing.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PlaylistNotFound, SongNotFound};

    #[test]
    fn spread_right_aligns_the_second_value() {
        assert_eq!(spread("La Havane", "3:06", 20), "La Havane       3:06");
    }

    #[test]
    fn spread_truncates_the_left_side_when_narrow() {
        let row = spread("A very long song title", "3:06", 12);
        assert_eq!(row.chars().count(), 12);
        assert!(row.ends_with("3:06"));
    }

    #[test]
    fn messages_echo_the_offending_name() {
        let err = LibraryError::PlaylistNotFound(PlaylistNotFound("Chill".into()));
        assert_eq!(feedback_message(&err), "No playlist named Chill.");

        let err = LibraryError::SongNotFound(SongNotFound("Ghost".into()));
        assert_eq!(feedback_message(&err), "No song named Ghost.");

        let err = LibraryError::EmptyField("Artist");
        assert_eq!(feedback_message(&err), "Artist is required.");
    }

    #[test]
    fn every_cover_resolves_to_a_motif() {
        for index in 0..32 {
            assert!(!cover_motif(Cover(index)).is_empty());
        }
    }
}
