use crate::session::{Cursor, Status};

/// Display hint for one rendered character of the word grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Match,
    Mismatch,
    Neutral,
}

/// Classify the character at (`word_idx`, `char_idx`) of the word grid.
///
/// `target` is the word being rendered and `ch` its character at
/// `char_idx`. Rules apply in priority order:
///
/// 1. the character sits exactly under the cursor, a character was just
///    typed, and the session has not finished: compare it against the
///    typed character;
/// 2. the cursor word has been typed past its end: every character of that
///    word reads as a mismatch;
/// 3. anything else is neutral.
///
/// Negative cursor positions (fresh word, or backspace run past the start)
/// never satisfy either rule, so untouched words always render neutral.
pub fn classify(
    word_idx: usize,
    char_idx: usize,
    ch: char,
    target: &str,
    cursor: &Cursor,
    status: Status,
) -> CharClass {
    let under_cursor = word_idx == cursor.word_idx && char_idx as isize == cursor.char_idx;

    if under_cursor && cursor.current_char.is_some() && status != Status::Finished {
        if cursor.current_char == Some(ch) {
            CharClass::Match
        } else {
            CharClass::Mismatch
        }
    } else if word_idx == cursor.word_idx && cursor.char_idx >= target.chars().count() as isize {
        CharClass::Mismatch
    } else {
        CharClass::Neutral
    }
}
