//! Word-boundary matching.
//!
//! The only transformation ever applied to typed text is a whitespace trim
//! at the moment of comparison. There is no case folding and no Unicode
//! normalization: composed and decomposed Hangul are different strings and
//! therefore different words.

/// Compare a typed string against the target word.
pub fn check(target: &str, typed: &str) -> bool {
    target == typed.trim()
}
