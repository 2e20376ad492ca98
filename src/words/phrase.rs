use rand::Rng;

use super::WordSource;

// Hangul syllables compose as 0xAC00 + (choseong * 21 + jungseong) * 28 + jongseong.
const SYLLABLE_BASE: u32 = 0xAC00;
const CHOSEONG_COUNT: u32 = 19;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28; // index 0 carries no final consonant

/// Random Hangul pseudo-phrases.
///
/// Each entry is two or three short segments of composed syllables run
/// together, so it has the rhythm of a Korean compound without being a
/// dictionary word. Every session gets an entirely new list.
pub struct PhraseSource;

impl PhraseSource {
    fn syllable<R: Rng>(rng: &mut R) -> char {
        let cho = rng.gen_range(0..CHOSEONG_COUNT);
        let jung = rng.gen_range(0..JUNGSEONG_COUNT);
        // Final consonants show up in a minority of real syllables; biasing
        // toward none keeps the output readable.
        let jong = if rng.gen_bool(0.4) {
            rng.gen_range(1..JONGSEONG_COUNT)
        } else {
            0
        };

        let code = SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
        char::from_u32(code).expect("composed code point stays inside the hangul block")
    }

    fn phrase<R: Rng>(rng: &mut R) -> String {
        let segments = rng.gen_range(2..=3);
        let mut word = String::new();
        for _ in 0..segments {
            for _ in 0..rng.gen_range(1..=3) {
                word.push(Self::syllable(rng));
            }
        }
        word
    }
}

impl WordSource for PhraseSource {
    fn generate(&self, count: usize) -> Vec<String> {
        let rng = &mut rand::thread_rng();
        (0..count).map(|_| Self::phrase(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_the_requested_count() {
        assert_eq!(PhraseSource.generate(0).len(), 0);
        assert_eq!(PhraseSource.generate(25).len(), 25);
    }

    #[test]
    fn test_phrases_are_composed_hangul() {
        for phrase in PhraseSource.generate(100) {
            assert!(!phrase.is_empty());
            assert!(
                phrase
                    .chars()
                    .all(|c| ('\u{ac00}'..='\u{d7a3}').contains(&c)),
                "{phrase} strayed outside the hangul syllable block"
            );
        }
    }

    #[test]
    fn test_phrase_length_stays_in_segment_bounds() {
        // Two or three segments of one to three syllables each.
        for phrase in PhraseSource.generate(200) {
            let syllables = phrase.chars().count();
            assert!(
                (2..=9).contains(&syllables),
                "{phrase} has {syllables} syllables"
            );
        }
    }

    #[test]
    fn test_lists_are_not_constant() {
        let first = PhraseSource.generate(20);
        let second = PhraseSource.generate(20);

        // Astronomically unlikely to collide if the generator is live.
        assert_ne!(first, second);
    }
}
