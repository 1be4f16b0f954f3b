use crate::letter_set::LetterSet;

/// Returns the part of a C-style buffer before the first NUL (all of it if there is none).
pub fn c_string_bytes(c_string: &[u8]) -> &[u8] {
    let end = c_string
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(c_string.len());
    &c_string[..end]
}

fn scan_is_complete(bytes: &[u8]) -> bool {
    let mut seen = LetterSet::new();
    bytes
        .iter()
        .any(|&b| seen.insert(b) && seen.is_complete())
}

/// True if `phrase` uses every letter `a..=z` at least once, ignoring case and
/// anything that is not an ASCII letter.
pub fn pangram(phrase: &str) -> bool {
    // Multi-byte UTF-8 sequences never contain ASCII bytes, so a byte scan is exact.
    scan_is_complete(phrase.as_bytes())
}

/// [`pangram`] over a NUL-terminated buffer; bytes after the first NUL are ignored.
pub fn pangram_c(c_string: &[u8]) -> bool {
    scan_is_complete(c_string_bytes(c_string))
}

/// The letters `phrase` lacks, alphabetically. Empty for a pangram.
pub fn missing_letters(phrase: &str) -> String {
    LetterSet::from_bytes(phrase.as_bytes()).missing().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const NOISE: &[u8] = b" 0123456789,.;:!?'\"-_()[]{}\t\n";

    #[test]
    fn test_c_string_bytes() {
        assert_eq!(c_string_bytes(b"Hello, World!\0Extra data"), b"Hello, World!");
        assert_eq!(c_string_bytes(b"Hello, World!"), b"Hello, World!");
        assert_eq!(c_string_bytes(b"\0abc"), b"");
        assert_eq!(c_string_bytes(b""), b"");
    }

    #[test]
    fn empty_phrase_is_not_a_pangram() {
        assert!(!pangram(""));
    }

    #[test]
    fn alphabet_is_a_pangram() {
        assert!(pangram("abcdefghijklmnopqrstuvwxyz"));
    }

    #[test]
    fn alphabet_missing_z_is_not_a_pangram() {
        assert!(!pangram("abcdefghijklmnopqrstuvwxy"));
    }

    #[test]
    fn punctuation_and_digits_are_ignored() {
        assert!(pangram("abc, def! ghi... jkl25; mnopqrstuvwxyz"));
    }

    #[test]
    fn mixed_case_counts_once_per_letter() {
        assert!(pangram("ABCdefGHIjklMNOpqrSTUvwxYZ"));
    }

    #[test]
    fn misspelled_phrase_still_uses_every_letter() {
        assert!(pangram("the quick brown fox jumps over teh lazy dog"));
    }

    #[test]
    fn accented_letters_do_not_stand_in_for_ascii() {
        // 'é' and 'ö' do not count as 'e' or 'o'.
        assert!(!pangram("thé quick brown fox jumps övr thé lazy dg"));
        assert!(pangram("héllo: the quick brown fox jumps over the lazy dog"));
    }

    #[test]
    fn pangram_c_stops_at_nul() {
        assert!(pangram_c(b"abcdefghijklmnopqrstuvwxyz\0"));
        assert!(!pangram_c(b"abcdefghijklm\0nopqrstuvwxyz"));
        assert!(pangram_c(b"abcdefghijklmnopqrstuvwxyz"));
        assert!(!pangram_c(b"\0"));
    }

    #[test]
    fn missing_letters_explains_failures() {
        assert_eq!(missing_letters(""), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(missing_letters("abcdefghijklmnopqrstuvwxy"), "z");
        assert_eq!(missing_letters("The Quick Brown Fox"), "adgjlmpsvyz");
        assert_eq!(missing_letters("the quick brown fox jumps over the lazy dog"), "");
    }

    fn shuffled_with_noise(rng: &mut StdRng, letters: &[u8]) -> String {
        let mut bytes = Vec::new();
        for &letter in letters {
            let letter = if rng.gen_bool(0.5) {
                letter.to_ascii_uppercase()
            } else {
                letter
            };
            bytes.push(letter);
            for _ in 0..rng.gen_range(0..3) {
                bytes.push(NOISE[rng.gen_range(0..NOISE.len())]);
            }
        }
        bytes.shuffle(rng);
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn any_arrangement_of_the_full_alphabet_is_a_pangram() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut letters: Vec<u8> = (b'a'..=b'z').collect();
            // Repeat some letters so inputs vary in length.
            for _ in 0..rng.gen_range(0..20) {
                letters.push(rng.gen_range(b'a'..=b'z'));
            }
            let phrase = shuffled_with_noise(&mut rng, &letters);
            assert!(pangram(&phrase), "{phrase:?}");
        }
    }

    #[test]
    fn dropping_any_letter_breaks_the_pangram() {
        let mut rng = StdRng::seed_from_u64(0xfeed);
        for dropped in b'a'..=b'z' {
            let letters: Vec<u8> = (b'a'..=b'z')
                .filter(|&b| b != dropped)
                .flat_map(|b| [b, b])
                .collect();
            let phrase = shuffled_with_noise(&mut rng, &letters);
            assert!(!pangram(&phrase), "{phrase:?}");
            assert_eq!(missing_letters(&phrase), (dropped as char).to_string());
        }
    }
}
