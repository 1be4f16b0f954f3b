/// Number of letters in the English alphabet.
pub const ALPHABET_LEN: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

/// A set of the ASCII letters `a..=z`, case-insensitive, one bit per letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

/// Bit for an ASCII letter, or `None` for anything else.
fn letter_bit(byte: u8) -> Option<u32> {
    byte.is_ascii_alphabetic()
        .then(|| 1 << (byte.to_ascii_lowercase() - b'a'))
}

impl LetterSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        LetterSet { bits: 0 }
    }

    /// Collects every letter appearing in `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = LetterSet::new();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Adds a letter, ignoring non-letters. Returns true if it was not already present.
    pub fn insert(&mut self, byte: u8) -> bool {
        match letter_bit(byte) {
            Some(bit) if self.bits & bit == 0 => {
                self.bits |= bit;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        letter_bit(byte).is_some_and(|bit| self.bits & bit != 0)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True once all 26 letters are present.
    pub fn is_complete(&self) -> bool {
        self.bits == FULL_MASK
    }

    /// Letters not in the set, in alphabetical order.
    pub fn missing(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .filter(|&b| !self.contains(b))
            .map(char::from)
    }
}
