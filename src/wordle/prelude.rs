// This file allows you to configure some of the constants that define the game of wordle.
//
// It is unlikely you will ever change the WORD_SIZE but if you want to, it should be supported by
// this implementation (as long as 3^WORD_SIZE still fits into a PatternCode).


// how many characters are in a wordle answer?
pub const WORD_SIZE: usize = 5;
// how many turns are you allowed to play?
pub const NUM_TURNS: usize = 6;
// how many letters are in the english alphabet? (don't change this lol)
pub const ALPHABET_SIZE: usize = (('z' as usize) - ('a' as usize)) + 1;

// This type allows you to switch between using f64 for all calculations and f32 if you so desire.
pub type WordleFloat = f64;

/// A dictionary word stored as raw ASCII bytes
pub type Word = [u8; WORD_SIZE];

/// One bit per letter of the alphabet ('a' = bit 0, 'b' = bit 1, ...)
pub type LetterMask = u32;

/// Every letter of the alphabet set
pub const ALL_LETTERS: LetterMask = (1 << ALPHABET_SIZE) - 1;

/// Returns the number of times each letter of the alphabet occurs in the argument. The bytes should
/// represent only lowercase ASCII letters. The output is indexed by the position of the letter in
/// the alphabet... like 'a' = 0, 'b' = 1, etc...
pub fn count_letters(word: &Word) -> [u8; ALPHABET_SIZE] {
    debug_assert!(is_wordle_str_bytes(word));
    let mut out = [0; ALPHABET_SIZE];
    for &c in word {
        out[letter_idx(c)] += 1;
    }

    out
}

/// Returns the index of the given letter within the alphabet (like 'a' = 0, 'b' = 1, etc...)
#[inline]
pub fn letter_idx(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// The letter (as an ASCII byte) sitting at the given index of the alphabet
#[inline]
pub fn idx_letter(idx: usize) -> u8 {
    debug_assert!(idx < ALPHABET_SIZE);
    b'a' + idx as u8
}

/// The single bit representing the letter at this index of the alphabet
#[inline]
pub fn letter_bit(idx: usize) -> LetterMask {
    1 << idx
}

/// Bit i is set iff letter i appears anywhere in the word
pub fn word_mask(word: &Word) -> LetterMask {
    word.iter().fold(0, |mask, &c| mask | letter_bit(letter_idx(c)))
}

/// Index of the lowest set letter bit, or None when no letter is set
#[inline]
pub fn lowest_letter(mask: LetterMask) -> Option<usize> {
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros() as usize)
    }
}

/// Count of letters set in the mask
#[inline]
pub fn num_letters(mask: LetterMask) -> usize {
    mask.count_ones() as usize
}

/// Iterates the alphabet indexes set in the mask, lowest letter first
pub fn iter_letters(mut mask: LetterMask) -> impl Iterator<Item=usize> {
    std::iter::from_fn(move || {
        let idx = lowest_letter(mask)?;
        mask &= mask - 1;
        Some(idx)
    })
}

/// Checks whether or not the passed string meets the constraints of a "wordle_str"
/// must be (5 letters, all lowercase)
pub fn is_wordle_str(v: &str) -> bool {
    is_wordle_str_bytes(v.as_bytes())
}

/// Checks whether or not the passed bytes represent an ASCII sequence which is also a "wordle_str"
pub fn is_wordle_str_bytes(v: &[u8]) -> bool {
    v.len() == WORD_SIZE && v.iter().all(is_normal_wordle_char)
}

/// Given some input &str, try to clean it up such that it might be a wordle_str.
///
/// This function does not trim the length of a word or remove non alpha characters. It simply
/// cleans up words that are already valid wordle words by removing any spacing and converting
/// to all lowercase.
///
/// You should always verify that the output of this function passes is_wordle_str.
pub fn normalize_wordle_word(str: &str) -> String {
    str.trim().to_lowercase()
}

/// Verifies that a byte represents a lowercase alphabetic character (a valid wordle_str char)
pub fn is_normal_wordle_char(v: &u8) -> bool {
    v.is_ascii_lowercase()
}

/// Copies a validated wordle_str into a fixed size Word
pub fn to_word(v: &str) -> Option<Word> {
    if !is_wordle_str(v) {
        return None;
    }

    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(v.as_bytes());
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("crane", 0b10_0010_0000_0001_0101)]
    #[test_case("geese", 0b100_0000_0000_0101_0000)]
    fn test_word_mask(word: &str, expected: LetterMask) {
        assert_eq!(word_mask(&to_word(word).unwrap()), expected);
    }

    #[test]
    fn test_lowest_letter() {
        assert_eq!(lowest_letter(0), None);
        assert_eq!(lowest_letter(letter_bit(letter_idx(b'q'))), Some(letter_idx(b'q')));
        assert_eq!(lowest_letter(0b1010_0000), Some(5));
    }

    #[test]
    fn test_num_letters_and_iter() {
        let mask = word_mask(&to_word("allot").unwrap());
        assert_eq!(num_letters(mask), 4);
        let letters: String = iter_letters(mask).map(|i| idx_letter(i) as char).collect();
        assert_eq!(letters, "alot");
    }

    #[test]
    fn test_count_letters() {
        let counts = count_letters(&to_word("llama").unwrap());
        assert_eq!(counts[letter_idx(b'l')], 2);
        assert_eq!(counts[letter_idx(b'a')], 2);
        assert_eq!(counts[letter_idx(b'm')], 1);
        assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), WORD_SIZE);
    }

    #[test_case(" Crane\n", Some("crane"))]
    #[test_case("cran", None)]
    #[test_case("cr4ne", None)]
    fn test_normalize_to_word(raw: &str, expected: Option<&str>) {
        let normalized = normalize_wordle_word(raw);
        assert_eq!(to_word(&normalized), expected.map(|e| to_word(e).unwrap()));
    }
}
