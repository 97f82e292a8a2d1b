//! Full-name decoding into word parts and letter codes.

use unicode_normalization::UnicodeNormalization;

use crate::letters::{LetterClass, classify, letter_code};

/// One character of a word part with its code and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    /// Uppercase, NFC-composed character.
    pub ch: char,
    /// Table code (1..=9), or 0 for characters outside the table.
    pub code: u8,
    /// Vowel/consonant class within the containing word.
    pub class: LetterClass,
}

/// A whitespace-delimited segment of the full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPart {
    text: String,
    letters: Vec<Letter>,
}

impl WordPart {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let letters = chars
            .iter()
            .map(|&ch| Letter {
                ch,
                code: letter_code(ch),
                class: classify(ch, &chars),
            })
            .collect();
        Self {
            text: text.to_string(),
            letters,
        }
    }

    /// The uppercased word.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Code of the first character (0 if it is unmapped).
    pub fn first_code(&self) -> u32 {
        self.letters.first().map_or(0, |l| l.code as u32)
    }

    /// Sum of all letter codes in the word.
    pub fn code_sum(&self) -> u32 {
        self.letters.iter().map(|l| l.code as u32).sum()
    }

    /// Sum of the codes of letters in `class`.
    pub fn class_sum(&self, class: LetterClass) -> u32 {
        self.letters
            .iter()
            .filter(|l| l.class == class)
            .map(|l| l.code as u32)
            .sum()
    }
}

/// A decoded full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameProfile {
    cleaned: String,
    words: Vec<WordPart>,
    stripped: Vec<char>,
    flat_codes: Vec<u8>,
}

impl NameProfile {
    /// Trimmed, NFC-normalized, uppercased name.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Word parts in name order.
    pub fn words(&self) -> &[WordPart] {
        &self.words
    }

    /// The last word part (the given name), if any.
    pub fn given_name(&self) -> Option<&WordPart> {
        self.words.last()
    }

    /// Codes of every mapped letter, whitespace and unmapped characters dropped.
    pub fn flat_codes(&self) -> &[u8] {
        &self.flat_codes
    }

    /// Sum of [`flat_codes`](Self::flat_codes).
    pub fn code_sum(&self) -> u32 {
        self.flat_codes.iter().map(|&c| c as u32).sum()
    }

    /// Sum of the codes of the first `n` characters of the name with
    /// whitespace removed. Unmapped characters take a position but add 0.
    pub fn leading_code_sum(&self, n: usize) -> u32 {
        self.stripped
            .iter()
            .take(n)
            .map(|&ch| letter_code(ch) as u32)
            .sum()
    }

    /// True when the name has no word parts.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trim, uppercase and NFC-compose a name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase().nfc().collect()
}

/// Decode a full name. Never fails: a blank name yields an empty profile.
pub fn decode(name: &str) -> NameProfile {
    let cleaned = normalize_name(name);
    let words: Vec<WordPart> = cleaned.split_whitespace().map(WordPart::new).collect();
    let stripped: Vec<char> = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
    let flat_codes = stripped
        .iter()
        .map(|&ch| letter_code(ch))
        .filter(|&code| code > 0)
        .collect();
    NameProfile {
        cleaned,
        words,
        stripped,
        flat_codes,
    }
}
