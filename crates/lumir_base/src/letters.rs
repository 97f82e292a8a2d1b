//! Vietnamese letter table and vowel/consonant classification.
//!
//! Every letter maps to a code in 1..=9 using the Pythagorean chart
//! (A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8). Vietnamese letters carry the code of
//! the Latin letter they are built on: every tone-marked or modified vowel
//! shares its base vowel's code, and Đ shares D's. Lookups expect uppercase,
//! NFC-composed characters; anything else maps to 0.

/// Every non-ASCII uppercase letter of the Vietnamese alphabet.
pub const VIETNAMESE_LETTERS: [char; 67] = [
    'Ă', 'Â', 'Á', 'À', 'Ả', 'Ã', 'Ạ', 'Ắ', 'Ằ', 'Ẳ', 'Ẵ', 'Ặ', 'Ấ', 'Ầ', 'Ẩ', 'Ẫ', 'Ậ', //
    'Ê', 'É', 'È', 'Ẻ', 'Ẽ', 'Ẹ', 'Ế', 'Ề', 'Ể', 'Ễ', 'Ệ', //
    'Í', 'Ì', 'Ỉ', 'Ĩ', 'Ị', //
    'Ô', 'Ơ', 'Ó', 'Ò', 'Ỏ', 'Õ', 'Ọ', 'Ố', 'Ồ', 'Ổ', 'Ỗ', 'Ộ', 'Ớ', 'Ờ', 'Ở', 'Ỡ', 'Ợ', //
    'Ư', 'Ú', 'Ù', 'Ủ', 'Ũ', 'Ụ', 'Ứ', 'Ừ', 'Ử', 'Ữ', 'Ự', //
    'Ý', 'Ỳ', 'Ỷ', 'Ỹ', 'Ỵ', //
    'Đ',
];

/// Vowel or consonant, as used by the soul and personality numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vowel => "vowel",
            Self::Consonant => "consonant",
        }
    }
}

/// The Latin letter whose code a Vietnamese letter shares.
///
/// Returns `None` for characters outside the table (digits, punctuation,
/// lowercase, letters of other alphabets).
pub const fn base_letter(ch: char) -> Option<char> {
    match ch {
        'A'..='Z' => Some(ch),
        'Ă' | 'Â' | 'Á' | 'À' | 'Ả' | 'Ã' | 'Ạ' | 'Ắ' | 'Ằ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Ấ' | 'Ầ' | 'Ẩ'
        | 'Ẫ' | 'Ậ' => Some('A'),
        'Ê' | 'É' | 'È' | 'Ẻ' | 'Ẽ' | 'Ẹ' | 'Ế' | 'Ề' | 'Ể' | 'Ễ' | 'Ệ' => Some('E'),
        'Í' | 'Ì' | 'Ỉ' | 'Ĩ' | 'Ị' => Some('I'),
        'Ô' | 'Ơ' | 'Ó' | 'Ò' | 'Ỏ' | 'Õ' | 'Ọ' | 'Ố' | 'Ồ' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ớ' | 'Ờ' | 'Ở'
        | 'Ỡ' | 'Ợ' => Some('O'),
        'Ư' | 'Ú' | 'Ù' | 'Ủ' | 'Ũ' | 'Ụ' | 'Ứ' | 'Ừ' | 'Ử' | 'Ữ' | 'Ự' => Some('U'),
        'Ý' | 'Ỳ' | 'Ỷ' | 'Ỹ' | 'Ỵ' => Some('Y'),
        'Đ' => Some('D'),
        _ => None,
    }
}

/// Numerology code of an uppercase letter, 0 when the letter is unmapped.
pub const fn letter_code(ch: char) -> u8 {
    match base_letter(ch) {
        Some(base) => ((base as u32 - 'A' as u32) % 9 + 1) as u8,
        None => 0,
    }
}

/// A, E, I, O, U or any of their Vietnamese variants.
pub const fn is_vowel_letter(ch: char) -> bool {
    matches!(base_letter(ch), Some('A' | 'E' | 'I' | 'O' | 'U'))
}

/// Y or a tone-marked Y.
pub const fn is_y_letter(ch: char) -> bool {
    matches!(base_letter(ch), Some('Y'))
}

/// Classify `ch` within `word`, the word part that contains it.
///
/// Y counts as a vowel only when no other vowel letter appears in the same
/// word; other Y's in the word do not count.
pub fn classify(ch: char, word: &[char]) -> LetterClass {
    if is_vowel_letter(ch) {
        LetterClass::Vowel
    } else if is_y_letter(ch) {
        if word.iter().any(|&c| is_vowel_letter(c)) {
            LetterClass::Consonant
        } else {
            LetterClass::Vowel
        }
    } else {
        LetterClass::Consonant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn latin_chart() {
        let expected = [
            1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8,
        ];
        for (i, ch) in ('A'..='Z').enumerate() {
            assert_eq!(letter_code(ch), expected[i], "code of {ch}");
        }
    }

    #[test]
    fn every_vietnamese_letter_is_mapped() {
        for ch in VIETNAMESE_LETTERS {
            let code = letter_code(ch);
            assert!((1..=9).contains(&code), "{ch} -> {code}");
        }
    }

    #[test]
    fn variants_share_base_code() {
        assert_eq!(letter_code('Ặ'), 1);
        assert_eq!(letter_code('Ể'), 5);
        assert_eq!(letter_code('Ị'), 9);
        assert_eq!(letter_code('Ợ'), 6);
        assert_eq!(letter_code('Ữ'), 3);
        assert_eq!(letter_code('Ỹ'), 7);
        assert_eq!(letter_code('Đ'), 4);
    }

    #[test]
    fn unmapped_is_zero() {
        assert_eq!(letter_code('a'), 0);
        assert_eq!(letter_code('-'), 0);
        assert_eq!(letter_code('7'), 0);
        assert_eq!(letter_code('Ж'), 0);
    }

    #[test]
    fn plain_vowels() {
        for ch in ['A', 'Â', 'Ế', 'Ì', 'Ơ', 'Ự'] {
            assert_eq!(classify(ch, &[ch]), LetterClass::Vowel, "{ch}");
        }
    }

    #[test]
    fn d_stroke_is_consonant() {
        assert_eq!(classify('Đ', &chars("ĐẠT")), LetterClass::Consonant);
    }

    #[test]
    fn y_alone_in_word_is_vowel() {
        assert_eq!(classify('Y', &chars("THY")), LetterClass::Vowel);
        assert_eq!(classify('Ý', &chars("LÝ")), LetterClass::Vowel);
        assert_eq!(classify('Y', &chars("Y")), LetterClass::Vowel);
    }

    #[test]
    fn y_with_other_vowel_is_consonant() {
        assert_eq!(classify('Y', &chars("YẾN")), LetterClass::Consonant);
        assert_eq!(classify('Y', &chars("DUYÊN")), LetterClass::Consonant);
        assert_eq!(classify('Y', &chars("NGUY")), LetterClass::Consonant);
    }

    #[test]
    fn two_ys_do_not_disqualify_each_other() {
        assert_eq!(classify('Y', &chars("YY")), LetterClass::Vowel);
    }

    #[test]
    fn unmapped_falls_to_consonant() {
        assert_eq!(classify('-', &chars("A-B")), LetterClass::Consonant);
    }
}
