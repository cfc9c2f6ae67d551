//! Normalizer: punctuation and casing helpers for text handed to, or shown
//! from, the search engine.
//!
//! Nothing in the search pipeline calls these; they are optional pre- and
//! post-processors. [`format_punctuation`] pads punctuation so it splits into
//! its own whitespace token, and [`unformat_punctuation`] reverses that for
//! display.

/// Vowels for the English a/an rule plus common accented forms. `h` is
/// included on purpose.
pub const VOWELS: &[char] = &[
    'a', 'A', 'á', 'Á', 'à', 'À', 'â', 'Â', 'ã', 'Ã', 'ä', 'Ä', 'å', 'Å',
    'e', 'E', 'é', 'É', 'è', 'È', 'ê', 'Ê', 'ë', 'Ë',
    'i', 'I', 'í', 'Í', 'ì', 'Ì', 'î', 'Î', 'ï', 'Ï',
    'o', 'O', 'ó', 'Ó', 'ò', 'Ò', 'ô', 'Ô', 'õ', 'Õ', 'ö', 'Ö',
    'u', 'U', 'ú', 'Ú', 'ù', 'Ù', 'û', 'Û', 'ü', 'Ü',
    'h', 'H',
    'æ', 'Æ',
    'œ', 'Œ',
    'ø', 'Ø',
];

/// Punctuation that separates clauses.
pub const SPACING_PUNCTUATION: &[char] = &[':', ';', ','];
/// Punctuation that ends sentences.
pub const SENTENCE_PUNCTUATION: &[char] = &['.', '?', '!'];

const SENTENCE_BREAKS: [(&str, &str); 3] = [("._", ". "), ("?_", "? "), ("!_", "! ")];

fn is_punctuation(c: char) -> bool {
    SPACING_PUNCTUATION.contains(&c) || SENTENCE_PUNCTUATION.contains(&c)
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Separate punctuation from the words around it.
///
/// - `;` is always padded on both sides.
/// - `,` and `:` are padded when neither neighbour is a digit, so `1,000`
///   and `3:16` survive; a `,` right after a number and before a space gets
///   only a leading space (`In 1997 , the`).
/// - A sentence mark directly after a `.` gets a leading space unless the
///   dot closes an uppercase acronym.
/// - A trailing punctuation mark gets a leading space.
///
/// With `nonbreaking`, the space after `.`, `?` or `!` becomes `_` so a
/// sentence stays one whitespace token.
pub fn format_punctuation(text: &str, nonbreaking: bool) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 1;

    while i < chars.len() {
        let c = chars[i];
        let prev = chars[i - 1];
        let space_before = prev.is_whitespace();
        let number_before = prev.is_numeric();

        if i == chars.len() - 1 {
            if is_punctuation(c) && !space_before && prev != c {
                chars.insert(i, ' ');
            }
            break;
        }

        let next = chars[i + 1];
        let space_after = next.is_whitespace();
        let number_after = next.is_numeric();

        match c {
            ',' if number_before && number_after => {}
            ',' | ':' if !number_before && !number_after => {
                if !space_after {
                    chars.insert(i + 1, ' ');
                }
                if !space_before {
                    chars.insert(i, ' ');
                }
            }
            ',' if number_before && space_after => chars.insert(i, ' '),
            ';' => {
                if !space_after {
                    chars.insert(i + 1, ' ');
                }
                if !space_before {
                    chars.insert(i, ' ');
                }
            }
            '.' | '?' | '!' if !number_before && !number_after => {
                if nonbreaking && space_after {
                    chars[i + 1] = '_';
                }
                let acronym = i > 1 && chars[i - 2].is_uppercase();
                if !space_before && prev != c && prev == '.' && !acronym {
                    chars.insert(i, ' ');
                }
            }
            _ => {}
        }
        i += 1;
    }

    chars.into_iter().collect()
}

/// Undo [`format_punctuation`]: drop spaces in front of punctuation and turn
/// `._`, `?_`, `!_` back into sentence breaks.
pub fn unformat_punctuation(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 1;

    while i < chars.len() {
        if is_punctuation(chars[i]) && chars[i - 1].is_whitespace() {
            chars.remove(i - 1);
        }
        i += 1;
    }

    let mut text: String = chars.into_iter().collect();
    for (nonbreaking, breaking) in SENTENCE_BREAKS {
        text = text.replace(nonbreaking, breaking);
    }
    text
}

// ---------------------------------------------------------------------------
// Casing and spacing
// ---------------------------------------------------------------------------

/// Uppercase the first character only.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `text` starts with a character from [`VOWELS`]. Empty text does
/// not.
pub fn starts_with_vowel(text: &str) -> bool {
    text.chars().next().is_some_and(|c| VOWELS.contains(&c))
}

pub fn spaces_to_underscores(text: &str) -> String {
    text.replace(' ', "_")
}

pub fn underscores_to_spaces(text: &str) -> String {
    text.replace('_', " ")
}

pub fn remove_spaces(text: &str) -> String {
    text.replace(' ', "")
}

pub fn remove_underscores(text: &str) -> String {
    text.replace('_', "")
}

/// Insert a space before each uppercase letter that follows a lowercase or
/// non-letter character, turning `WithNamesLikeThis` into
/// `With Names Like This`. Acronym runs stay together, and the text is
/// trimmed first. The first and last characters are never split off.
pub fn break_camel_case(text: &str) -> String {
    let mut chars: Vec<char> = text.trim().chars().collect();
    let mut i = 1;

    while i + 1 < chars.len() {
        let prev = chars[i - 1];
        if chars[i].is_uppercase() && !prev.is_uppercase() && !prev.is_whitespace() {
            chars.insert(i, ' ');
            i += 1;
        }
        i += 1;
    }

    chars.into_iter().collect()
}
