//! English morphology helpers for generated comment text.
//!
//! Rule-based and small on purpose: articles, first-letter casing and a
//! conjunction joiner. Plural forms live in [`super::plural`].

use super::split;

/// Choose "a" or "an" for the word that follows.
///
/// Acronyms are read letter by letter ("an HTTP client", "a URL"); other
/// words use the vowel heuristic with the usual silent-h and "you" sound
/// exceptions.
pub fn article(word: &str) -> &'static str {
    let trimmed = word.trim();
    let first_word = trimmed.split_whitespace().next().unwrap_or("");

    if split::is_acronym(first_word) {
        return match first_word.chars().next() {
            Some('A' | 'E' | 'F' | 'H' | 'I' | 'L' | 'M' | 'N' | 'O' | 'R' | 'S' | 'X') => "an",
            _ => "a",
        };
    }

    let first = first_word.to_lowercase();

    if first.starts_with("honest")
        || first.starts_with("hour")
        || first.starts_with("heir")
        || first.starts_with("honor")
    {
        return "an";
    }

    if first.starts_with("uni")
        || first.starts_with("use")
        || first.starts_with("usu")
        || first.starts_with("uti")
        || first.starts_with("uri")
        || first.starts_with("eu")
        || first.starts_with("one")
    {
        return "a";
    }

    match first.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Capitalize the first letter of a string, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            upper + chars.as_str()
        }
    }
}

/// Lower-case the first letter of a string, leaving the rest untouched.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let lower: String = c.to_lowercase().collect();
            lower + chars.as_str()
        }
    }
}

/// Preserve the leading case of `original` on `replacement`.
pub fn format_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

/// Join phrases with a repeated conjunction: "a and b and c".
pub fn join_repeated(items: &[String], conjunction: &str) -> String {
    items.join(&format!(" {conjunction} "))
}

/// Trim and make sure the sentence ends with exactly one period.
pub fn terminate(sentence: &str) -> String {
    let trimmed = sentence.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{trimmed}.")
}
