//! Identifier word splitting.
//!
//! Turns a member or type name into the natural words it was built from:
//!
//! - mixed casing splits on case changes, keeping acronyms together
//!   (`"HTTPServer"` → `["HTTP", "Server"]`, `"getHTTPCode"` → `["get", "HTTP", "Code"]`)
//! - single-case names split on separators only; all-upper words keep their
//!   casing (`"MAX_VALUE"` → `["MAX", "VALUE"]`) and all-lower words are
//!   title-cased (`"user_name"` → `["User", "Name"]`)

use super::morpho;

/// Split an identifier into its ordered words. Empty input yields no words.
pub fn split(name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let has_upper = name.chars().any(char::is_uppercase);
    let has_lower = name.chars().any(char::is_lowercase);

    if !(has_upper && has_lower) {
        return split_single_case(name, has_upper);
    }

    split_mixed_case(name)
}

/// Separator characters that never appear inside an output word.
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

fn split_single_case(name: &str, upper: bool) -> Vec<String> {
    name.split(is_separator)
        .filter(|w| !w.is_empty())
        .map(|w| {
            if upper {
                w.to_string()
            } else {
                morpho::capitalize(w)
            }
        })
        .collect()
}

fn split_mixed_case(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_separator(c) {
            flush(&mut words, &mut current);
            i += 1;
            continue;
        }

        if !c.is_uppercase() {
            current.push(c);
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|ch| !ch.is_uppercase())
            .map_or(chars.len(), |offset| i + offset);

        if run_end - i < 2 {
            flush(&mut words, &mut current);
            current.push(c);
            i += 1;
            continue;
        }

        // Upper group: an acronym, possibly glued to the next capitalized word.
        flush(&mut words, &mut current);
        match chars.get(run_end) {
            None => {
                words.push(chars[i..run_end].iter().collect());
            }
            Some(next) if next.is_lowercase() => {
                words.push(chars[i..run_end - 1].iter().collect());
                current.push(chars[run_end - 1]);
            }
            // A digit continues the acronym ("HTTP2"); a separator ends it.
            Some(_) => {
                current.extend(&chars[i..run_end]);
            }
        }
        i = run_end;
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Whether a split word is an acronym (two or more letters, all upper case).
pub fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().all(|c| !c.is_lowercase())
}

/// Lower-case a split word for use mid-sentence, leaving acronyms intact.
pub fn sentence_case(word: &str) -> String {
    if is_acronym(word) {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}
