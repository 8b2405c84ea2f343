//! Plural forms for generated noun phrases.
//!
//! A [`Pluralizer`] applies ordinary English suffix rules on top of a table
//! of irregular words. Callers may register their own irregulars; the default
//! table already maps `"error"` to itself so generated text reads
//! "a list of error" the way the domain expects.
//!
//! Only the head of a phrase changes: the segment before the first
//! preposition, and within it only its last word. `"read only collection"`
//! becomes `"read only collections"`, `"list of integers"` becomes
//! `"lists of integers"`.

use std::collections::{HashMap, HashSet};

use super::lexicon;
use super::morpho;
use super::split;

/// Prepositions that end the head segment of a noun phrase.
const HEAD_TERMINATORS: &[&str] = &["of", "with", "for", "from", "in", "to", "and", "that"];

const DEFAULT_IRREGULARS: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("appendix", "appendices"),
    ("atlas", "atlases"),
    ("axis", "axes"),
    ("bias", "biases"),
    ("bus", "buses"),
    ("canvas", "canvases"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("echo", "echoes"),
    ("error", "error"),
    ("foot", "feet"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("lens", "lenses"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("status", "statuses"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

const DEFAULT_UNCOUNTABLES: &[&str] = &[
    "audio", "data", "deer", "equipment", "feedback", "firmware", "fish", "hardware",
    "information", "metadata", "middleware", "money", "news", "rice", "series", "sheep",
    "software", "species", "traffic",
];

/// English pluralizer with a registrable irregular table.
#[derive(Debug, Clone)]
pub struct Pluralizer {
    irregulars: HashMap<String, String>,
    uncountables: HashSet<String>,
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pluralizer {
    /// Create a pluralizer with the built-in irregular and uncountable words.
    pub fn new() -> Self {
        Self {
            irregulars: DEFAULT_IRREGULARS
                .iter()
                .map(|(s, p)| (s.to_string(), p.to_string()))
                .collect(),
            uncountables: DEFAULT_UNCOUNTABLES.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Register an irregular plural, replacing any existing entry.
    pub fn register_irregular(&mut self, singular: &str, plural: &str) {
        self.irregulars
            .insert(singular.to_lowercase(), plural.to_lowercase());
    }

    /// Builder-style [`register_irregular`](Self::register_irregular).
    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        self.register_irregular(singular, plural);
        self
    }

    /// Pluralize the head of `phrase`.
    ///
    /// Nothing changes when the head word is a leading verb, or when
    /// `next_word` is one: those come from member names like `LoadUser` where
    /// the split words are an action, not a noun. Container entries are type
    /// names and go through [`force_pluralization`](Self::force_pluralization).
    pub fn pluralize(&self, phrase: &str, next_word: Option<&str>) -> String {
        if next_word.is_some_and(lexicon::is_pure_verb) {
            return phrase.to_string();
        }
        self.pluralize_head(phrase, true)
    }

    /// Pluralize the head of `phrase` without the verb checks.
    pub fn force_pluralization(&self, phrase: &str) -> String {
        self.pluralize_head(phrase, false)
    }

    /// Whether a single word already reads as plural.
    pub fn is_plural(&self, word: &str) -> bool {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return false;
        }
        if let Some(plural) = self.irregulars.get(&lower) {
            return *plural == lower;
        }
        if self.uncountables.contains(&lower) || self.irregulars.values().any(|p| *p == lower) {
            return true;
        }
        lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
    }

    fn pluralize_head(&self, phrase: &str, check_verbs: bool) -> String {
        // Markup (cross references, CDATA) is never inflected.
        if phrase.trim_start().starts_with('<') {
            return phrase.to_string();
        }

        let words: Vec<&str> = phrase.split(' ').collect();
        let head_len = words
            .iter()
            .skip(1)
            .position(|w| HEAD_TERMINATORS.contains(&w.to_lowercase().as_str()))
            .map_or(words.len(), |pos| pos + 1);

        let Some(target_index) = (0..head_len).rev().find(|&i| !words[i].is_empty()) else {
            return phrase.to_string();
        };
        let target = words[target_index];

        if check_verbs && target_index == 0 && lexicon::is_pure_verb(target) {
            return phrase.to_string();
        }

        let plural = self.pluralize_word(target);
        let mut out: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        out[target_index] = plural;
        out.join(" ")
    }

    /// Pluralize one word. Unknown shapes fall back to the word unchanged.
    fn pluralize_word(&self, word: &str) -> String {
        if word.is_empty() || !word.chars().any(char::is_alphabetic) {
            return word.to_string();
        }

        if split::is_acronym(word) {
            return format!("{word}s");
        }

        let lower = word.to_lowercase();

        if let Some(plural) = self.irregulars.get(&lower) {
            return morpho::format_case(word, plural);
        }

        if self.uncountables.contains(&lower) || self.is_plural(word) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix(['y', 'Y']) {
            let before = stem.chars().last().map(|c| c.to_ascii_lowercase());
            if !matches!(before, Some('a' | 'e' | 'i' | 'o' | 'u') | None) {
                return format!("{stem}ies");
            }
        }

        if lower.ends_with('s')
            || lower.ends_with('x')
            || lower.ends_with('z')
            || lower.ends_with("ch")
            || lower.ends_with("sh")
        {
            return format!("{word}es");
        }

        format!("{word}s")
    }
}
