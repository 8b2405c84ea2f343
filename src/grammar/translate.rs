//! User word maps: late-stage terminology substitution.
//!
//! A [`WordMap`] replaces a word in generated text with a configured
//! translation (`"int"` → `"integer"`, `"Dto"` → `"data transfer object"`).
//! Rules run in list order and each one sees the output of the previous one.
//! Matching is case-insensitive and on word boundaries; the leading case of
//! the matched text is kept on the translation.
//!
//! Markup spans (`<see cref="Foo"/>`, CDATA blocks) are lifted out of the
//! phrase before any rule runs and put back afterwards, so a rule can never
//! rewrite an attribute value or tear a tag apart.

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::morpho;
use super::split;

/// Condition gating a [`WordMap`] rule, evaluated against the whole phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "kebab-case")]
pub enum WordCondition {
    /// Only the phrase's first word is replaced.
    LeadingWord,
    /// Every occurrence except a leading one is replaced.
    NotLeadingWord,
    /// The rule fires only when the phrase contains `text` (case-insensitive).
    PhraseContains { text: String },
    /// The rule fires only when the phrase does not contain `text`.
    PhraseLacks { text: String },
}

/// A single substitution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMap {
    pub word: String,
    pub translation: String,
    /// Flattened: `when = "leading-word"` sits beside `word` and `translation`.
    #[serde(flatten)]
    pub word_evaluator: Option<WordCondition>,
}

impl WordMap {
    /// An unconditional rule.
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            word_evaluator: None,
        }
    }

    /// Attach a gating condition.
    pub fn when(mut self, condition: WordCondition) -> Self {
        self.word_evaluator = Some(condition);
        self
    }

    /// Word-boundary pattern for this rule's word.
    fn pattern(&self) -> Result<Regex, regex::Error> {
        let escaped = regex::escape(&self.word);
        let starts_word = self.word.chars().next().is_some_and(is_word_char);
        let ends_word = self.word.chars().last().is_some_and(is_word_char);
        let pattern = format!(
            "{}{escaped}{}",
            if starts_word { r"\b" } else { "" },
            if ends_word { r"\b" } else { "" },
        );
        RegexBuilder::new(&pattern).case_insensitive(true).build()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The built-in rules used when no configuration overrides them.
pub fn default_word_maps() -> Vec<WordMap> {
    vec![
        WordMap::new("int", "integer"),
        WordMap::new("Int32", "integer"),
        WordMap::new("Int64", "long integer"),
        WordMap::new("bool", "boolean"),
        WordMap::new("Dto", "data transfer object"),
        WordMap::new("To", "Converts to").when(WordCondition::LeadingWord),
    ]
}

/// Word maps with their patterns compiled once.
///
/// Rules whose pattern does not compile are logged and left out.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    rules: Vec<(WordMap, Regex)>,
}

impl Translator {
    pub fn new(word_maps: &[WordMap]) -> Self {
        let rules = word_maps
            .iter()
            .filter(|map| !map.word.is_empty())
            .filter_map(|map| match map.pattern() {
                Ok(pattern) => Some((map.clone(), pattern)),
                Err(e) => {
                    tracing::warn!(word = %map.word, error = %e, "skipping word map with unusable pattern");
                    None
                }
            })
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `phrase` in order.
    pub fn apply(&self, phrase: &str) -> String {
        if phrase.is_empty() || self.rules.is_empty() {
            return phrase.to_string();
        }

        let (mut text, spans) = protect_markup(phrase);
        for (map, pattern) in &self.rules {
            text = apply_rule(&text, map, pattern);
        }
        restore_markup(&text, &spans)
    }
}

/// Apply `word_maps` to `phrase` in order, compiling them for this call.
///
/// Hot paths hold a [`Translator`] instead.
pub fn apply_user_translations(phrase: &str, word_maps: &[WordMap]) -> String {
    Translator::new(word_maps).apply(phrase)
}

fn apply_rule(text: &str, map: &WordMap, pattern: &Regex) -> String {
    let replace = |caps: &Captures| match_case(&caps[0], &map.translation);

    match &map.word_evaluator {
        None => pattern.replace_all(text, replace).into_owned(),
        Some(WordCondition::LeadingWord) => match pattern.find(text) {
            Some(m) if text[..m.start()].trim().is_empty() => {
                let translated = match_case(m.as_str(), &map.translation);
                format!("{}{translated}{}", &text[..m.start()], &text[m.end()..])
            }
            _ => text.to_string(),
        },
        Some(WordCondition::NotLeadingWord) => {
            let mut out = String::with_capacity(text.len());
            let mut last = 0;
            for m in pattern.find_iter(text) {
                out.push_str(&text[last..m.start()]);
                if text[..m.start()].trim().is_empty() {
                    out.push_str(m.as_str());
                } else {
                    out.push_str(&match_case(m.as_str(), &map.translation));
                }
                last = m.end();
            }
            out.push_str(&text[last..]);
            out
        }
        Some(WordCondition::PhraseContains { text: needle }) => {
            if contains_ignore_case(text, needle) {
                pattern.replace_all(text, replace).into_owned()
            } else {
                text.to_string()
            }
        }
        Some(WordCondition::PhraseLacks { text: needle }) => {
            if contains_ignore_case(text, needle) {
                text.to_string()
            } else {
                pattern.replace_all(text, replace).into_owned()
            }
        }
    }
}

/// Carry the matched text's leading case over to the translation.
fn match_case(matched: &str, translation: &str) -> String {
    let leading_acronym = translation
        .split_whitespace()
        .next()
        .is_some_and(split::is_acronym);
    if matched.chars().next().is_some_and(char::is_lowercase) && !leading_acronym {
        morpho::decapitalize(translation)
    } else {
        morpho::format_case(matched, translation)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// First private-use code point; each protected span becomes one such char.
const PLACEHOLDER_BASE: u32 = 0xE000;
const PLACEHOLDER_LIMIT: u32 = 0xF8FF;

/// Replace every `<...>` span with a single private-use placeholder char.
///
/// Placeholders are not word characters, so no rule can match across or
/// inside them.
fn protect_markup(phrase: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(phrase.len());
    let mut spans = Vec::new();
    let mut rest = phrase;

    while let Some(start) = rest.find('<') {
        let Some(len) = markup_len(&rest[start..]) else {
            break;
        };
        let Some(placeholder) = char::from_u32(PLACEHOLDER_BASE + spans.len() as u32)
            .filter(|c| (*c as u32) <= PLACEHOLDER_LIMIT)
        else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push(placeholder);
        spans.push(rest[start..start + len].to_string());
        rest = &rest[start + len..];
    }
    out.push_str(rest);
    (out, spans)
}

/// Byte length of the markup span at the start of `s`, if it closes.
fn markup_len(s: &str) -> Option<usize> {
    if s.starts_with("<![CDATA[") {
        return s.find("]]>").map(|end| end + 3);
    }
    s.find('>').map(|end| end + 1)
}

fn restore_markup(text: &str, spans: &[String]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    text.chars()
        .map(|c| {
            let index = (c as u32).wrapping_sub(PLACEHOLDER_BASE) as usize;
            match spans.get(index) {
                Some(span) if (PLACEHOLDER_BASE..=PLACEHOLDER_LIMIT).contains(&(c as u32)) => {
                    span.clone()
                }
                _ => c.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_whole_words_only() {
        let maps = vec![WordMap::new("int", "integer")];
        assert_eq!(
            apply_user_translations("list of int", &maps),
            "list of integer"
        );
        assert_eq!(apply_user_translations("interface", &maps), "interface");
    }

    #[test]
    fn keeps_leading_case() {
        let maps = vec![WordMap::new("int", "integer")];
        assert_eq!(apply_user_translations("Int value", &maps), "Integer value");
    }

    #[test]
    fn rules_apply_sequentially() {
        let maps = vec![
            WordMap::new("Dto", "data transfer object"),
            WordMap::new("object", "instance"),
        ];
        assert_eq!(
            apply_user_translations("the user dto", &maps),
            "the user data transfer instance"
        );
    }

    #[test]
    fn leading_word_condition() {
        let maps = vec![WordMap::new("To", "Converts to").when(WordCondition::LeadingWord)];
        assert_eq!(
            apply_user_translations("to string", &maps),
            "converts to string"
        );
        assert_eq!(
            apply_user_translations("send to queue", &maps),
            "send to queue"
        );
    }

    #[test]
    fn not_leading_word_condition() {
        let maps = vec![WordMap::new("set", "assign").when(WordCondition::NotLeadingWord)];
        assert_eq!(
            apply_user_translations("set the set", &maps),
            "set the assign"
        );
    }

    #[test]
    fn phrase_conditions() {
        let contains = vec![
            WordMap::new("key", "lookup key").when(WordCondition::PhraseContains {
                text: "dictionary".into(),
            }),
        ];
        assert_eq!(
            apply_user_translations("a dictionary key", &contains),
            "a dictionary lookup key"
        );
        assert_eq!(apply_user_translations("a key", &contains), "a key");

        let lacks = vec![WordMap::new("key", "lookup key").when(WordCondition::PhraseLacks {
            text: "dictionary".into(),
        })];
        assert_eq!(apply_user_translations("a key", &lacks), "a lookup key");
    }

    #[test]
    fn markup_is_never_rewritten() {
        let maps = vec![WordMap::new("Foo", "bar baz"), WordMap::new("see", "look")];
        let phrase = "a <see cref=\"Foo\"/> of Foo";
        assert_eq!(
            apply_user_translations(phrase, &maps),
            "a <see cref=\"Foo\"/> of Bar baz"
        );
    }

    #[test]
    fn cdata_is_protected() {
        let maps = vec![WordMap::new("int", "integer")];
        assert_eq!(
            apply_user_translations("<![CDATA[List<int>]]>", &maps),
            "<![CDATA[List<int>]]>"
        );
    }

    #[test]
    fn conditions_serialize_beside_the_rule() {
        let map = WordMap::new("To", "Converts to").when(WordCondition::LeadingWord);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["when"], "leading-word");

        let plain: WordMap =
            serde_json::from_str(r#"{ "word": "int", "translation": "integer" }"#).unwrap();
        assert_eq!(plain.word_evaluator, None);
    }

    #[test]
    fn unterminated_markup_is_plain_text() {
        let maps = vec![WordMap::new("int", "integer")];
        assert_eq!(apply_user_translations("a < int", &maps), "a < integer");
    }

    #[test]
    fn translator_compiles_once_and_skips_empty_words() {
        let translator = Translator::new(&[
            WordMap::new("", "ignored"),
            WordMap::new("int", "integer"),
            WordMap::new("Dto", "data transfer object"),
        ]);
        assert_eq!(translator.len(), 2);
        assert_eq!(translator.apply("list of int"), "list of integer");
        assert_eq!(translator.apply("user dto"), "user data transfer object");
        assert!(Translator::default().is_empty());
        assert_eq!(Translator::default().apply("int"), "int");
    }
}
