//! Rule-based English entity tagger.
//!
//! `HeuristicTagger` splits text with a regex tokenizer and marks PERSON,
//! NORP and GPE spans from capitalization and gazetteers: lexicon demonyms,
//! group words, country names with their aliases, and known first names.
//! It is deterministic and needs no model files.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::countries::CountryIndex;
use crate::lexicon::{NationalityLexicon, GROUP_WORDS};
use crate::names::NameGenderTable;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pos {
    Adj,
    Det,
    Noun,
    Num,
    Pron,
    Propn,
    Punct,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityLabel {
    Person,
    /// Nationalities, religious and political groups.
    Norp,
    /// Countries, cities, states.
    Gpe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    /// Byte offset into the tagged text.
    pub start: usize,
    pub pos: Pos,
    pub ent_type: Option<EntityLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    /// Byte range into the tagged text.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaggedDoc {
    pub tokens: Vec<Token>,
    /// Spans in text order.
    pub entities: Vec<EntitySpan>,
}

impl TaggedDoc {
    pub fn entities_with(&self, label: EntityLabel) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(move |e| e.label == label)
    }
}

/// Entity recognizer with coarse POS tags.
pub trait EntityTagger: Send + Sync {
    fn tag(&self, text: &str) -> TaggedDoc;
}

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\p{L}\.){2,}|\p{L}+(?:-\p{L}+)*|['’]\p{L}+|\p{N}+(?:[.,]\p{N}+)*|[^\s\p{L}\p{N}]")
        .unwrap()
});

/// Phrases that name the United States without matching an ISO name.
const US_ALIASES: &[&str] = &["usa", "u.s.a.", "u.s.", "america", "united states"];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "ours", "they", "them", "their", "theirs", "himself",
    "herself", "themselves", "who", "whom", "whose",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
];

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam"];

/// Capitalized words that never start or continue a person name.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set: HashSet<&'static str> = HashSet::new();
    set.extend(PRONOUNS);
    set.extend(DETERMINERS);
    set.extend(HONORIFICS);
    set.extend([
        // Headings that generated descriptions tend to use
        "name", "age", "gender", "nationality", "personality", "appearance", "hair", "eyes",
        "eye", "skin", "height", "build", "description", "physical", "clothing", "style",
        "features", "face", "interests", "hobbies", "background", "traits", "intelligence",
        "education", "subject", "note", "key", "overall", "summary", "example",
        // Labels
        "male", "female", "boy", "girl", "child", "kid", "student", "ai",
        // Subjects
        "mathematics", "math", "maths", "physics", "chemistry", "biology", "science",
        "history", "geography", "literature", "art", "music", "computer",
        // Function words seen sentence-initially
        "in", "on", "at", "with", "and", "or", "but", "if", "as", "of", "for", "to", "from",
        "by", "is", "was", "are", "were", "be", "when", "while", "once", "because", "although",
        "despite", "however", "also", "additionally", "furthermore", "yes", "here", "there",
        "what", "where", "which", "why", "how", "not", "all", "both",
        // Days and months that are not also given names
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
        "january", "february", "march", "july", "september", "october", "november",
        "december",
    ]);
    set
});

/// Words that introduce a name: "a girl named Aiko", "Name: Aiko".
const NAME_CUES: &[&str] = &["named", "called"];

/// Capitalized words that open a sentence in front of a name without being
/// part of it: "Meet Priya", "Young Ottoline".
const LEAD_WORDS: &[&str] = &[
    "meet", "introducing", "presenting", "imagine", "picture", "hello", "hi", "hey",
    "welcome", "young", "little", "dear", "born", "growing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Number,
    Punct,
}

struct RawToken<'a> {
    text: &'a str,
    start: usize,
    lower: String,
    kind: Kind,
    capitalized: bool,
    sentence_start: bool,
}

impl RawToken<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens: Vec<RawToken<'_>> = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let token_text = m.as_str();
        let first = token_text.chars().next().unwrap_or(' ');
        let kind = if first.is_alphabetic() || matches!(first, '\'' | '’') && token_text.chars().count() > 1 {
            Kind::Word
        } else if first.is_numeric() {
            Kind::Number
        } else {
            Kind::Punct
        };
        let sentence_start = match tokens.last() {
            None => true,
            Some(prev) => {
                text[prev.end()..m.start()].contains('\n')
                    || match prev.text {
                        "." => {
                            let before = tokens.len().checked_sub(2).map(|i| tokens[i].lower.as_str());
                            !before.is_some_and(|b| HONORIFICS.contains(&b))
                        }
                        "!" | "?" | ":" | ";" | "*" | "-" | "#" | "•" => true,
                        _ => false,
                    }
            }
        };
        tokens.push(RawToken {
            text: token_text,
            start: m.start(),
            lower: token_text.to_lowercase(),
            kind,
            capitalized: kind == Kind::Word && first.is_uppercase(),
            sentence_start,
        });
    }
    tokens
}

fn phrase_key(tokens: &[RawToken<'_>]) -> String {
    tokens
        .iter()
        .map(|t| t.lower.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gazetteer-driven tagger for English prose.
pub struct HeuristicTagger {
    /// Space-joined lower-cased token sequence -> label.
    phrases: HashMap<String, EntityLabel>,
    max_phrase_len: usize,
    first_names: HashSet<String>,
}

impl HeuristicTagger {
    /// Build from the built-in lexicon, country index and name table.
    pub fn builtin() -> Self {
        Self::new(
            &NationalityLexicon::builtin(),
            &CountryIndex::builtin(),
            &NameGenderTable::builtin(),
        )
    }

    pub fn new(lexicon: &NationalityLexicon, countries: &CountryIndex, names: &NameGenderTable) -> Self {
        let norp = lexicon
            .demonyms()
            .map(str::to_string)
            .chain(GROUP_WORDS.iter().map(|w| w.to_string()));
        let gpe = countries
            .place_names()
            .into_iter()
            .chain(US_ALIASES.iter().map(|a| a.to_string()));
        Self::from_gazetteers(norp, gpe, names.names().map(str::to_string))
    }

    /// Build from raw gazetteers. A phrase listed as both NORP and GPE is GPE.
    pub fn from_gazetteers(
        norp: impl IntoIterator<Item = String>,
        gpe: impl IntoIterator<Item = String>,
        first_names: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut phrases = HashMap::new();
        let mut max_phrase_len = 1;
        let mut add = |phrase: &str, label: EntityLabel| {
            let tokens = tokenize(phrase);
            if tokens.is_empty() {
                return;
            }
            max_phrase_len = max_phrase_len.max(tokens.len());
            phrases.insert(phrase_key(&tokens), label);
        };
        for phrase in norp {
            add(&phrase, EntityLabel::Norp);
        }
        for phrase in gpe {
            add(&phrase, EntityLabel::Gpe);
        }
        Self {
            phrases,
            max_phrase_len,
            first_names: first_names.into_iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    fn is_first_name(&self, token: &RawToken<'_>) -> bool {
        self.first_names.contains(&token.lower)
    }

    fn single_label(&self, token: &RawToken<'_>) -> Option<EntityLabel> {
        self.phrases.get(&token.lower).copied()
    }

    /// Longest gazetteer phrase of at least two tokens starting at `i`.
    fn multi_word_at(&self, tokens: &[RawToken<'_>], i: usize) -> Option<(usize, EntityLabel)> {
        let longest = self.max_phrase_len.min(tokens.len() - i);
        (2..=longest).rev().find_map(|len| {
            self.phrases
                .get(&phrase_key(&tokens[i..i + len]))
                .map(|label| (len, *label))
        })
    }

    /// Token that may be part of a person name.
    fn name_part(&self, token: &RawToken<'_>) -> bool {
        token.capitalized
            && !STOPWORDS.contains(token.lower.as_str())
            && self.single_label(token).is_none()
    }

    /// Consecutive name parts starting at `i`, within one sentence.
    fn run_len(&self, tokens: &[RawToken<'_>], i: usize) -> usize {
        let mut len = 0;
        while i + len < tokens.len()
            && self.name_part(&tokens[i + len])
            && (len == 0 || !tokens[i + len].sentence_start)
        {
            len += 1;
        }
        len
    }

    fn preceded_by_cue(tokens: &[RawToken<'_>], i: usize) -> bool {
        match i.checked_sub(1).map(|p| &tokens[p]) {
            Some(prev) if NAME_CUES.contains(&prev.lower.as_str()) => true,
            Some(prev) if prev.text == ":" => {
                i >= 2 && tokens[..i - 1]
                    .iter()
                    .rev()
                    .find(|t| t.kind == Kind::Word)
                    .is_some_and(|t| t.lower == "name")
            }
            _ => false,
        }
    }

    /// A title-cased line such as "**Early Life**" or "Fun Facts:".
    fn heading_ends_at(tokens: &[RawToken<'_>], end: usize) -> bool {
        match tokens.get(end) {
            None => true,
            Some(next) => next.sentence_start || next.capitalized || matches!(next.text, ":" | "*" | "#"),
        }
    }

    /// Accepted person span `(start, len)` inside a capitalized run, if any.
    ///
    /// A sentence-initial run keeps its first word when it is a known first
    /// name or the run has two or more words. A lead word ("Meet") is dropped,
    /// as is a lone unknown word, which is more often a capitalized verb.
    fn accept_person(&self, tokens: &[RawToken<'_>], i: usize, len: usize) -> Option<(usize, usize)> {
        if Self::preceded_by_cue(tokens, i) {
            return Some((i, len));
        }
        let (start, len) = if !tokens[i].sentence_start || self.is_first_name(&tokens[i]) {
            (i, len)
        } else if LEAD_WORDS.contains(&tokens[i].lower.as_str()) || len == 1 {
            (i + 1, len - 1)
        } else if Self::heading_ends_at(tokens, i + len) {
            return None;
        } else {
            (i, len)
        };
        if len >= 2 || (len == 1 && self.is_first_name(&tokens[start])) {
            Some((start, len))
        } else {
            None
        }
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EntityTagger for HeuristicTagger {
    fn tag(&self, text: &str) -> TaggedDoc {
        let raw = tokenize(text);
        let mut labels: Vec<Option<EntityLabel>> = vec![None; raw.len()];
        let mut entities = Vec::new();

        let mut push = |start: usize, len: usize, label: EntityLabel, labels: &mut Vec<Option<EntityLabel>>| {
            let span_start = raw[start].start;
            let span_end = raw[start + len - 1].end();
            entities.push(EntitySpan {
                text: text[span_start..span_end].to_string(),
                label,
                start: span_start,
                end: span_end,
            });
            for slot in &mut labels[start..start + len] {
                *slot = Some(label);
            }
        };

        let mut i = 0;
        while i < raw.len() {
            let token = &raw[i];
            if !token.capitalized {
                i += 1;
                continue;
            }

            if let Some((len, label)) = self.multi_word_at(&raw, i) {
                push(i, len, label, &mut labels);
                i += len;
                continue;
            }

            if self.is_first_name(token)
                && !STOPWORDS.contains(token.lower.as_str())
                && raw.get(i + 1).is_some_and(|next| self.name_part(next) && !next.sentence_start)
            {
                let mut len = 2;
                while i + len < raw.len() && self.name_part(&raw[i + len]) && !raw[i + len].sentence_start {
                    len += 1;
                }
                push(i, len, EntityLabel::Person, &mut labels);
                i += len;
                continue;
            }

            if let Some(label) = self.single_label(token) {
                push(i, 1, label, &mut labels);
                i += 1;
                continue;
            }

            let len = self.run_len(&raw, i);
            if len == 0 {
                i += 1;
                continue;
            }
            if let Some((start, person_len)) = self.accept_person(&raw, i, len) {
                push(start, person_len, EntityLabel::Person, &mut labels);
            }
            i += len;
        }

        let tokens = raw
            .iter()
            .enumerate()
            .map(|(idx, t)| {
                let ent_type = labels[idx];
                let next_is_lower_word = raw
                    .get(idx + 1)
                    .is_some_and(|n| n.kind == Kind::Word && !n.capitalized);
                let pos = match t.kind {
                    Kind::Punct => Pos::Punct,
                    Kind::Number => Pos::Num,
                    Kind::Word if PRONOUNS.contains(&t.lower.as_str()) => Pos::Pron,
                    Kind::Word if DETERMINERS.contains(&t.lower.as_str()) => Pos::Det,
                    Kind::Word => match ent_type {
                        Some(EntityLabel::Norp) if next_is_lower_word => Pos::Adj,
                        Some(_) => Pos::Propn,
                        None if t.capitalized && !t.sentence_start => Pos::Propn,
                        None if t.text.starts_with(['\'', '’']) => Pos::X,
                        None => Pos::Noun,
                    },
                };
                Token {
                    text: t.text.to_string(),
                    start: t.start,
                    pos,
                    ent_type,
                }
            })
            .collect();

        TaggedDoc { tokens, entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> HeuristicTagger {
        HeuristicTagger::builtin()
    }

    fn spans(doc: &TaggedDoc) -> Vec<(&str, EntityLabel)> {
        doc.entities.iter().map(|e| (e.text.as_str(), e.label)).collect()
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<&str> = tokenize("Min-jun's U.S. trip, 3.5 days!")
            .iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, vec!["Min-jun", "'s", "U.S.", "trip", ",", "3.5", "days", "!"]);
    }

    #[test]
    fn test_person_and_norp() {
        let doc = tagger().tag("Jean Dupont, a French researcher, published work in mathematics.");
        assert_eq!(
            spans(&doc),
            vec![("Jean Dupont", EntityLabel::Person), ("French", EntityLabel::Norp)]
        );
        let french = doc.tokens.iter().find(|t| t.text == "French").unwrap();
        assert_eq!(french.pos, Pos::Adj);
        assert_eq!(french.ent_type, Some(EntityLabel::Norp));
    }

    #[test]
    fn test_multi_word_places() {
        let doc = tagger().tag("She grew up in the United States and later moved to South Korea.");
        assert_eq!(
            spans(&doc),
            vec![("United States", EntityLabel::Gpe), ("South Korea", EntityLabel::Gpe)]
        );
    }

    #[test]
    fn test_multi_word_demonym_beats_single_place() {
        let doc = tagger().tag("A South African boy with curly hair.");
        assert_eq!(spans(&doc), vec![("South African", EntityLabel::Norp)]);
    }

    #[test]
    fn test_headings_are_not_names() {
        let doc = tagger().tag("**Name:** Aarav Patel\n**Gender:** Male\n**Nationality:** Indian");
        assert_eq!(
            spans(&doc),
            vec![("Aarav Patel", EntityLabel::Person), ("Indian", EntityLabel::Norp)]
        );
    }

    #[test]
    fn test_sentence_initial_word_is_dropped() {
        let doc = tagger().tag("Meet Priya, a bright girl from Mumbai.");
        assert_eq!(
            spans(&doc),
            vec![("Priya", EntityLabel::Person), ("Mumbai", EntityLabel::Gpe)]
        );
    }

    #[test]
    fn test_sentence_initial_full_name_is_kept() {
        let doc = tagger().tag("Kaito Nakamura is a Japanese boy who loves numbers.");
        assert_eq!(
            spans(&doc),
            vec![("Kaito Nakamura", EntityLabel::Person), ("Japanese", EntityLabel::Norp)]
        );

        let doc = tagger().tag("Ayşe Yılmaz is a Turkish girl.");
        assert_eq!(
            spans(&doc),
            vec![("Ayşe Yılmaz", EntityLabel::Person), ("Turkish", EntityLabel::Norp)]
        );

        let doc = tagger().tag("He studies hard. Chiamaka Obi, a Nigerian girl, helps him.");
        assert_eq!(
            spans(&doc),
            vec![("Chiamaka Obi", EntityLabel::Person), ("Nigerian", EntityLabel::Norp)]
        );
    }

    #[test]
    fn test_lead_word_before_full_name_is_dropped() {
        let doc = tagger().tag("Meet Kaito Nakamura, a curious boy.");
        assert_eq!(spans(&doc), vec![("Kaito Nakamura", EntityLabel::Person)]);
    }

    #[test]
    fn test_title_cased_heading_is_not_a_name() {
        let doc = tagger().tag("**Early Life**\nFun Facts: she hums while reading.");
        assert!(doc.entities.is_empty());
        let doc = tagger().tag("Growing Up\nShe moved often.");
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_name_cue_accepts_unknown_name() {
        let doc = tagger().tag("There once was a boy named Zorblax who loved numbers.");
        assert_eq!(spans(&doc), vec![("Zorblax", EntityLabel::Person)]);
    }

    #[test]
    fn test_honorific_does_not_end_sentence() {
        let doc = tagger().tag("Dr. Amara Okafor teaches physics.");
        assert_eq!(spans(&doc), vec![("Amara Okafor", EntityLabel::Person)]);
    }

    #[test]
    fn test_us_alias() {
        let doc = tagger().tag("He was born in the U.S.A. to immigrant parents.");
        assert_eq!(spans(&doc), vec![("U.S.A.", EntityLabel::Gpe)]);
    }

    #[test]
    fn test_lowercase_words_are_untagged() {
        let doc = tagger().tag("a french boy who loves chess");
        assert!(doc.entities.is_empty());
        assert!(doc.tokens.iter().all(|t| t.ent_type.is_none()));
    }

    #[test]
    fn test_pronoun_pos() {
        let doc = tagger().tag("It is important to avoid assumptions.");
        assert!(doc.entities.is_empty());
        assert_eq!(doc.tokens[0].pos, Pos::Pron);
        assert_eq!(doc.tokens.last().unwrap().pos, Pos::Punct);
    }

    #[test]
    fn test_custom_gazetteers() {
        let tagger = HeuristicTagger::from_gazetteers(
            vec!["martian".to_string()],
            vec!["mars".to_string(), "martian".to_string()],
            vec!["zed".to_string()],
        );
        let doc = tagger.tag("Zed Quill is Martian and lives on Mars.");
        assert_eq!(
            spans(&doc),
            vec![
                ("Zed Quill", EntityLabel::Person),
                ("Martian", EntityLabel::Gpe),
                ("Mars", EntityLabel::Gpe),
            ]
        );
    }
}
