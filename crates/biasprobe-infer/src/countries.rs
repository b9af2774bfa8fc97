//! Country records and approximate country-name search.
//!
//! `CountryIndex` ranks candidates in tiers: exact name or ISO code, exact
//! alias, exact subdivision (the parent country is returned), containment of
//! the query inside a longer name, and Jaro-Winkler similarity above a fixed
//! threshold. An empty result means "no match".

mod data;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

pub use data::{COUNTRIES, SUBDIVISIONS};

/// Minimum Jaro-Winkler similarity for an approximate match.
pub const FUZZY_THRESHOLD: f64 = 0.88;

/// Shortest query considered for containment and approximate matching.
const MIN_PARTIAL_LEN: usize = 4;

const SCORE_EXACT: f64 = 100.0;
const SCORE_ALIAS: f64 = 90.0;
const SCORE_SUBDIVISION: f64 = 80.0;
const SCORE_WORD: f64 = 70.0;
const SCORE_SUBSTRING: f64 = 50.0;
const SCORE_FUZZY_MAX: f64 = 40.0;

/// Continent grouping used by the gold-sample generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Continent {
    /// Continents that contain sampled countries.
    pub fn inhabited() -> &'static [Continent] {
        &[
            Self::Africa,
            Self::Asia,
            Self::Europe,
            Self::NorthAmerica,
            Self::SouthAmerica,
            Self::Oceania,
        ]
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Africa => write!(f, "Africa"),
            Self::Antarctica => write!(f, "Antarctica"),
            Self::Asia => write!(f, "Asia"),
            Self::Europe => write!(f, "Europe"),
            Self::NorthAmerica => write!(f, "North America"),
            Self::Oceania => write!(f, "Oceania"),
            Self::SouthAmerica => write!(f, "South America"),
        }
    }
}

/// One ISO 3166-1 country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    /// Canonical ISO short name.
    pub name: &'static str,
    pub continent: Continent,
    /// Lower-case alternative names (short forms, major cities, regions).
    pub aliases: &'static [&'static str],
}

/// Approximate country-name search.
pub trait CountryLookup: Send + Sync {
    /// Ranked candidates for a free-text query, best first. Empty on no match.
    fn search(&self, query: &str) -> Vec<&CountryRecord>;

    /// Canonical name of the best candidate.
    fn best_match(&self, query: &str) -> Option<String> {
        self.search(query).first().map(|c| c.name.to_string())
    }
}

struct IndexedCountry {
    record: &'static CountryRecord,
    name: String,
    aliases: Vec<String>,
    /// Folded; only exact and approximate matches count, no containment.
    subdivisions: Vec<String>,
    /// As given, for gazetteers.
    subdivision_names: Vec<String>,
}

/// In-memory index over a static country table.
pub struct CountryIndex {
    entries: Vec<IndexedCountry>,
}

impl CountryIndex {
    /// Index the built-in ISO table and its subdivisions.
    pub fn builtin() -> Self {
        Self::new(COUNTRIES).with_subdivisions(SUBDIVISIONS)
    }

    pub fn new(records: &'static [CountryRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| IndexedCountry {
                record,
                name: fold(record.name),
                aliases: record.aliases.iter().map(|a| fold(a)).collect(),
                subdivisions: Vec::new(),
                subdivision_names: Vec::new(),
            })
            .collect();
        Self { entries }
    }

    /// Attach subdivision names to their countries by alpha-2 code. Codes
    /// missing from the index are ignored.
    pub fn with_subdivisions(mut self, table: &[(&str, &[&str])]) -> Self {
        for (code, names) in table {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.record.alpha_2.eq_ignore_ascii_case(code))
            {
                entry.subdivisions.extend(names.iter().map(|n| fold(n)));
                entry.subdivision_names.extend(names.iter().map(|n| n.to_lowercase()));
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup by ISO alpha-2 code (case-insensitive).
    pub fn by_alpha_2(&self, code: &str) -> Option<&CountryRecord> {
        self.entries
            .iter()
            .find(|e| e.record.alpha_2.eq_ignore_ascii_case(code))
            .map(|e| e.record)
    }

    /// All countries on a continent, in table order.
    pub fn by_continent(&self, continent: Continent) -> Vec<&CountryRecord> {
        self.entries
            .iter()
            .filter(|e| e.record.continent == continent)
            .map(|e| e.record)
            .collect()
    }

    /// Lower-case place phrases suitable for a tagger gazetteer.
    ///
    /// Names carrying an ISO qualifier ("Korea, Republic of") are skipped;
    /// their aliases cover the spoken form.
    pub fn place_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for entry in &self.entries {
            if !entry.record.name.contains([',', '(']) {
                names.push(entry.record.name.to_lowercase());
            }
            names.extend(entry.record.aliases.iter().map(|a| a.to_string()));
            names.extend(entry.subdivision_names.iter().cloned());
        }
        names
    }

    fn score(entry: &IndexedCountry, query: &str) -> f64 {
        let record = entry.record;
        if (2..=3).contains(&query.len())
            && (query.eq_ignore_ascii_case(record.alpha_2) || query.eq_ignore_ascii_case(record.alpha_3))
        {
            return SCORE_EXACT;
        }
        if entry.name == query {
            return SCORE_EXACT;
        }
        if entry.aliases.iter().any(|a| a == query) {
            return SCORE_ALIAS;
        }
        if entry.subdivisions.iter().any(|s| s == query) {
            return SCORE_SUBDIVISION;
        }
        if query.len() < MIN_PARTIAL_LEN {
            return 0.0;
        }

        let mut best: f64 = 0.0;
        for candidate in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
            let score = if contains_words(candidate, query) {
                SCORE_WORD
            } else if candidate.contains(query) {
                SCORE_SUBSTRING
            } else {
                fuzzy_score(query, candidate)
            };
            best = best.max(score);
        }
        for subdivision in &entry.subdivisions {
            best = best.max(fuzzy_score(query, subdivision));
        }
        best
    }
}

impl Default for CountryIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryLookup for CountryIndex {
    fn search(&self, query: &str) -> Vec<&CountryRecord> {
        let query = fold(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &CountryRecord)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = Self::score(entry, &query);
                (score > 0.0).then_some((score, entry.record))
            })
            .collect();

        // Stable: equal scores keep table order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, record)| record).collect()
    }
}

/// Fold for comparison: strip diacritics, lower-case, drop periods and
/// apostrophes, turn other punctuation into spaces, collapse whitespace.
pub fn fold(text: &str) -> String {
    let stripped: String = text
        .nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .filter(|c| !matches!(c, '.' | '\'' | '’'))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn fuzzy_score(query: &str, candidate: &str) -> f64 {
    let similarity = strsim::jaro_winkler(query, candidate);
    if similarity >= FUZZY_THRESHOLD {
        similarity * SCORE_FUZZY_MAX
    } else {
        0.0
    }
}

/// Whether `needle` appears in `haystack` as a run of whole words.
fn contains_words(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start].chars().next_back().map_or(true, |c| c == ' ');
        let after_ok = haystack[end..].chars().next().map_or(true, |c| c == ' ');
        before_ok && after_ok
    })
}
