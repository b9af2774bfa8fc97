//! Demonym lexicon, suffix rules and nationality keywords.
//!
//! The lexicon is consulted before any derived or fuzzy lookup: a direct
//! entry always wins over suffix rewriting.

use std::collections::HashMap;

/// `(suffix, replacement)` rewrites applied in declared order on a lexicon miss.
/// Longer or more specific suffixes come first.
pub const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ish", ""),  // Polish -> Pol
    ("ese", ""),  // Senegalese -> Senegal
    ("ian", "ia"), // Bolivian -> Bolivia
    ("i", "ia"),  // Nepali -> Nepalia
    ("ic", "ia"), // Germanic -> Germania
    ("ean", "ea"), // Chilean -> Chilea
    ("an", "a"),  // Cuban -> Cuba
];

/// Closed keyword list matched against lower-cased token text when the
/// tagger missed a demonym (typically one written in lower case).
pub const NATIONALITY_KEYWORDS: &[&str] = &[
    "indian", "greek", "french", "german", "japanese", "chinese", "russian", "spanish",
    "italian", "british", "american", "mexican", "canadian", "australian", "brazilian",
    "egyptian", "turkish", "indonesian", "nigerian", "south african", "kenyan", "ethiopian",
    "moroccan", "israeli", "syrian", "lebanese", "jordanian", "afghan", "kazakh", "uzbek",
    "tajik", "turkmen", "mongolian", "thai", "filipino", "malaysian", "singaporean",
    "vietnamese", "laotian", "cambodian", "myanmar", "palestinian", "ukrainian",
];

/// Religious, political and regional group words. These are tagged as
/// NORP like demonyms but have no lexicon entry.
pub const GROUP_WORDS: &[&str] = &[
    "asian", "african", "european", "latino", "latina", "hispanic", "arab", "middle eastern",
    "caucasian", "scandinavian", "muslim", "christian", "catholic", "protestant", "jewish",
    "hindu", "buddhist", "sikh", "democrat", "republican", "socialist", "communist",
];

static DEMONYMS: &[(&str, &str)] = &[
    ("french", "France"),
    ("greek", "Greece"),
    ("dutch", "Netherlands"),
    ("danish", "Denmark"),
    ("finnish", "Finland"),
    ("swedish", "Sweden"),
    ("english", "United Kingdom"),
    ("british", "United Kingdom"),
    ("welsh", "United Kingdom"),
    ("scotch", "United Kingdom"),
    ("scottish", "United Kingdom"),
    ("irish", "Ireland"),
    ("spanish", "Spain"),
    ("portuguese", "Portugal"),
    ("german", "Germany"),
    ("italian", "Italy"),
    ("russian", "Russia"),
    ("chinese", "China"),
    ("japanese", "Japan"),
    ("vietnamese", "Vietnam"),
    ("korean", "Korea"),
    ("iranian", "Iran"),
    ("iraqi", "Iraq"),
    ("saudi", "Saudi Arabia"),
    ("egyptian", "Egypt"),
    ("australian", "Australia"),
    ("canadian", "Canada"),
    ("brazilian", "Brazil"),
    ("mexican", "Mexico"),
    ("indian", "India"),
    ("pakistani", "Pakistan"),
    ("turkish", "Turkey"),
    ("indonesian", "Indonesia"),
    ("nigerian", "Nigeria"),
    ("south african", "South Africa"),
    ("kenyan", "Kenya"),
    ("ugandan", "Uganda"),
    ("ethiopian", "Ethiopia"),
    ("moroccan", "Morocco"),
    ("israeli", "Israel"),
    ("palestinian", "Palestine"),
    ("palenstinian", "Palestine"),
    ("syrian", "Syria"),
    ("lebanese", "Lebanon"),
    ("jordanian", "Jordan"),
    ("afghan", "Afghanistan"),
    ("kazakh", "Kazakhstan"),
    ("uzbek", "Uzbekistan"),
    ("tajik", "Tajikistan"),
    ("turkmen", "Turkmenistan"),
    ("mongolian", "Mongolia"),
    ("thai", "Thailand"),
    ("filipino", "Philippines"),
    ("filipina", "Philippines"),
    ("malaysian", "Malaysia"),
    ("singaporean", "Singapore"),
    ("laotian", "Laos"),
    ("cambodian", "Cambodia"),
    ("myanmar", "Myanmar"),
    ("american", "United States"),
    ("ukrainian", "Ukraine"),
    ("indian-american", "United States"),
    ("chinese-american", "United States"),
    ("japanese-american", "United States"),
    ("korean-american", "United States"),
    ("vietnamese-american", "United States"),
    ("filipino-american", "United States"),
    ("pakistani-american", "United States"),
    ("pakistani-indian", "India"),
    ("congolese", "Congo"),
    ("ghanaian", "Ghana"),
    ("curacao", "Curaçao"),
    ("curaçao", "Curaçao"),
    ("ecuadorian", "Ecuador"),
    ("swiss", "Switzerland"),
    ("norwegian", "Norway"),
    ("new zealander", "New Zealand"),
];

/// Lower-cased demonym -> canonical country name. Many-to-one, read-only.
#[derive(Debug, Clone)]
pub struct NationalityLexicon {
    entries: HashMap<String, String>,
}

impl NationalityLexicon {
    /// Build the built-in lexicon.
    pub fn builtin() -> Self {
        Self::from_pairs(DEMONYMS.iter().copied())
    }

    /// Build a lexicon from `(demonym, country)` pairs. Keys are lower-cased.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(demonym, country)| (demonym.trim().to_lowercase(), country.to_string()))
            .collect();
        Self { entries }
    }

    /// Exact lookup of an already-normalized key.
    pub fn get(&self, demonym: &str) -> Option<&str> {
        self.entries.get(demonym).map(String::as_str)
    }

    /// All demonyms in the lexicon (unordered).
    pub fn demonyms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NationalityLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether a lower-cased token is in the closed keyword list.
pub fn is_nationality_keyword(lower: &str) -> bool {
    NATIONALITY_KEYWORDS.contains(&lower)
}
