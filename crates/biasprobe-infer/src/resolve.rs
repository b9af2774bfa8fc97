//! Demonym or place text -> country name.

use tracing::debug;

use crate::countries::CountryLookup;
use crate::lexicon::{NationalityLexicon, SUFFIX_RULES};

/// Normalize a nationality token to a country name. Never fails.
///
/// Stages: lexicon hit, suffix rewrite + fuzzy search, fuzzy search of the
/// token itself, and finally the token title-cased.
pub fn resolve_country(lexicon: &NationalityLexicon, countries: &dyn CountryLookup, token: &str) -> String {
    let key = token.trim().to_lowercase();

    if let Some(country) = lexicon.get(&key) {
        return country.to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = key.strip_suffix(suffix) {
            let candidate = format!("{}{}", stem, replacement);
            if let Some(country) = countries.best_match(&candidate) {
                debug!("Resolved {:?} via suffix -{} as {:?}", token, suffix, country);
                return country;
            }
        }
    }

    if let Some(country) = countries.best_match(&key) {
        return country;
    }

    debug!("No country for {:?}, keeping the token", token);
    title_case(&key)
}

/// Upper-case the first letter of each word and lower-case the rest. A
/// letter following any non-letter starts a new word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}
