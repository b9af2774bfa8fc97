//! First-name gender lookup.
//!
//! `NameGenderTable` ships a built-in table of common first names across
//! the regions generated descriptions tend to draw from, and can merge
//! extra entries from a tab-separated `name<TAB>category` file.

use std::collections::HashMap;
use std::path::Path;

use biasprobe_core::{Error, Result};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::types::Gender;

/// Statistical first-name -> gender classifier.
pub trait NameGenderLookup: Send + Sync {
    /// Category for a first name; `Unknown` when the name is not known.
    fn lookup(&self, first_name: &str) -> Gender;
}

static BUILTIN_NAMES: Lazy<HashMap<&'static str, Gender>> = Lazy::new(|| {
    let mut m = HashMap::new();
    // Male
    for name in &[
        "james", "john", "robert", "michael", "william", "david", "richard", "joseph",
        "thomas", "charles", "daniel", "matthew", "anthony", "mark", "paul", "steven",
        "andrew", "joshua", "kevin", "brian", "george", "edward", "ethan", "noah", "liam",
        "lucas", "oliver", "henry", "jacob", "benjamin", "samuel", "leo", "max", "jack",
        "harry", "oscar", "arthur", "elijah", "isaac", "aiden", "ryan", "tyler", "dylan",
        "nathan", "adam", "jean", "pierre", "louis", "antoine", "hugo", "jules", "carlos",
        "juan", "jose", "luis", "miguel", "diego", "javier", "mateo", "alejandro", "pablo",
        "marco", "giovanni", "luca", "matteo", "alessandro", "hans", "lukas", "felix",
        "jonas", "karl", "ivan", "dmitri", "alexei", "sergei", "nikolai", "mikhail",
        "ahmed", "mohammed", "muhammad", "omar", "ali", "hassan", "hussein", "yusuf",
        "karim", "tariq", "amir", "arjun", "aarav", "rohan", "rahul", "ravi", "vikram",
        "aditya", "ishaan", "vivek", "kenji", "hiroshi", "takeshi", "haruto", "sota",
        "jian", "hao", "min-jun", "ji-ho", "seo-jun", "kofi", "kwame", "chidi", "emeka",
        "tunde", "jabari", "thabo", "sipho", "joao", "mateus", "rafael", "gabriel",
        "sebastian", "nicolas", "felipe", "andres", "tomas", "olaf", "lars", "erik",
        "sven", "anders", "nils", "bjorn", "jakub", "piotr", "tomasz", "kemal", "mehmet",
        "emre", "yosef", "tane", "mikael",
    ] {
        m.insert(*name, Gender::Male);
    }
    // Female
    for name in &[
        "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica",
        "sarah", "karen", "emily", "emma", "olivia", "ava", "sophia", "sofia", "isabella",
        "mia", "charlotte", "amelia", "harper", "chloe", "grace", "lily", "hannah", "anna",
        "maria", "marie", "sophie", "camille", "lea", "manon", "julia", "laura", "elena",
        "lucia", "carmen", "valentina", "isabel", "ana", "giulia", "francesca", "chiara",
        "greta", "heidi", "ingrid", "astrid", "freya", "olga", "natasha", "anastasia",
        "svetlana", "tatiana", "ekaterina", "fatima", "aisha", "layla", "leila", "zainab",
        "yasmin", "noor", "mariam", "amira", "priya", "ananya", "aanya", "diya", "kavya",
        "saanvi", "anika", "meera", "lakshmi", "yuki", "sakura", "hana", "aiko", "yui",
        "mei", "ling", "xiu", "seo-yeon", "min-ji", "amara", "chioma", "ngozi", "adaeze",
        "zuri", "nia", "imani", "ayesha", "maya", "zara", "nadia", "eva", "ella", "alice",
        "clara", "rosa", "lucy", "zoe", "aurora", "isla", "nora", "ines", "beatriz",
        "gabriela", "camila", "daniela", "fernanda", "mariana", "paula", "hina", "kiara",
        "leilani", "malia", "aroha", "ayla", "elif", "zeynep", "defne", "rachel", "leah",
        "rebecca", "abigail", "natalie", "victoria", "sara", "lina", "georgia",
    ] {
        m.insert(*name, Gender::Female);
    }
    for name in &["jordan", "angel", "luka"] {
        m.insert(*name, Gender::MostlyMale);
    }
    for name in &["alexis", "andrea", "jamie", "mackenzie", "shannon"] {
        m.insert(*name, Gender::MostlyFemale);
    }
    // Unisex
    for name in &[
        "alex", "sam", "taylor", "morgan", "casey", "riley", "avery", "quinn", "kai",
        "sasha", "jun", "chen", "wei", "li", "robin", "charlie", "rowan", "skyler", "ariel",
        "noa", "ren", "yu",
    ] {
        m.insert(*name, Gender::Andy);
    }
    m
});

/// Table-backed first-name classifier.
#[derive(Debug, Clone)]
pub struct NameGenderTable {
    names: HashMap<String, Gender>,
}

impl NameGenderTable {
    /// Table seeded with the built-in names.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .iter()
                .map(|(name, gender)| (name.to_string(), *gender))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, gender: Gender) {
        self.names.insert(normalize_name(name), gender);
    }

    /// Merge `name<TAB>category` lines. Blank lines and `#` comments are skipped.
    /// Returns the number of entries merged.
    pub fn merge_tsv(&mut self, content: &str) -> Result<usize> {
        let mut merged = 0;
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, category) = line.split_once('\t').ok_or_else(|| {
                Error::Config(format!("name table line {}: expected name<TAB>category", lineno + 1))
            })?;
            let gender: Gender = category
                .parse()
                .map_err(|e| Error::Config(format!("name table line {}: {}", lineno + 1, e)))?;
            self.insert(name, gender);
            merged += 1;
        }
        Ok(merged)
    }

    /// Merge entries from a file on disk.
    pub fn load_tsv(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let merged = self.merge_tsv(&content)?;
        debug!("Merged {} names from {}", merged, path.display());
        Ok(merged)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&normalize_name(name))
    }

    /// All known names, lower-cased.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NameGenderTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NameGenderLookup for NameGenderTable {
    fn lookup(&self, first_name: &str) -> Gender {
        self.names
            .get(&normalize_name(first_name))
            .copied()
            .unwrap_or(Gender::Unknown)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
