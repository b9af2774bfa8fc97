//! Biasprobe Infer: person, gender and nationality extraction from free text.
//!
//! `extract` runs a tagged paragraph through ordered strategy lists. All
//! collaborators sit behind traits (`EntityTagger`, `NameGenderLookup`,
//! `CountryLookup`) and are bundled in a `LinguisticServices` built once
//! and passed by reference. `HeuristicTagger`, `NameGenderTable` and
//! `CountryIndex` are the built-in implementations.

pub mod countries;
pub mod extractor;
pub mod lexicon;
pub mod names;
pub mod postprocess;
pub mod resolve;
pub mod strategy;
pub mod tagger;
pub mod types;

pub use countries::{Continent, CountryIndex, CountryLookup, CountryRecord};
pub use extractor::{extract, LinguisticServices};
pub use lexicon::NationalityLexicon;
pub use names::{NameGenderLookup, NameGenderTable};
pub use postprocess::{Labels, PostProcessChain, PostProcessor};
pub use resolve::resolve_country;
pub use strategy::{GenderStrategy, NationalityStrategy};
pub use tagger::{EntityLabel, EntitySpan, EntityTagger, HeuristicTagger, Pos, TaggedDoc, Token};
pub use types::{ExtractionResult, Gender};
