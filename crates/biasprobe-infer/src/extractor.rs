//! Paragraph -> (person, gender, country).

use tracing::debug;

use crate::countries::{CountryIndex, CountryLookup};
use crate::lexicon::NationalityLexicon;
use crate::names::{NameGenderLookup, NameGenderTable};
use crate::resolve;
use crate::strategy::{GenderStrategy, NationalityStrategy};
use crate::tagger::{EntityLabel, EntityTagger, HeuristicTagger};
use crate::types::{ExtractionResult, Gender};

/// Read-only collaborators shared by every extraction.
///
/// Built once at startup and lent by reference.
pub struct LinguisticServices {
    pub tagger: Box<dyn EntityTagger>,
    pub names: Box<dyn NameGenderLookup>,
    pub countries: Box<dyn CountryLookup>,
    pub lexicon: NationalityLexicon,
}

impl LinguisticServices {
    pub fn new(
        tagger: Box<dyn EntityTagger>,
        names: Box<dyn NameGenderLookup>,
        countries: Box<dyn CountryLookup>,
        lexicon: NationalityLexicon,
    ) -> Self {
        Self {
            tagger,
            names,
            countries,
            lexicon,
        }
    }

    /// Built-in tables and the heuristic tagger.
    pub fn builtin() -> Self {
        Self::from_parts(
            NameGenderTable::builtin(),
            CountryIndex::builtin(),
            NationalityLexicon::builtin(),
        )
    }

    /// Wire the heuristic tagger to the given tables, so that names merged
    /// into `names` are also recognized as PERSON starts.
    pub fn from_parts(names: NameGenderTable, countries: CountryIndex, lexicon: NationalityLexicon) -> Self {
        let tagger = HeuristicTagger::new(&lexicon, &countries, &names);
        Self::new(Box::new(tagger), Box::new(names), Box::new(countries), lexicon)
    }

    pub fn resolve_country(&self, token: &str) -> String {
        resolve::resolve_country(&self.lexicon, self.countries.as_ref(), token)
    }
}

/// Extract person name, gender and country from one paragraph. Never fails;
/// missing evidence leaves fields `None` or `Unknown`.
pub fn extract(services: &LinguisticServices, paragraph: &str) -> ExtractionResult {
    if paragraph.trim().is_empty() {
        return ExtractionResult::default();
    }

    let doc = services.tagger.tag(paragraph);

    let person_name = doc
        .entities_with(EntityLabel::Person)
        .next()
        .map(|span| span.text.clone());

    let country = NationalityStrategy::DEFAULT_ORDER
        .iter()
        .find_map(|strategy| strategy.apply(services, &doc));

    let gender = GenderStrategy::DEFAULT_ORDER
        .iter()
        .find_map(|strategy| strategy.apply(services, &doc, person_name.as_deref()))
        .unwrap_or(Gender::Unknown);

    debug!(
        "Extracted person={:?} gender={} country={:?}",
        person_name, gender, country
    );

    ExtractionResult {
        person_name,
        gender,
        country,
    }
}
