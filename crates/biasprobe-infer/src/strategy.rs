//! Ordered inference strategies.
//!
//! Each strategy inspects a tagged document and either produces a label or
//! passes. The extractor walks `DEFAULT_ORDER` and keeps the first answer.

use serde::Serialize;
use tracing::trace;

use crate::extractor::LinguisticServices;
use crate::lexicon::is_nationality_keyword;
use crate::tagger::{EntityLabel, Pos, TaggedDoc};
use crate::types::Gender;

/// Lower-case GPE texts that always mean the United States.
const US_SPANS: &[&str] = &["usa", "u.s.a.", "america", "united states"];

const UNITED_STATES: &str = "United States";

const MALE_PRONOUNS: &[&str] = &["he", "him", "his"];
const FEMALE_PRONOUNS: &[&str] = &["she", "her", "hers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NationalityStrategy {
    /// Any NORP span.
    NorpEntity,
    /// An adjective token inside a NORP entity.
    NorpAdjective,
    /// Closed keyword list, matched on lower-cased token text.
    Keyword,
    /// Place names, fuzzy-matched to a country.
    GeoPoliticalEntity,
}

impl NationalityStrategy {
    pub const DEFAULT_ORDER: &'static [NationalityStrategy] = &[
        Self::NorpEntity,
        Self::NorpAdjective,
        Self::Keyword,
        Self::GeoPoliticalEntity,
    ];

    pub fn apply(&self, services: &LinguisticServices, doc: &TaggedDoc) -> Option<String> {
        match self {
            Self::NorpEntity => doc
                .entities_with(EntityLabel::Norp)
                .next()
                .map(|span| services.resolve_country(&span.text)),
            Self::NorpAdjective => doc
                .tokens
                .iter()
                .find(|t| t.pos == Pos::Adj && t.ent_type == Some(EntityLabel::Norp))
                .map(|t| services.resolve_country(&t.text)),
            Self::Keyword => doc
                .tokens
                .iter()
                .find(|t| is_nationality_keyword(&t.text.to_lowercase()))
                .map(|t| services.resolve_country(&t.text)),
            Self::GeoPoliticalEntity => doc.entities_with(EntityLabel::Gpe).find_map(|span| {
                let lower = span.text.to_lowercase();
                if US_SPANS.contains(&lower.as_str()) {
                    return Some(UNITED_STATES.to_string());
                }
                let matched = services.countries.best_match(&span.text);
                if matched.is_none() {
                    trace!("No country matches GPE {:?}", span.text);
                }
                matched
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GenderStrategy {
    /// Majority of gendered third-person pronouns.
    Pronouns,
    /// First word of the candidate name, via the name lookup.
    FirstName,
}

impl GenderStrategy {
    pub const DEFAULT_ORDER: &'static [GenderStrategy] = &[Self::Pronouns, Self::FirstName];

    /// `None` means the strategy had no decisive evidence.
    pub fn apply(
        &self,
        services: &LinguisticServices,
        doc: &TaggedDoc,
        person_name: Option<&str>,
    ) -> Option<Gender> {
        match self {
            Self::Pronouns => {
                let (male, female) = count_pronouns(doc);
                match male.cmp(&female) {
                    std::cmp::Ordering::Greater => Some(Gender::Male),
                    std::cmp::Ordering::Less => Some(Gender::Female),
                    std::cmp::Ordering::Equal => None,
                }
            }
            Self::FirstName => {
                let first = person_name?.split_whitespace().next()?;
                Some(services.names.lookup(first))
            }
        }
    }
}

/// `(male, female)` pronoun counts over whole tokens, case-insensitive.
pub fn count_pronouns(doc: &TaggedDoc) -> (usize, usize) {
    doc.tokens.iter().fold((0, 0), |(male, female), token| {
        let lower = token.text.to_lowercase();
        if MALE_PRONOUNS.contains(&lower.as_str()) {
            (male + 1, female)
        } else if FEMALE_PRONOUNS.contains(&lower.as_str()) {
            (male, female + 1)
        } else {
            (male, female)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{EntitySpan, Token};

    fn token(text: &str, pos: Pos, ent_type: Option<EntityLabel>) -> Token {
        Token {
            text: text.to_string(),
            start: 0,
            pos,
            ent_type,
        }
    }

    fn span(text: &str, label: EntityLabel) -> EntitySpan {
        EntitySpan {
            text: text.to_string(),
            label,
            start: 0,
            end: text.len(),
        }
    }

    #[test]
    fn test_norp_entity() {
        let services = LinguisticServices::builtin();
        let doc = TaggedDoc {
            tokens: vec![],
            entities: vec![span("Greek", EntityLabel::Norp)],
        };
        assert_eq!(
            NationalityStrategy::NorpEntity.apply(&services, &doc).as_deref(),
            Some("Greece")
        );
        assert_eq!(NationalityStrategy::NorpAdjective.apply(&services, &doc), None);
    }

    #[test]
    fn test_norp_adjective_without_span() {
        let services = LinguisticServices::builtin();
        let doc = TaggedDoc {
            tokens: vec![
                token("a", Pos::Det, None),
                token("Kenyan", Pos::Adj, Some(EntityLabel::Norp)),
                token("runner", Pos::Noun, None),
            ],
            entities: vec![],
        };
        assert_eq!(NationalityStrategy::NorpEntity.apply(&services, &doc), None);
        assert_eq!(
            NationalityStrategy::NorpAdjective.apply(&services, &doc).as_deref(),
            Some("Kenya")
        );
    }

    #[test]
    fn test_keyword() {
        let services = LinguisticServices::builtin();
        let doc = services.tagger.tag("a thai girl who loves algebra");
        assert_eq!(
            NationalityStrategy::Keyword.apply(&services, &doc).as_deref(),
            Some("Thailand")
        );
    }

    #[test]
    fn test_gpe_us_aliases_and_fallthrough() {
        let services = LinguisticServices::builtin();
        let doc = TaggedDoc {
            tokens: vec![],
            entities: vec![span("America", EntityLabel::Gpe)],
        };
        assert_eq!(
            NationalityStrategy::GeoPoliticalEntity.apply(&services, &doc).as_deref(),
            Some("United States")
        );

        let doc = TaggedDoc {
            tokens: vec![],
            entities: vec![span("Atlantis", EntityLabel::Gpe), span("Oslo", EntityLabel::Gpe)],
        };
        assert_eq!(
            NationalityStrategy::GeoPoliticalEntity.apply(&services, &doc).as_deref(),
            Some("Norway")
        );
    }

    #[test]
    fn test_pronoun_majority() {
        let services = LinguisticServices::builtin();
        let doc = services.tagger.tag("She said he would help her with HER homework.");
        assert_eq!(count_pronouns(&doc), (1, 3));
        assert_eq!(
            GenderStrategy::Pronouns.apply(&services, &doc, None),
            Some(Gender::Female)
        );
    }

    #[test]
    fn test_pronoun_tie_is_ambiguous() {
        let services = LinguisticServices::builtin();
        let doc = services.tagger.tag("He met her.");
        assert_eq!(GenderStrategy::Pronouns.apply(&services, &doc, None), None);
        let doc = services.tagger.tag("Nobody said anything.");
        assert_eq!(GenderStrategy::Pronouns.apply(&services, &doc, None), None);
    }

    #[test]
    fn test_pronouns_match_whole_tokens() {
        let services = LinguisticServices::builtin();
        let doc = services.tagger.tag("The theme of this shelf is heroes.");
        assert_eq!(count_pronouns(&doc), (0, 0));
    }

    #[test]
    fn test_first_name() {
        let services = LinguisticServices::builtin();
        let doc = TaggedDoc::default();
        assert_eq!(
            GenderStrategy::FirstName.apply(&services, &doc, Some("Alexis Moreau")),
            Some(Gender::MostlyFemale)
        );
        assert_eq!(
            GenderStrategy::FirstName.apply(&services, &doc, Some("Zorblax Quill")),
            Some(Gender::Unknown)
        );
        assert_eq!(GenderStrategy::FirstName.apply(&services, &doc, None), None);
    }
}
