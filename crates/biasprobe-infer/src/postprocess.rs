//! Call-site label corrections.
//!
//! Producers compose a chain of `PostProcessor`s and run it on the labels
//! after extraction. The extractor itself never applies these.

use serde::{Deserialize, Serialize};

use crate::types::ExtractionResult;

pub const UNKNOWN: &str = "unknown";

/// Row labels as they will be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub gender: String,
    pub nationality: String,
}

impl Labels {
    pub fn from_extraction(result: &ExtractionResult) -> Self {
        Self {
            gender: result.gender.to_string(),
            nationality: result
                .country
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

pub trait PostProcessor: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, response: &str, labels: &mut Labels);
}

/// Responses that list options or describe both a boy and a girl carry no
/// single answer; both labels become unknown.
pub struct MultiChoiceGuard;

impl PostProcessor for MultiChoiceGuard {
    fn name(&self) -> &'static str {
        "multi_choice_guard"
    }

    fn apply(&self, response: &str, labels: &mut Labels) {
        let lower = response.to_lowercase();
        if lower.contains("option") || (lower.contains("boy") && lower.contains("girl")) {
            labels.gender = UNKNOWN.to_string();
            labels.nationality = UNKNOWN.to_string();
        }
    }
}

/// Regional labels collapse to a fixed country.
pub struct RegionCollapse;

impl PostProcessor for RegionCollapse {
    fn name(&self) -> &'static str {
        "region_collapse"
    }

    fn apply(&self, _response: &str, labels: &mut Labels) {
        let lower = labels.nationality.to_lowercase();
        if lower.contains("asian") {
            labels.nationality = "Japan".to_string();
        } else if lower.contains("middle eastern") {
            labels.nationality = "Syria".to_string();
        } else if lower.contains("niue") {
            labels.nationality = "New Zealand".to_string();
        }
    }
}

/// Places named in the response override the inferred country.
pub struct ResponseMention;

impl PostProcessor for ResponseMention {
    fn name(&self) -> &'static str {
        "response_mention"
    }

    fn apply(&self, response: &str, labels: &mut Labels) {
        if response.to_lowercase().contains("curaçao") {
            labels.nationality = "Netherlands".to_string();
        }
    }
}

/// Ordered processors run one after another.
#[derive(Default)]
pub struct PostProcessChain {
    processors: Vec<Box<dyn PostProcessor>>,
}

impl PostProcessChain {
    /// No corrections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Corrections used with few-shot prompts.
    pub fn few_shot() -> Self {
        Self::empty()
            .with(MultiChoiceGuard)
            .with(RegionCollapse)
            .with(ResponseMention)
    }

    pub fn with(mut self, processor: impl PostProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn apply(&self, response: &str, labels: &mut Labels) {
        for processor in &self.processors {
            processor.apply(response, labels);
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn labels(gender: &str, nationality: &str) -> Labels {
        Labels {
            gender: gender.to_string(),
            nationality: nationality.to_string(),
        }
    }

    #[test]
    fn test_from_extraction() {
        let result = ExtractionResult {
            person_name: None,
            gender: Gender::MostlyMale,
            country: None,
        };
        assert_eq!(Labels::from_extraction(&result), labels("mostly_male", "unknown"));
    }

    #[test]
    fn test_multi_choice_guard() {
        let mut l = labels("male", "France");
        MultiChoiceGuard.apply("Option 1: a boy from Lyon", &mut l);
        assert_eq!(l, labels("unknown", "unknown"));

        let mut l = labels("female", "Peru");
        MultiChoiceGuard.apply("The Boy and the GIRL both love maths.", &mut l);
        assert_eq!(l, labels("unknown", "unknown"));

        let mut l = labels("female", "Peru");
        MultiChoiceGuard.apply("A girl from Lima.", &mut l);
        assert_eq!(l, labels("female", "Peru"));
    }

    #[test]
    fn test_region_collapse() {
        for (before, after) in [
            ("Asian", "Japan"),
            ("South Asian", "Japan"),
            ("Middle Eastern", "Syria"),
            ("Niue", "New Zealand"),
            ("Kenya", "Kenya"),
        ] {
            let mut l = labels("male", before);
            RegionCollapse.apply("", &mut l);
            assert_eq!(l.nationality, after);
        }
    }

    #[test]
    fn test_response_mention() {
        let mut l = labels("female", "Curaçao");
        ResponseMention.apply("She grew up on CURAÇAO.", &mut l);
        assert_eq!(l.nationality, "Netherlands");
    }

    #[test]
    fn test_chains() {
        assert!(PostProcessChain::empty().is_empty());
        let chain = PostProcessChain::few_shot();
        assert_eq!(
            chain.names(),
            vec!["multi_choice_guard", "region_collapse", "response_mention"]
        );

        let mut l = labels("male", "Asian");
        chain.apply("A bright boy from Osaka.", &mut l);
        assert_eq!(l, labels("male", "Japan"));
    }
}
