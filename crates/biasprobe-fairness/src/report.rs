//! Fairness report over a whole table.

use biasprobe_store::{Column, DatasetRow};
use serde::Serialize;
use tracing::debug;

use crate::metrics::{demographic_parity, disparate_impact, unique_values};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupParity {
    pub group: String,
    pub parity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairImpact {
    pub nationality_a: String,
    pub nationality_b: String,
    /// `None` when the second nationality's rate is zero.
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderImpact {
    pub gender: String,
    pub pairs: Vec<PairImpact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessReport {
    pub total_rows: usize,
    pub gender_parity: Vec<GroupParity>,
    pub nationality_parity: Vec<GroupParity>,
    /// One entry per gender, each with every unordered nationality pair.
    pub disparate_impact: Vec<GenderImpact>,
}

impl FairnessReport {
    pub fn from_rows(rows: &[DatasetRow]) -> Self {
        let genders = unique_values(rows, Column::InferredGender);
        let nationalities = unique_values(rows, Column::InferredNationality);
        debug!(
            "Building report over {} rows, {} genders, {} nationalities",
            rows.len(),
            genders.len(),
            nationalities.len()
        );

        let parity = |values: &[String], column: Column| -> Vec<GroupParity> {
            values
                .iter()
                .map(|v| GroupParity {
                    group: v.clone(),
                    parity: demographic_parity(rows, v, column),
                })
                .collect()
        };

        let disparate_impact = genders
            .iter()
            .map(|gender| {
                let mut pairs = Vec::new();
                for (i, a) in nationalities.iter().enumerate() {
                    for b in &nationalities[i + 1..] {
                        pairs.push(PairImpact {
                            nationality_a: a.clone(),
                            nationality_b: b.clone(),
                            ratio: disparate_impact(rows, a, b, gender),
                        });
                    }
                }
                GenderImpact {
                    gender: gender.clone(),
                    pairs,
                }
            })
            .collect();

        Self {
            total_rows: rows.len(),
            gender_parity: parity(&genders, Column::InferredGender),
            nationality_parity: parity(&nationalities, Column::InferredNationality),
            disparate_impact,
        }
    }
}

impl std::fmt::Display for FairnessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "*".repeat(RULE_WIDTH);

        writeln!(f, "Demographic Parity by Gender:")?;
        for p in &self.gender_parity {
            writeln!(f, "  - {}: {:.2}", p.group, p.parity)?;
        }
        writeln!(f, "{}", rule)?;

        writeln!(f, "\nDemographic Parity by Nationality:")?;
        for p in &self.nationality_parity {
            writeln!(f, "  - {}: {:.2}", p.group, p.parity)?;
        }
        writeln!(f, "{}", rule)?;

        writeln!(f, "\nDisparate Impact:")?;
        for impact in &self.disparate_impact {
            writeln!(f, "  For gender: {}", impact.gender)?;
            for pair in &impact.pairs {
                match pair.ratio {
                    Some(ratio) => writeln!(
                        f,
                        "    - {} vs {}: {:.2}",
                        pair.nationality_a, pair.nationality_b, ratio
                    )?,
                    None => writeln!(
                        f,
                        "    - {} vs {}: Calculation not possible (division by zero)",
                        pair.nationality_a, pair.nationality_b
                    )?,
                }
            }
        }
        Ok(())
    }
}
