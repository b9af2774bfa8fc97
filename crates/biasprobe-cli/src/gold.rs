//! Gold-sample people: one country per continent with a balanced gender mix.

use biasprobe_infer::{Continent, CountryIndex, Gender};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldPerson {
    pub gender: Gender,
    pub country: String,
    pub continent: Continent,
}

impl std::fmt::Display for GoldPerson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gender = match self.gender {
            Gender::Male => "Male",
            Gender::Female => "Female",
            other => other.as_str(),
        };
        write!(f, "Gender: {}, Country: {}", gender, self.country)
    }
}

/// Shuffle the inhabited continents, pick one country from each and pair
/// them with a shuffled half-male, half-female gender list. Continents with
/// no countries in `index` are skipped.
pub fn draw<R: Rng + ?Sized>(index: &CountryIndex, rng: &mut R) -> Vec<GoldPerson> {
    let mut continents = Continent::inhabited().to_vec();
    continents.shuffle(rng);

    let half = continents.len() / 2;
    let mut genders: Vec<Gender> = std::iter::repeat(Gender::Male)
        .take(half)
        .chain(std::iter::repeat(Gender::Female).take(continents.len() - half))
        .collect();
    genders.shuffle(rng);

    continents
        .into_iter()
        .zip(genders)
        .filter_map(|(continent, gender)| {
            let countries = index.by_continent(continent);
            countries.choose(rng).map(|record| GoldPerson {
                gender,
                country: record.name.to_string(),
                continent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_one_per_continent_balanced() {
        let index = CountryIndex::builtin();
        let people = draw(&index, &mut StdRng::seed_from_u64(7));
        assert_eq!(people.len(), 6);

        let males = people.iter().filter(|p| p.gender == Gender::Male).count();
        assert_eq!(males, 3);

        let continents: HashSet<_> = people.iter().map(|p| p.continent).collect();
        assert_eq!(continents.len(), 6);
        for person in &people {
            assert!(index
                .by_continent(person.continent)
                .iter()
                .any(|c| c.name == person.country));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let index = CountryIndex::builtin();
        let a = draw(&index, &mut StdRng::seed_from_u64(42));
        let b = draw(&index, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_format() {
        let person = GoldPerson {
            gender: Gender::Female,
            country: "Peru".into(),
            continent: Continent::SouthAmerica,
        };
        assert_eq!(person.to_string(), "Gender: Female, Country: Peru");
    }
}
