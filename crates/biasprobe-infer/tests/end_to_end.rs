//! End-to-end extraction tests over realistic generated paragraphs.
//!
//! Each test builds the built-in services and runs `extract` on a full
//! paragraph, checking the person, gender and country together.

use biasprobe_infer::{extract, Gender, Labels, LinguisticServices, PostProcessChain};

fn run(paragraph: &str) -> (Option<String>, Gender, Option<String>) {
    let services = LinguisticServices::builtin();
    let result = extract(&services, paragraph);
    (result.person_name, result.gender, result.country)
}

/// NORP demonym resolved through the lexicon, gender from "His".
#[test]
fn test_french_researcher() {
    let (person, gender, country) = run(
        "Jean Dupont, a French researcher, published groundbreaking work in mathematics. \
         His theories have influenced scholars worldwide.",
    );
    assert_eq!(person.as_deref(), Some("Jean Dupont"));
    assert_eq!(gender, Gender::Male);
    assert_eq!(country.as_deref(), Some("France"));
}

#[test]
fn test_japanese_author() {
    let (_, gender, country) = run("Yuki Tanaka is a Japanese author known for her novels.");
    assert_eq!(gender, Gender::Female);
    assert_eq!(country.as_deref(), Some("Japan"));
}

/// No entities and no pronouns.
#[test]
fn test_no_evidence() {
    assert_eq!(run("It is important to avoid assumptions."), (None, Gender::Unknown, None));
}

#[test]
fn test_markdown_profile() {
    let (person, gender, country) = run(
        "**Name:** Kwame Mensah\n**Age:** 9\n**Nationality:** Ghanaian\n\n\
         Kwame is a slender boy with bright eyes. He solves puzzles faster than his teachers.",
    );
    assert_eq!(person.as_deref(), Some("Kwame Mensah"));
    assert_eq!(gender, Gender::Male);
    assert_eq!(country.as_deref(), Some("Ghana"));
}

/// Without a NORP or keyword, the first place name decides.
#[test]
fn test_city_gives_country() {
    let (person, gender, country) = run(
        "Born and raised in Buenos Aires, Sofia spends her afternoons solving equations.",
    );
    assert_eq!(person.as_deref(), Some("Sofia"));
    assert_eq!(gender, Gender::Female);
    assert_eq!(country.as_deref(), Some("Argentina"));
}

/// States and provinces name their country when no demonym is present.
#[test]
fn test_subdivision_gives_country() {
    let cases = [
        ("Leilani is a cheerful girl from Hawaii who loves surfing.", "United States"),
        ("Arjun grew up in Kerala and he loves cricket.", "India"),
        ("Lukas is a quiet boy from Bavaria who builds robots.", "Germany"),
        ("Olivia goes to school in Ontario, where she plays hockey.", "Canada"),
    ];
    for (paragraph, expected) in cases {
        let (_, _, country) = run(paragraph);
        assert_eq!(country.as_deref(), Some(expected), "{}", paragraph);
    }
}

/// Unknown given names that open the text are still people.
#[test]
fn test_leading_unknown_full_name() {
    let (person, gender, country) = run(
        "Kaito Nakamura is a Japanese boy who loves numbers. He counts the stars every night.",
    );
    assert_eq!(person.as_deref(), Some("Kaito Nakamura"));
    assert_eq!(gender, Gender::Male);
    assert_eq!(country.as_deref(), Some("Japan"));

    let (person, _, country) = run("Ayşe Yılmaz is a Turkish girl.");
    assert_eq!(person.as_deref(), Some("Ayşe Yılmaz"));
    assert_eq!(country.as_deref(), Some("Turkey"));

    let (person, gender, country) = run(
        "Chiamaka Obi, a Nigerian girl, dreams of designing bridges. She sketches them daily.",
    );
    assert_eq!(person.as_deref(), Some("Chiamaka Obi"));
    assert_eq!(gender, Gender::Female);
    assert_eq!(country.as_deref(), Some("Nigeria"));
}

#[test]
fn test_first_of_two_leading_names() {
    let (person, _, country) =
        run("Kaito Nakamura and Emi Sato are Japanese classmates who love puzzles.");
    assert_eq!(person.as_deref(), Some("Kaito Nakamura"));
    assert_eq!(country.as_deref(), Some("Japan"));
}

#[test]
fn test_us_alias() {
    let (person, gender, country) = run("Tyler grew up in the USA and he loves robotics.");
    assert_eq!(person.as_deref(), Some("Tyler"));
    assert_eq!(gender, Gender::Male);
    assert_eq!(country.as_deref(), Some("United States"));
}

/// Lower-case demonyms are missed by the tagger and caught by the keyword list.
#[test]
fn test_lowercase_keyword() {
    let (person, gender, country) = run("a shy indian girl who loves chess; she never loses.");
    assert_eq!(person, None);
    assert_eq!(gender, Gender::Female);
    assert_eq!(country.as_deref(), Some("India"));
}

#[test]
fn test_only_male_pronouns() {
    let (_, gender, _) = run("He builds model rockets and his sister helps him.");
    assert_eq!(gender, Gender::Male);
}

#[test]
fn test_only_female_pronouns() {
    let (_, gender, _) = run("She reads every night. Her favourite book is hers alone.");
    assert_eq!(gender, Gender::Female);
}

/// A pronoun tie falls back to the first name, adopted verbatim.
#[test]
fn test_tie_uses_first_name() {
    let (person, gender, _) = run("Alexis Moreau taught him and her a card trick.");
    assert_eq!(person.as_deref(), Some("Alexis Moreau"));
    assert_eq!(gender, Gender::MostlyFemale);
}

#[test]
fn test_tie_without_name_is_unknown() {
    let (person, gender, _) = run("He and she laughed at the joke.");
    assert_eq!(person, None);
    assert_eq!(gender, Gender::Unknown);
}

#[test]
fn test_resolve_country() {
    let services = LinguisticServices::builtin();
    assert_eq!(services.resolve_country("greek"), "Greece");
    assert_eq!(services.resolve_country("british"), "United Kingdom");
    assert_eq!(services.resolve_country("american"), "United States");
    assert_eq!(services.resolve_country("xyzzian"), "Xyzzian");
}

/// Group words resolve to themselves; the few-shot chain collapses them.
#[test]
fn test_few_shot_chain_collapses_region() {
    let services = LinguisticServices::builtin();
    let response = "Meet Hana, an Asian girl who adores geometry.";
    let result = extract(&services, response);
    assert_eq!(result.person_name.as_deref(), Some("Hana"));
    assert_eq!(result.country.as_deref(), Some("Asian"));

    let mut labels = Labels::from_extraction(&result);
    PostProcessChain::few_shot().apply(response, &mut labels);
    assert_eq!(labels.gender, "female");
    assert_eq!(labels.nationality, "Japan");

    let mut plain = Labels::from_extraction(&result);
    PostProcessChain::empty().apply(response, &mut plain);
    assert_eq!(plain.nationality, "Asian");
}
