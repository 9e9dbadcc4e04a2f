//! Legal name set tests: case folding and multi-faced card names.

mod common;

use heritage_check::{CardRecord, LegalNames};

#[test]
fn multi_faced_card_yields_full_and_front_names() {
    let names = LegalNames::from_records(&[CardRecord::named("Fire // Ice")]);

    let mut all: Vec<&str> = names.iter().collect();
    all.sort();
    assert_eq!(all, vec!["fire", "fire // ice"]);
}

#[test]
fn single_faced_card_yields_one_name() {
    let names = LegalNames::from_records(&[CardRecord::named("Llanowar Elves")]);

    assert_eq!(names.len(), 1);
    assert!(names.contains("llanowar elves"));
}

#[test]
fn lookup_ignores_case() {
    let names = LegalNames::from_records(&common::cards(&["Sol Ring", "Fire // Ice"]));

    assert!(names.contains("Sol Ring"));
    assert!(names.contains("SOL RING"));
    assert!(names.contains("FIRE"));
    assert!(names.contains("Fire // Ice"));
    assert!(!names.contains("Ice"));
}

#[test]
fn only_case_is_folded() {
    let names = LegalNames::from_records(&[CardRecord::named("Lim-Dûl's Vault")]);

    assert!(names.contains("lim-dûl's vault"));
    assert!(!names.contains("Lim-Dul's Vault"));
    assert!(!names.contains("Lim-Dûls Vault"));
}

#[test]
fn duplicate_printings_collapse() {
    let names = LegalNames::from_records(&common::cards(&["Sol Ring", "Sol Ring", "sol ring"]));

    assert_eq!(names.len(), 1);
}

#[test]
fn front_face_name_is_trimmed() {
    let card = CardRecord::named("Wear // Tear");

    assert_eq!(card.front_face_name(), "Wear");
    assert_eq!(CardRecord::named("Sol Ring").front_face_name(), "Sol Ring");
}

#[test]
fn collected_names_are_lowercased() {
    let names: LegalNames = ["Sol Ring", "Llanowar Elves"].into_iter().collect();

    assert_eq!(names.len(), 2);
    assert!(names.contains("sol ring"));
}

#[test]
fn empty_records_give_empty_set() {
    let names = LegalNames::from_records(&Vec::<CardRecord>::new());

    assert!(names.is_empty());
}
