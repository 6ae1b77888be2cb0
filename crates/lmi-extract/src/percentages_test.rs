use super::*;

// -----------------------------------------------------------------------
// education_levels
// -----------------------------------------------------------------------

#[test]
fn education_includes_matched_level() {
    let levels = education_levels("Opleidingsniveau: MBO 35% HBO 20%").unwrap();
    assert_eq!(levels.get("MBO"), Some(35));
    assert_eq!(levels.get("HBO"), Some(20));
    assert_eq!(levels.get("WO"), None);
}

#[test]
fn education_follows_vocabulary_order() {
    let levels = education_levels("WO 5% HBO 25% MBO 40%").unwrap();
    let keys: Vec<&str> = levels.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["MBO", "HBO", "WO"]);
}

#[test]
fn education_is_case_sensitive() {
    assert!(education_levels("mbo 35%").unwrap().is_empty());
}

#[test]
fn education_out_of_range_passes_through() {
    let levels = education_levels("MBO 140%").unwrap();
    assert_eq!(levels.get("MBO"), Some(140));
}

// -----------------------------------------------------------------------
// experience_split / employment_type
// -----------------------------------------------------------------------

#[test]
fn experience_keys_are_lowercased() {
    let split = experience_split("Junior 41% MEDIOR 38% senior 21%").unwrap();
    let entries: Vec<_> = split.iter().collect();
    assert_eq!(entries, vec![("junior", 41), ("medior", 38), ("senior", 21)]);
}

#[test]
fn experience_later_match_overwrites() {
    let split = experience_split("junior 10% senior 5% Junior 41%").unwrap();
    assert_eq!(split.get("junior"), Some(41));
    assert_eq!(split.iter().next(), Some(("junior", 41)));
}

#[test]
fn employment_type_requires_colon() {
    let types = employment_type("Vast: 79% tijdelijk : 15% stage 6%").unwrap();
    assert_eq!(types.get("vast"), Some(79));
    assert_eq!(types.get("tijdelijk"), Some(15));
    assert_eq!(types.get("stage"), None);
}

// -----------------------------------------------------------------------
// soft_skills / certificates / languages
// -----------------------------------------------------------------------

#[test]
fn soft_skills_sorted_by_share() {
    let skills = soft_skills("Flexibel 12% Proactief 30% Leergierig 18%").unwrap();
    assert_eq!(
        skills,
        vec![
            LabelledPercentage::new("Proactief", 30),
            LabelledPercentage::new("Leergierig", 18),
            LabelledPercentage::new("Flexibel", 12),
        ]
    );
}

#[test]
fn certificates_allow_text_before_share() {
    let certs = certificates("Rijbewijs B (personenauto) 70%").unwrap();
    assert_eq!(certs, vec![LabelledPercentage::new("Rijbewijs B", 70)]);
}

#[test]
fn certificate_prefix_terms_both_match() {
    let certs = certificates("VCA basis certificaat 45%").unwrap();
    assert_eq!(
        certs,
        vec![
            LabelledPercentage::new("VCA basis certificaat", 45),
            LabelledPercentage::new("VCA", 45),
        ]
    );
}

#[test]
fn languages_present_and_absent() {
    let langs = languages("Nederlands 88% Engels 23%").unwrap();
    assert_eq!(langs.get("Nederlands"), Some(88));
    assert_eq!(langs.get("Engels"), Some(23));
    assert_eq!(langs.get("Duits"), None);
    assert_eq!(langs.len(), 2);
}

#[test]
fn overflowing_percentage_is_malformed() {
    let err = languages("Engels 99999999999%").unwrap_err();
    assert_eq!(err.field(), "languages");
}
