use bijoy2uni::{config::Config, metadata};

const SAMPLE: &str = "\
Supreme Court of Bangladesh\n\
High Court Division\n\
(Criminal Appellate Jurisdiction)\n\
Death Reference No. 12 of 2019\n\
Mr. Justice Sheikh Abdul Awal\n\
And\n\
Mr. Justice Md. Akhtaruzzaman\n\
The State -Versus- Abul Kashem\n\
District: Dhaka.\n\
Heard On: 03.02.2020 and 04.02.2020\n\
Judgment Delivered On: 11.03.2020\n\
Relied upon 45 DLR (AD) 123 and 12 BLD 345 in argument.\n";

#[test]
fn extracts_case_number_and_type() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "12_DeathReference_2019").unwrap();
    assert_eq!(
        md.case_number.as_deref(),
        Some("Death Reference No. 12 of 2019")
    );
    assert_eq!(md.case_type.as_deref(), Some("Death Reference"));
}

#[test]
fn extracts_court_and_district() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "case").unwrap();
    assert_eq!(md.court.as_deref(), Some("Supreme Court of Bangladesh"));
    assert_eq!(md.district.as_deref(), Some("Dhaka"));
}

#[test]
fn extracts_judges_without_duplicates() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "case").unwrap();
    assert!(md.judges.contains(&"Sheikh Abdul Awal".to_string()));
    assert!(md.judges.contains(&"Md. Akhtaruzzaman".to_string()));
    assert_eq!(
        md.judges.len(),
        md.judges
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len()
    );
    assert!(md.judges.len() <= cfg.metadata.max_judges);
}

#[test]
fn extracts_parties() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "case").unwrap();
    assert_eq!(md.parties.plaintiff.as_deref(), Some("The State"));
    assert_eq!(md.parties.defendant.as_deref(), Some("Abul Kashem"));
}

#[test]
fn extracts_dates() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "case").unwrap();
    assert_eq!(
        md.hearing_date.as_deref(),
        Some("03.02.2020 and 04.02.2020")
    );
    assert_eq!(md.judgment_date.as_deref(), Some("11.03.2020"));
}

#[test]
fn extracts_law_report_citations() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, SAMPLE, "case").unwrap();
    assert_eq!(
        md.citations,
        vec!["45 DLR (AD) 123".to_string(), "12 BLD 345".to_string()]
    );
}

#[test]
fn falls_back_to_filename_for_case_number() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, "nothing useful here", "33_WritPetition_2021")
        .unwrap();
    assert_eq!(md.case_number.as_deref(), Some("33_WritPetition"));
}

#[test]
fn empty_text_extracts_nothing() {
    let cfg = Config::default();
    let md = metadata::extract(&cfg.metadata, "", "plain").unwrap();
    assert!(md.case_number.is_none());
    assert!(md.judges.is_empty());
    assert!(md.citations.is_empty());
    assert!(md.parties.plaintiff.is_none());
}
