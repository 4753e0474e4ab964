use super::*;

#[test]
fn validate_entry_input_trims_fields() {
    assert_eq!(
        validate_entry_input("  First day  ", " It rained. "),
        Ok(("First day".to_owned(), "It rained.".to_owned()))
    );
}

#[test]
fn validate_entry_input_requires_title() {
    assert_eq!(validate_entry_input("   ", "body"), Err("Enter a title first."));
}

#[test]
fn validate_entry_input_allows_empty_content() {
    assert_eq!(
        validate_entry_input("Title", ""),
        Ok(("Title".to_owned(), String::new()))
    );
}
