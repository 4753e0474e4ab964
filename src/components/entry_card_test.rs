use super::*;

#[test]
fn format_created_at_shortens_full_timestamp() {
    assert_eq!(format_created_at("2024-05-01T09:30:12.345678"), "2024-05-01 09:30");
}

#[test]
fn format_created_at_handles_time_without_seconds() {
    assert_eq!(format_created_at("2024-05-01T09:30"), "2024-05-01 09:30");
}

#[test]
fn format_created_at_passes_through_unrecognized_shapes() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
}
