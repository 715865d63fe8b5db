use horario::parse_cell_entry;
use horario::models::ParsedEntry;
use rstest::rstest;

#[test]
fn test_cell_round_trip_daa() {
    let entry = parse_cell_entry("DAA BCS-5B\nFahad Sherwani", "E-1", "Monday", 2).expect("Debe parsear la celda");
    assert_eq!(
        entry,
        ParsedEntry {
            course_code: "DAA".to_string(),
            course_name: "Design & Analysis of Algorithms".to_string(),
            section: "BCS-5B".to_string(),
            instructor: "Fahad Sherwani".to_string(),
            room: "E-1".to_string(),
            day: "Monday".to_string(),
            time_slot: "08:55-09:45".to_string(),
            slot_number: 2,
            slot_count: None,
        }
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n \n")]
#[case("Reserved for exam")]
#[case("RESERVED")]
#[case("DAA BCS-5B\nreserved by HoD")]
fn test_empty_or_reserved_cells_are_skipped(#[case] cell: &str) {
    assert!(parse_cell_entry(cell, "E-1", "Monday", 1).is_none());
}

#[rstest]
#[case("Jummah Break")]
#[case("BCS-5B")]
#[case("DAA bcs-5b")]
#[case("Lab Session")]
fn test_cells_without_section_are_skipped(#[case] cell: &str) {
    assert!(parse_cell_entry(cell, "E-1", "Monday", 1).is_none());
}

#[rstest]
#[case("CN Lab BCS-5F", "CN Lab", "BCS-5F", "Computer Networks Lab")]
#[case("SDA BSE5F", "SDA", "BSE5F", "Software Design & Architecture")]
#[case("AI BSCS-7A", "AI", "BSCS-7A", "Artificial Intelligence")]
#[case("XYZ999 BCS-5B", "XYZ999", "BCS-5B", "XYZ999")]
#[case("  OS   BDS-3C  ", "OS", "BDS-3C", "Operating Systems")]
fn test_code_section_and_name(
    #[case] cell: &str,
    #[case] code: &str,
    #[case] section: &str,
    #[case] name: &str,
) {
    let entry = parse_cell_entry(cell, "E-1", "Tuesday", 5).expect("Debe parsear la celda");
    assert_eq!(entry.course_code, code);
    assert_eq!(entry.section, section);
    assert_eq!(entry.course_name, name);
}

#[test]
fn test_missing_instructor_is_tba() {
    let entry = parse_cell_entry("SE BSE-3A", "E-4", "Friday", 7).unwrap();
    assert_eq!(entry.instructor, "TBA");
    assert_eq!(entry.time_slot, "13:30-14:20");
}

#[test]
fn test_extra_lines_ignored_and_blank_lines_skipped() {
    let entry = parse_cell_entry("\nDB BCS-3A\n\n  Umair Arshad \nroom change\n", "E-4", "Friday", 1).unwrap();
    assert_eq!(entry.course_code, "DB");
    assert_eq!(entry.instructor, "Umair Arshad");
}

#[test]
fn test_unknown_slot_number_degrades_to_label() {
    let entry = parse_cell_entry("DAA BCS-5B", "E-1", "Monday", 12).unwrap();
    assert_eq!(entry.time_slot, "Slot 12");
}
