use horario::group_by_section;
use horario::models::ParsedEntry;
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = ParsedEntry> {
    (
        prop::sample::select(vec!["DAA", "OS", "CN Lab", "XYZ999"]),
        prop::sample::select(vec!["BCS-5B", "BCS-5F", "BSE-3A", "BDS-1C"]),
        1u32..=9,
    )
        .prop_map(|(code, section, slot)| ParsedEntry {
            course_code: code.to_string(),
            course_name: code.to_string(),
            section: section.to_string(),
            instructor: "TBA".to_string(),
            room: "E-1".to_string(),
            day: "Monday".to_string(),
            time_slot: horario::parser::time_slot(slot),
            slot_number: slot,
            slot_count: None,
        })
}

proptest! {
    #[test]
    fn test_grouping_is_lossless(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let total = entries.len();
        let groups = group_by_section(entries);
        let grouped: usize = groups.values().map(|v| v.len()).sum();
        prop_assert_eq!(grouped, total);
        for (section, members) in groups.iter() {
            prop_assert!(members.iter().all(|e| &e.section == section));
        }
    }

    #[test]
    fn test_no_duplicate_day_slot_after_aggregation(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let catalog = horario::build_catalog(entries);
        for course in catalog.values().flatten() {
            let mut keys: Vec<(String, u32)> = course
                .sessions
                .iter()
                .map(|s| (s.day.clone(), s.slot_number))
                .collect();
            let before = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), before);
            prop_assert_eq!(course.credit_hours as usize, course.sessions.len());
        }
    }
}
