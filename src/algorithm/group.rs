use std::collections::BTreeMap;

use crate::models::ParsedEntry;

/// Agrupa entradas por `section`. Sin merge ni dedup: cada entrada cae en
/// exactamente un grupo y el orden relativo se mantiene.
pub fn group_by_section(entries: Vec<ParsedEntry>) -> BTreeMap<String, Vec<ParsedEntry>> {
    let mut groups: BTreeMap<String, Vec<ParsedEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.section.clone()).or_default().push(entry);
    }
    groups
}
