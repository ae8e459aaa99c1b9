use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::types::Record;

/// Records keyed by normalized key, in order of first appearance.
pub type UniqueRecords = IndexMap<String, Record>;

#[derive(Debug, Default)]
pub struct Deduplicated {
    pub unique: UniqueRecords,
    /// Records dropped because their key was missing, empty or whitespace
    pub skipped_empty_key: usize,
    /// Records dropped because an earlier record had the same key
    pub duplicates: usize,
}

/// Lowercase the raw key when comparing case-insensitively, identity otherwise.
pub fn normalize_key(raw: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        raw.to_lowercase()
    } else {
        raw.to_string()
    }
}

/// Value of `key_field` in `record`, or `""` when the column is absent.
pub fn key_of<'a>(record: &'a Record, key_field: &str) -> &'a str {
    record.get(key_field).map(String::as_str).unwrap_or("")
}

/// Keep the first record seen for each key. Later duplicates never replace it.
pub fn deduplicate<I>(records: I, key_field: &str, case_insensitive: bool) -> Deduplicated
where
    I: IntoIterator<Item = Record>,
{
    let mut result = Deduplicated::default();

    for record in records {
        let raw = key_of(&record, key_field);
        if raw.trim().is_empty() {
            result.skipped_empty_key += 1;
            continue;
        }

        let key = normalize_key(raw, case_insensitive);
        match result.unique.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(slot) => {
                debug!("Dropping duplicate of key {:?}", slot.key());
                result.duplicates += 1;
            }
        }
    }

    info!(
        "Kept {} unique record(s); dropped {} duplicate(s) and {} with an empty '{}'",
        result.unique.len(),
        result.duplicates,
        result.skipped_empty_key,
        key_field
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let records = vec![
            record(&[("Email", "a@x.com"), ("Name", "first")]),
            record(&[("Email", "a@x.com"), ("Name", "second")]),
        ];

        let result = deduplicate(records, "Email", false);
        assert_eq!(result.unique.len(), 1);
        assert_eq!(result.unique["a@x.com"]["Name"], "first");
        assert_eq!(result.duplicates, 1);
    }

    #[test]
    fn test_case_sensitivity() {
        let records = || {
            vec![
                record(&[("Email", "A@x.com")]),
                record(&[("Email", "a@x.com")]),
            ]
        };

        assert_eq!(deduplicate(records(), "Email", false).unique.len(), 2);

        let folded = deduplicate(records(), "Email", true);
        assert_eq!(folded.unique.len(), 1);
        assert_eq!(folded.unique["a@x.com"]["Email"], "A@x.com");
    }

    #[test]
    fn test_empty_and_missing_keys_skipped() {
        let records = vec![
            record(&[("Email", "")]),
            record(&[("Email", "   \t")]),
            record(&[("Name", "no email column")]),
            record(&[("Email", "b@x.com")]),
        ];

        let result = deduplicate(records, "Email", false);
        assert_eq!(result.unique.len(), 1);
        assert_eq!(result.skipped_empty_key, 3);
        assert_eq!(result.duplicates, 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let records = vec![
            record(&[("Email", "c")]),
            record(&[("Email", "a")]),
            record(&[("Email", "c")]),
            record(&[("Email", "b")]),
        ];

        let keys: Vec<_> = deduplicate(records, "Email", false)
            .unique
            .into_keys()
            .collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_key_is_not_trimmed_for_comparison() {
        let records = vec![record(&[("Email", "a@x.com")]), record(&[("Email", " a@x.com")])];
        assert_eq!(deduplicate(records, "Email", false).unique.len(), 2);
    }

    #[test]
    fn test_custom_key_field() {
        let records = vec![
            record(&[("Id", "1"), ("Email", "same@x.com")]),
            record(&[("Id", "2"), ("Email", "same@x.com")]),
        ];
        assert_eq!(deduplicate(records, "Id", false).unique.len(), 2);
    }
}
