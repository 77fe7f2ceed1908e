//! Fixed catalog of bundled sample datasets.

/// Symbolic name and button label for each bundled dataset.
pub const SAMPLE_DATASETS: &[(&str, &str)] = &[
    ("users", "Users (JSON)"),
    ("products", "Products (CSV)"),
    ("events", "Events (JSONL)"),
];

/// Map a symbolic dataset name to its bundled filename. Unknown names fail
/// before any network call is made.
pub fn sample_filename(dataset: &str) -> Result<&'static str, String> {
    match dataset {
        "users" => Ok("users.json"),
        "products" => Ok("products.csv"),
        "events" => Ok("events.jsonl"),
        other => Err(format!("Unknown sample dataset: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_datasets() {
        assert_eq!(sample_filename("users"), Ok("users.json"));
        assert_eq!(sample_filename("products"), Ok("products.csv"));
        assert_eq!(sample_filename("events"), Ok("events.jsonl"));
    }

    #[test]
    fn rejects_unknown_dataset_by_name() {
        let err = sample_filename("orders").unwrap_err();
        assert!(err.contains("orders"));
    }

    #[test]
    fn catalog_entries_all_resolve() {
        for (dataset, _) in SAMPLE_DATASETS {
            assert!(sample_filename(dataset).is_ok());
        }
    }
}
