use serde::{Deserialize, Serialize};

/// Column of a loaded table as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

/// Snapshot of one backend table. Owned by the backend; the client only
/// holds read-only copies refreshed after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub row_count: u64,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub tables: Vec<TableSchema>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileUploadResponse {
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_is_renamed_on_the_wire() {
        let column: ColumnInfo =
            serde_json::from_str(r#"{"name": "age", "type": "INTEGER"}"#).unwrap();
        assert_eq!(column.data_type, "INTEGER");
        assert!(serde_json::to_string(&column).unwrap().contains("\"type\""));
    }

    #[test]
    fn schema_response_defaults_to_empty() {
        let empty: SchemaResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.tables.is_empty());
        assert!(empty.error.is_none());
    }
}
