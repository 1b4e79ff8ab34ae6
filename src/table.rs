//! A small insertion-ordered table of named numeric columns, for plotting
//! tabular data by column name.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::data::IntoPlotData;

/// Named numeric columns in insertion order.
///
/// Deserializes from a JSON object of arrays:
/// `{"X": [1, 2, 3], "Y": [2.0, 4.0, 6.0]}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Table {
    columns: IndexMap<String, Vec<f64>>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a column.
    pub fn insert(&mut self, name: impl Into<String>, values: impl IntoPlotData) {
        self.columns.insert(name.into(), values.into_plot_data());
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table: Table = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_keep_insertion_order() {
        let mut table = Table::new();
        table.insert("Z", vec![1.0]);
        table.insert("A", vec![2.0]);
        table.insert("M", vec![3.0]);
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn json_object_deserializes_to_columns() {
        let table: Table =
            serde_json::from_str(r#"{"X": [1, 2, 3], "Y": [2.5, 5.0, 7.5]}"#).unwrap();
        assert_eq!(table.column("X"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.column("Y"), Some(&[2.5, 5.0, 7.5][..]));
        assert!(table.column("Z").is_none());
    }
}
