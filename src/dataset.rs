//! Header-keyed dataset records built from tokenized rows

use indexmap::IndexMap;

use crate::csv::{detect_delimiter, CsvParser};

/// Normalized form of a header name: trimmed and ASCII-lowercased.
///
/// The source spreadsheets are inconsistent about header casing (`qtd` vs
/// `Qtd`, `Situacao` vs `situacao`), so normalization happens once here
/// instead of with per-chart fallback lookups.
fn normalize_header(header: &str) -> String {
    header.trim().to_ascii_lowercase()
}

/// One data row keyed by normalized header name
///
/// Field values are always strings; numeric interpretation happens on demand
/// via [`Record::number`] and defaults to 0 when the value does not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Look up a field by header name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&normalize_header(name)).map(String::as_str)
    }

    /// Field value, or the empty string when the column does not exist
    pub fn text(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Field value coerced to a number; missing or unparsable values yield 0
    pub fn number(&self, name: &str) -> f64 {
        crate::aggregate::safe_number(self.text(name))
    }

    /// Normalized header names, in header-row order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered collection of records parsed from one source file
///
/// The header row is consumed during construction and excluded from the
/// records. The collection is immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Parse raw CSV text into a dataset
    ///
    /// The delimiter is auto-detected from the first non-blank line and then
    /// fixed for the whole file. Blank or whitespace-only input yields an
    /// empty dataset. Never fails: malformed input degrades to a best-effort
    /// parse.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Dataset::default();
        }

        let sample = trimmed
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");
        let delimiter = detect_delimiter(sample);

        let rows = CsvParser::new(delimiter, b'"').parse_text(text);
        Self::from_rows(rows)
    }

    /// Build records by zipping each data row against the header row
    ///
    /// The first row provides the (normalized) header names. Rows shorter
    /// than the header are padded with empty strings; extra trailing fields
    /// are ignored. A duplicated header name silently overwrites the earlier
    /// binding while keeping its original position.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut rows = rows.into_iter();
        let Some(header_row) = rows.next() else {
            return Dataset::default();
        };
        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();

        let records = rows
            .map(|entries| {
                let mut fields = IndexMap::with_capacity(headers.len());
                for (index, header) in headers.iter().enumerate() {
                    let value = entries.get(index).cloned().unwrap_or_default();
                    fields.insert(header.clone(), value);
                }
                Record { fields }
            })
            .collect();

        Dataset { records }
    }

    /// The records, in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_no_rows_yields_empty_dataset() {
        assert!(Dataset::from_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let dataset = Dataset::from_rows(rows(&[&["H1", "H2"], &["1"]]));
        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.text("h1"), "1");
        assert_eq!(record.text("h2"), "");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let dataset = Dataset::from_rows(rows(&[&["a"], &["1", "extra"]]));
        let record = &dataset.records()[0];
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("a"), "1");
    }

    #[test]
    fn test_every_record_has_header_key_set() {
        let dataset = Dataset::from_rows(rows(&[
            &["Situacao", "qtd"],
            &["Ativo", "3"],
            &["Trancado"],
            &["Concluído", "5", "x"],
        ]));
        for record in dataset.records() {
            let keys: Vec<&str> = record.keys().collect();
            assert_eq!(keys, vec!["situacao", "qtd"]);
        }
    }

    #[test]
    fn test_duplicate_header_overwrites_in_place() {
        let dataset = Dataset::from_rows(rows(&[&["a", "b", "a"], &["1", "2", "3"]]));
        let record = &dataset.records()[0];
        assert_eq!(record.text("a"), "3");
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let dataset = Dataset::from_rows(rows(&[&["Qtd"], &["7"]]));
        let record = &dataset.records()[0];
        assert_eq!(record.text("qtd"), "7");
        assert_eq!(record.text("QTD"), "7");
    }

    #[test]
    fn test_number_coercion_defaults_to_zero() {
        let dataset = Dataset::from_rows(rows(&[&["qtd"], &["12"], &["x"], &[""]]));
        let numbers: Vec<f64> = dataset.iter().map(|r| r.number("qtd")).collect();
        assert_eq!(numbers, vec![12.0, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_detects_semicolon() {
        let dataset = Dataset::parse("Turno;qtd\nManhã;10\nNoite;4\n");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].text("turno"), "Manhã");
        assert_eq!(dataset.records()[1].number("qtd"), 4.0);
    }

    #[test]
    fn test_parse_blank_text_is_empty() {
        assert!(Dataset::parse("").is_empty());
        assert!(Dataset::parse("  \n\n  ").is_empty());
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        assert!(Dataset::parse("Situacao,qtd\n").is_empty());
    }
}
