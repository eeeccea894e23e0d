use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Station operator metadata, keyed by lower-cased field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationProfile {
    fields: HashMap<String, String>,
}

impl StationProfile {
    /// Keys are lower-cased; on collision the later pair wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Station callsign, upper-cased for display.
    pub fn callsign(&self) -> String {
        self.field("callsign").to_uppercase()
    }

    pub fn license(&self) -> &str {
        self.field("license")
    }

    pub fn operator(&self) -> &str {
        self.field("operator")
    }

    pub fn location(&self) -> &str {
        self.field("location")
    }

    pub fn grid(&self) -> &str {
        self.field("grid")
    }

    pub fn email(&self) -> &str {
        self.field("email")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One contact log entry: column name → cell value, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Pairs `headers` with `cells` positionally. Missing trailing cells become
    /// empty strings; cells beyond the header width are dropped.
    pub fn from_cells<S: AsRef<str>>(headers: &[String], cells: &[S]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = cells.get(i).map(|c| c.as_ref().trim()).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    /// First value stored under `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Header row plus every record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTable {
    headers: Vec<String>,
    records: Vec<LogRecord>,
}

impl LogTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    pub fn push_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let record = LogRecord::from_cells(&self.headers, cells);
        self.records.push(record);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Output of the extract stage.
#[derive(Debug, Clone)]
pub struct ContactLog {
    pub profile: StationProfile,
    pub table: LogTable,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub row_count: usize,
}
