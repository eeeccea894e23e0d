use crate::domain::model::LogTable;
use csv::ReaderBuilder;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

impl LogTable {
    pub fn from_csv_str(content: &str) -> Result<Self, csv::Error> {
        Self::from_csv_bytes(content.as_bytes())
    }

    /// Parses comma-separated bytes. The first record is the header row; an
    /// input with no records yields an empty table.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, csv::Error> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut records = reader.records();

        let headers: Vec<String> = match records.next() {
            Some(header) => header?.iter().map(|h| h.trim().to_string()).collect(),
            None => {
                tracing::debug!("CSV input has no header row");
                return Ok(LogTable::default());
            }
        };
        tracing::debug!("CSV header has {} columns: {:?}", headers.len(), headers);

        let mut table = LogTable::new(headers);
        for record in records {
            let record = record?;
            let width = table.headers().len();
            if record.len() > width {
                tracing::debug!(
                    "Row at line {} has {} cells, ignoring {} beyond the header",
                    record.position().map(|p| p.line()).unwrap_or_default(),
                    record.len(),
                    record.len() - width
                );
            }
            let cells: Vec<&str> = record.iter().collect();
            table.push_row(&cells);
        }

        Ok(table)
    }
}
