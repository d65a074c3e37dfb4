use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xls, Xlsx};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use super::error::{DashboardError, Result};
use super::model::{
    Dataset, Record, CATEGORY, CITY, ORDER_DATE, REGION, REQUIRED_COLUMNS, SALES, STATE,
};

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where a dataset comes from: a user upload or the bundled file on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Upload { name: String, bytes: Vec<u8> },
    Fallback(PathBuf),
}

impl DataSource {
    /// An upload, when present, always wins over the bundled file.
    pub fn resolve(upload: Option<(String, Vec<u8>)>, fallback: &Path) -> Self {
        match upload {
            Some((name, bytes)) => DataSource::Upload { name, bytes },
            None => DataSource::Fallback(fallback.to_path_buf()),
        }
    }

    /// File name shown to the user.
    pub fn label(&self) -> String {
        match self {
            DataSource::Upload { name, .. } => name.clone(),
            DataSource::Fallback(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and validate a dataset. Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma separated, header row
/// * `.xlsx` / `.xls` – first worksheet, header row
pub fn load(source: &DataSource) -> Result<Dataset> {
    let dataset = match source {
        DataSource::Upload { name, bytes } => parse_bytes(name, bytes)?,
        DataSource::Fallback(path) => {
            let bytes = std::fs::read(path).map_err(|e| DashboardError::FileNotFound {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            parse_bytes(&source.label(), &bytes)?
        }
    };
    log::info!(
        "Loaded {} rows from {} with columns {:?}",
        dataset.len(),
        source.label(),
        dataset.columns
    );
    Ok(dataset)
}

/// Parse an in-memory file whose format is given by `name`'s extension.
pub fn parse_bytes(name: &str, bytes: &[u8]) -> Result<Dataset> {
    let table = match Format::of(name)? {
        Format::Delimited => read_delimited(name, bytes)?,
        Format::Xlsx => read_workbook::<Xlsx<Cursor<Vec<u8>>>>(name, bytes)?,
        Format::Xls => read_workbook::<Xls<Cursor<Vec<u8>>>>(name, bytes)?,
    };
    build_dataset(table)
}

/// Fail with every required column absent from `headers`, sorted by name.
pub fn validate_columns(headers: &[String]) -> Result<()> {
    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    Err(DashboardError::MissingColumns(missing))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Delimited,
    Xlsx,
    Xls,
}

impl Format {
    fn of(name: &str) -> Result<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" | "txt" => Ok(Format::Delimited),
            "xlsx" => Ok(Format::Xlsx),
            "xls" => Ok(Format::Xls),
            "" => Err(malformed(name, "file has no extension; expected csv/txt/xlsx/xls")),
            other => Err(malformed(
                name,
                format!(".{other} files are not supported; expected csv/txt/xlsx/xls"),
            )),
        }
    }
}

fn malformed(name: &str, reason: impl ToString) -> DashboardError {
    DashboardError::UnsupportedFormat {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Cells – one raw value before coercion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Text(String),
    Number(f64),
    /// Spreadsheet date/time stored as a serial day number.
    Serial(f64),
}

static EMPTY: Cell = Cell::Empty;

impl Cell {
    fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Serial(n) => Some(
                date_from_serial(*n)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| format_number(*n)),
            ),
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => parse_date(s),
            Cell::Number(n) | Cell::Serial(n) => date_from_serial(*n),
        }
    }

    fn number(&self) -> Option<f64> {
        let value = match self {
            Cell::Empty => None,
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Number(n) | Cell::Serial(n) => Some(*n),
        };
        value.filter(|v| v.is_finite())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// ---------------------------------------------------------------------------
// Date coercion
// ---------------------------------------------------------------------------

// Two-digit-year formats come first: they reject four-digit years as
// trailing input, whereas `%Y` would happily read "16" as year 16.
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d.%m.%Y",
];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse an order date; anything unrecognised becomes `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Spreadsheet serial day number (1900 date system) to a date.
fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial >= 2_958_466.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.floor() as u64))
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Fields are kept as UTF-8 when valid, otherwise read as ISO-8859-1.
fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn read_delimited(name: &str, bytes: &[u8]) -> Result<RawTable> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| malformed(name, e))?
        .iter()
        .map(decode_field)
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(malformed(name, "file contains no header row"));
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result.map_err(|e| malformed(name, format!("row {row_no}: {e}")))?;
        rows.push(
            record
                .iter()
                .map(|field| match decode_field(field) {
                    s if s.is_empty() => Cell::Empty,
                    s => Cell::Text(s),
                })
                .collect(),
        );
    }

    Ok(RawTable { headers, rows })
}

fn read_workbook<R>(name: &str, bytes: &[u8]) -> Result<RawTable>
where
    R: Reader<Cursor<Vec<u8>>>,
    R::Error: std::fmt::Display,
{
    let mut workbook = R::new(Cursor::new(bytes.to_vec())).map_err(|e| malformed(name, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| malformed(name, "workbook contains no sheets"))?
        .map_err(|e| malformed(name, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| malformed(name, "file contains no header row"))?
        .iter()
        .map(|c| cell_from_data(c).text().unwrap_or_default())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(malformed(name, "file contains no header row"));
    }
    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Serial(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

// ---------------------------------------------------------------------------
// RawTable -> Dataset
// ---------------------------------------------------------------------------

struct ColumnIndex {
    order_date: usize,
    region: usize,
    state: usize,
    city: usize,
    category: usize,
    sales: usize,
}

impl ColumnIndex {
    fn locate(headers: &[String]) -> Result<Self> {
        validate_columns(headers)?;
        let find = |col: &str| {
            headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| DashboardError::MissingColumns(vec![col.to_string()]))
        };
        Ok(ColumnIndex {
            order_date: find(ORDER_DATE)?,
            region: find(REGION)?,
            state: find(STATE)?,
            city: find(CITY)?,
            category: find(CATEGORY)?,
            sales: find(SALES)?,
        })
    }

    fn is_required(&self, i: usize) -> bool {
        [
            self.order_date,
            self.region,
            self.state,
            self.city,
            self.category,
            self.sales,
        ]
        .contains(&i)
    }
}

fn cell_at(row: &[Cell], i: usize) -> &Cell {
    row.get(i).unwrap_or(&EMPTY)
}

/// Rename repeated header names to `Name.1`, `Name.2`, ... so every column
/// keeps its own values.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut suffixes: BTreeMap<String, usize> = BTreeMap::new();
    let mut unique: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        while unique.contains(&name) {
            let n = suffixes.entry(header.clone()).or_insert(0);
            *n += 1;
            name = format!("{header}.{n}");
        }
        unique.push(name);
    }
    unique
}

fn build_dataset(mut table: RawTable) -> Result<Dataset> {
    table.headers = dedupe_headers(table.headers);
    let idx = ColumnIndex::locate(&table.headers)?;
    let mut undated = 0usize;
    let mut non_numeric = 0usize;
    let mut records = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        if row.iter().all(|c| *c == Cell::Empty) {
            continue;
        }

        let order_date = cell_at(row, idx.order_date).date();
        if order_date.is_none() {
            undated += 1;
        }
        let sales = cell_at(row, idx.sales).number().unwrap_or_else(|| {
            non_numeric += 1;
            0.0
        });

        let extra: BTreeMap<String, String> = table
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !idx.is_required(*i))
            .filter_map(|(i, h)| cell_at(row, i).text().map(|v| (h.clone(), v)))
            .collect();

        records.push(Record {
            order_date,
            region: cell_at(row, idx.region).text(),
            state: cell_at(row, idx.state).text(),
            city: cell_at(row, idx.city).text(),
            category: cell_at(row, idx.category).text(),
            sales,
            extra,
        });
    }

    if undated > 0 {
        log::warn!("{undated} rows have an unparseable {ORDER_DATE} and are excluded from date ranges");
    }
    if non_numeric > 0 {
        log::warn!("{non_numeric} rows have a non-numeric {SALES} value, counted as 0");
    }

    Ok(Dataset {
        columns: table.headers,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const HEADER: &str = "Row ID,Order Date,Region,State,City,Category,Sales\n";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_csv_upload() {
        let csv = format!(
            "{HEADER}1,2024-01-15,East,New York,New York City,Furniture,100.5\n\
             2,11/8/2016,West,California,Los Angeles,Technology,200\n"
        );
        let ds = parse_bytes("orders.csv", csv.as_bytes()).unwrap();

        assert_eq!(ds.columns[0], "Row ID");
        assert_eq!(ds.len(), 2);
        let first = &ds.records[0];
        assert_eq!(first.order_date, Some(date(2024, 1, 15)));
        assert_eq!(first.region.as_deref(), Some("East"));
        assert_eq!(first.city.as_deref(), Some("New York City"));
        assert_eq!(first.sales, 100.5);
        assert_eq!(first.extra.get("Row ID").map(String::as_str), Some("1"));
        assert_eq!(ds.records[1].order_date, Some(date(2016, 11, 8)));
    }

    #[test]
    fn unparseable_dates_become_null() {
        let csv = format!("{HEADER}1,not a date,East,NY,NYC,Tech,5\n2,,East,NY,NYC,Tech,5\n");
        let ds = parse_bytes("orders.txt", csv.as_bytes()).unwrap();
        assert!(ds.records.iter().all(|r| r.order_date.is_none()));
    }

    #[test]
    fn empty_categorical_cells_are_null() {
        let csv = format!("{HEADER}1,2024-01-01,,NY,NYC,,5\n");
        let ds = parse_bytes("orders.csv", csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].region, None);
        assert_eq!(ds.records[0].category, None);
        assert_eq!(ds.records[0].state.as_deref(), Some("NY"));
    }

    #[test]
    fn missing_sales_column_is_named() {
        let csv = "Order Date,Region,State,City,Category\n2024-01-01,East,NY,NYC,Tech\n";
        let err = parse_bytes("orders.csv", csv.as_bytes()).unwrap_err();
        assert_eq!(err, DashboardError::MissingColumns(vec!["Sales".to_string()]));
    }

    #[test]
    fn every_missing_column_is_reported_sorted() {
        let err = validate_columns(&["Region".to_string(), "Sales".to_string()]).unwrap_err();
        assert_eq!(
            err,
            DashboardError::MissingColumns(vec![
                "Category".to_string(),
                "City".to_string(),
                "Order Date".to_string(),
                "State".to_string(),
            ])
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["orders.json", "orders.parquet", "orders"] {
            let err = parse_bytes(name, b"whatever").unwrap_err();
            assert!(
                matches!(err, DashboardError::UnsupportedFormat { .. }),
                "{name}: {err:?}"
            );
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let csv = format!("{HEADER}1,2024-01-01,East,NY,NYC,Tech,5\n");
        assert_eq!(parse_bytes("ORDERS.CSV", csv.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn corrupt_workbook_is_unsupported_not_silently_replaced() {
        let err = parse_bytes("orders.xlsx", b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, DashboardError::UnsupportedFormat { .. }), "{err:?}");
    }

    fn workbook(fill: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut book = rust_xlsxwriter::Workbook::new();
        fill(book.add_worksheet());
        book.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_first_sheet_of_a_workbook() {
        let bytes = workbook(|sheet| {
            let headers = ["Row ID", "Order Date", "Region", "State", "City", "Category", "Sales"];
            for (col, h) in headers.iter().enumerate() {
                sheet.write_string(0, col as u16, *h).unwrap();
            }
            let day = rust_xlsxwriter::ExcelDateTime::from_ymd(2024, 1, 15).unwrap();
            let fmt = rust_xlsxwriter::Format::new().set_num_format("yyyy-mm-dd");
            sheet.write_number(1, 0, 7).unwrap();
            sheet.write_datetime_with_format(1, 1, &day, &fmt).unwrap();
            sheet.write_string(1, 2, "East").unwrap();
            sheet.write_string(1, 3, "New York").unwrap();
            sheet.write_string(1, 4, "New York City").unwrap();
            sheet.write_string(1, 5, "Furniture").unwrap();
            sheet.write_number(1, 6, 100.0).unwrap();
        });

        let ds = parse_bytes("orders.xlsx", &bytes).unwrap();
        assert_eq!(ds.columns[0], "Row ID");
        assert_eq!(ds.columns[6], "Sales");

        let mut expected = Record::new(
            date(2024, 1, 15),
            "East",
            "New York",
            "New York City",
            "Furniture",
            100.0,
        );
        expected.extra.insert("Row ID".to_string(), "7".to_string());
        assert_eq!(ds.records, vec![expected]);
    }

    #[test]
    fn workbook_serial_numbers_in_the_date_column_are_dates() {
        let bytes = workbook(|sheet| {
            for (col, h) in REQUIRED_COLUMNS.iter().enumerate() {
                sheet.write_string(0, col as u16, *h).unwrap();
            }
            let at = |name: &str| REQUIRED_COLUMNS.iter().position(|c| *c == name).unwrap() as u16;
            sheet.write_number(1, at(ORDER_DATE), 45306).unwrap();
            sheet.write_string(1, at(REGION), "West").unwrap();
            sheet.write_number(1, at(SALES), 12.5).unwrap();
        });

        let ds = parse_bytes("orders.xlsx", &bytes).unwrap();
        assert_eq!(ds.records[0].order_date, Some(date(2024, 1, 15)));
        assert_eq!(ds.records[0].region.as_deref(), Some("West"));
        assert_eq!(ds.records[0].city, None);
        assert_eq!(ds.records[0].sales, 12.5);
    }

    #[test]
    fn empty_workbook_is_unsupported() {
        let bytes = workbook(|_| {});
        let err = parse_bytes("orders.xlsx", &bytes).unwrap_err();
        assert!(
            matches!(err, DashboardError::UnsupportedFormat { ref reason, .. } if reason.contains("no header row")),
            "{err:?}"
        );
    }

    #[test]
    fn empty_csv_is_unsupported() {
        let cases: [&[u8]; 3] = [b"", b"\xEF\xBB\xBF", b"\n\n"];
        for bytes in cases {
            let err = parse_bytes("orders.csv", bytes).unwrap_err();
            assert!(
                matches!(err, DashboardError::UnsupportedFormat { ref reason, .. } if reason.contains("no header row")),
                "{bytes:?}: {err:?}"
            );
        }
    }

    #[test]
    fn repeated_headers_keep_their_own_values() {
        let csv = "Order Date,Region,State,City,Category,Sales,Note,Note,Note.1\n\
                   2024-01-01,East,NY,NYC,Tech,5,a,b,c\n";
        let ds = parse_bytes("orders.csv", csv.as_bytes()).unwrap();
        assert_eq!(&ds.columns[6..], ["Note", "Note.1", "Note.1.1"]);

        let extra = &ds.records[0].extra;
        assert_eq!(extra.get("Note").map(String::as_str), Some("a"));
        assert_eq!(extra.get("Note.1").map(String::as_str), Some("b"));
        assert_eq!(extra.get("Note.1.1").map(String::as_str), Some("c"));

        let out = String::from_utf8(crate::data::export::records_csv(&ds).unwrap()).unwrap();
        assert!(out.ends_with(",a,b,c\n"), "{out}");
    }

    #[test]
    fn latin1_fields_are_decoded() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"1,2024-01-01,South,S\xe3o Paulo,Jundia\xed,Tech,5\n");
        let ds = parse_bytes("orders.csv", &bytes).unwrap();
        assert_eq!(ds.records[0].state.as_deref(), Some("São Paulo"));
        assert_eq!(ds.records[0].city.as_deref(), Some("Jundiaí"));
    }

    #[test]
    fn utf8_bom_does_not_leak_into_header() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(b"Order Date,Region,State,City,Category,Sales\n2024-01-01,East,NY,NYC,Tech,5\n");
        let ds = parse_bytes("orders.csv", &bytes).unwrap();
        assert_eq!(ds.columns[0], "Order Date");
    }

    #[test]
    fn non_numeric_sales_count_as_zero() {
        let csv = format!("{HEADER}1,2024-01-01,East,NY,NYC,Tech,n/a\n");
        let ds = parse_bytes("orders.csv", csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].sales, 0.0);
    }

    #[test]
    fn missing_fallback_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Superstore.csv");
        let err = load(&DataSource::Fallback(path.clone())).unwrap_err();
        assert!(
            matches!(err, DashboardError::FileNotFound { path: ref p, .. } if *p == path),
            "{err:?}"
        );
    }

    #[test]
    fn loads_fallback_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{HEADER}1,2024-01-01,East,NY,NYC,Tech,5\n").unwrap();
        let ds = load(&DataSource::Fallback(file.path().to_path_buf())).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn upload_takes_priority_over_fallback() {
        let fallback = Path::new("data/Superstore.csv");
        let source = DataSource::resolve(Some(("mine.csv".into(), vec![1, 2])), fallback);
        assert_eq!(source.label(), "mine.csv");
        assert_eq!(
            DataSource::resolve(None, fallback),
            DataSource::Fallback(fallback.to_path_buf())
        );
    }

    #[test]
    fn parses_common_date_spellings() {
        assert_eq!(parse_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("1/15/2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("1/15/24"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 13:45:00"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("15-Jan-2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn spreadsheet_serials_map_to_dates() {
        assert_eq!(date_from_serial(45306.0), Some(date(2024, 1, 15)));
        assert_eq!(date_from_serial(45306.75), Some(date(2024, 1, 15)));
        assert_eq!(date_from_serial(-3.0), None);
    }
}
