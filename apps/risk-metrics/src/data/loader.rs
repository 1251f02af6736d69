//! CSV loading for trade P&L files.
//!
//! Column names come from `InputConfig`; every configured column must be
//! present in the header. Numeric cells must parse as finite numbers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use tracing::{debug, info, warn};

use super::dataset::TradeDataset;
use crate::config::InputConfig;
use crate::error::{Result, RiskError};

/// Load a trade P&L CSV file from disk.
pub fn load_csv(path: &Path, config: &InputConfig) -> Result<TradeDataset> {
    let file = File::open(path).map_err(|e| RiskError::io(path.display().to_string(), e))?;
    let dataset = read_csv(BufReader::new(file), config)?;

    info!(
        path = %path.display(),
        rows = dataset.len(),
        derived_cumulative = config.derive_cumulative,
        "Trade P&L loaded"
    );

    Ok(dataset)
}

/// Read trade P&L CSV data from any reader.
pub fn read_csv<R: Read>(input: R, config: &InputConfig) -> Result<TradeDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| RiskError::missing_column(name))
    };

    let pnl_idx = find(&config.pnl_column)?;
    let date_idx = find(&config.date_column)?;
    let cumulative_idx = if config.derive_cumulative {
        None
    } else {
        Some(find(&config.cumulative_column)?)
    };

    let mut dates = Vec::new();
    let mut pnl = Vec::new();
    let mut cumulative = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        pnl.push(parse_cell(&record, pnl_idx, row, &config.pnl_column)?);
        if let Some(idx) = cumulative_idx {
            cumulative.push(parse_cell(&record, idx, row, &config.cumulative_column)?);
        }
        dates.push(record.get(date_idx).unwrap_or_default().to_string());
    }

    if let Some(row) = first_out_of_order(&dates) {
        warn!(
            row,
            date = %dates[row - 1],
            "Dates are not in chronological order; drawdown assumes file order"
        );
    }

    if config.derive_cumulative {
        debug!(base = config.cumulative_base, "Deriving cumulative P&L from trade P&L");
        TradeDataset::from_pnl(dates, pnl, config.cumulative_base)
    } else {
        TradeDataset::new(dates, pnl, cumulative)
    }
}

fn parse_cell(record: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<f64> {
    let raw = record.get(idx).unwrap_or_default();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RiskError::InvalidValue {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// One-based row of the first date earlier than its predecessor.
///
/// Only checked when every label parses as a date.
fn first_out_of_order(dates: &[String]) -> Option<usize> {
    let parsed: Option<Vec<NaiveDate>> = dates.iter().map(|d| parse_date(d)).collect();
    let parsed = parsed?;
    parsed
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(csv: &str, config: &InputConfig) -> Result<TradeDataset> {
        read_csv(csv.as_bytes(), config)
    }

    #[test]
    fn test_read_all_columns() {
        let csv = "date,trade_pnl,cumulative_pnl\n\
                   2024-01-02,100.5,1100.5\n\
                   2024-01-03,-50.25,1050.25\n\
                   2024-01-04,20,1070.25\n";
        let Ok(dataset) = read(csv, &InputConfig::default()) else {
            panic!("CSV should load");
        };
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.pnl(), &[100.5, -50.25, 20.0]);
        assert_eq!(dataset.cumulative(), &[1100.5, 1050.25, 1070.25]);
        assert_eq!(dataset.dates()[2], "2024-01-04");
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let csv = "symbol,cumulative_pnl,trade_pnl,date\n\
                   ES, 10 , 10 ,2024-01-02\n\
                   ES,15,5,2024-01-03\n";
        let Ok(dataset) = read(csv, &InputConfig::default()) else {
            panic!("CSV should load");
        };
        assert_eq!(dataset.pnl(), &[10.0, 5.0]);
        assert_eq!(dataset.cumulative(), &[10.0, 15.0]);
    }

    #[test]
    fn test_missing_pnl_column() {
        let csv = "date,cumulative_pnl\n2024-01-02,10\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected missing column");
        };
        assert_eq!(err.code(), ErrorCode::MissingColumn);
        assert!(err.to_string().contains("trade_pnl"));
    }

    #[test]
    fn test_missing_cumulative_column() {
        let csv = "date,trade_pnl\n2024-01-02,10\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected missing column");
        };
        assert!(err.to_string().contains("cumulative_pnl"));
    }

    #[test]
    fn test_missing_date_column() {
        let csv = "trade_pnl,cumulative_pnl\n10,10\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected missing column");
        };
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_derive_cumulative() {
        let config = InputConfig {
            derive_cumulative: true,
            cumulative_base: 1000.0,
            ..InputConfig::default()
        };
        let csv = "date,trade_pnl\n2024-01-02,10\n2024-01-03,-30\n2024-01-04,5\n";
        let Ok(dataset) = read(csv, &config) else {
            panic!("CSV should load without cumulative column");
        };
        assert_eq!(dataset.cumulative(), &[1010.0, 980.0, 985.0]);
    }

    #[test]
    fn test_custom_column_names() {
        let config = InputConfig {
            pnl_column: "pnl".to_string(),
            cumulative_column: "equity".to_string(),
            date_column: "day".to_string(),
            ..InputConfig::default()
        };
        let csv = "day,pnl,equity\n2024-01-02,1,101\n";
        let Ok(dataset) = read(csv, &config) else {
            panic!("CSV should load with custom names");
        };
        assert_eq!(dataset.cumulative(), &[101.0]);
    }

    #[test]
    fn test_invalid_value_reports_row() {
        let csv = "date,trade_pnl,cumulative_pnl\n\
                   2024-01-02,1,1\n\
                   2024-01-03,abc,2\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected invalid value");
        };
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert!(matches!(err, RiskError::InvalidValue { row: 2, .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let csv = "date,trade_pnl,cumulative_pnl\n2024-01-02,NaN,1\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected invalid value");
        };
        assert_eq!(err.code(), ErrorCode::InvalidValue);

        let csv = "date,trade_pnl,cumulative_pnl\n2024-01-02,1,inf\n";
        assert!(read(csv, &InputConfig::default()).is_err());
    }

    #[test]
    fn test_ragged_rows_are_csv_errors() {
        let csv = "date,trade_pnl,cumulative_pnl\n2024-01-02,1\n";
        let Err(err) = read(csv, &InputConfig::default()) else {
            panic!("expected CSV error");
        };
        assert_eq!(err.code(), ErrorCode::CsvError);
    }

    #[test]
    fn test_header_only_is_empty() {
        let Ok(dataset) = read("date,trade_pnl,cumulative_pnl\n", &InputConfig::default()) else {
            panic!("header-only CSV should load");
        };
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_first_out_of_order() {
        let dates: Vec<String> = ["2024-01-02", "2024-01-05", "2024-01-03"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(first_out_of_order(&dates), Some(3));

        let sorted: Vec<String> = ["2024-01-02", "2024-01-02T10:00:00Z", "2024-01-03"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(first_out_of_order(&sorted), None);

        let opaque = vec!["t1".to_string(), "t0".to_string()];
        assert_eq!(first_out_of_order(&opaque), None);
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "date,trade_pnl,cumulative_pnl").unwrap();
        writeln!(file, "2024-01-01,100.5,100.5").unwrap();
        writeln!(file, "2024-01-02,1.2,101.7").unwrap();

        let dataset = load_csv(file.path(), &InputConfig::default()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!((dataset.cumulative()[1] - 101.7).abs() < 1e-12);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_csv(Path::new("/nonexistent/trades.csv"), &InputConfig::default())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::IoError);
    }
}
