//! Trade P&L input: the in-memory dataset and its CSV loader.

mod dataset;
mod loader;

pub use dataset::TradeDataset;
pub use loader::{load_csv, read_csv};
