//! Locate the `Date` … `Somme` table of a reception sheet, append its rows to
//! a destination sheet and tag each appended row with the source's Code Lot.
//!
//! The merge core ([`bounds`], [`rows`], [`code_lot`], [`columns`],
//! [`merge`]) works on any [`Sheet`]/[`SheetMut`]; [`batch`] wires it to
//! calamine (sources) and umya (destination) and owns the single save.

pub mod batch;
pub mod bounds;
pub mod code_lot;
pub mod columns;
pub mod config;
pub mod error;
pub mod merge;
pub mod report;
pub mod rows;
pub mod scan;

pub use batch::{run_batch, run_batch_to};
pub use bounds::{TableBounds, locate};
pub use code_lot::{CodeLotLookup, resolve_code_lot};
pub use columns::ensure_code_lot_column;
pub use config::{CODE_LOT_LABEL, ConfigError, FOOTER_PREFIX, HEADER_TOKEN, MergeConfig};
pub use error::{BatchError, MergeError, SourceError};
pub use merge::{MergeOutcome, merge_one_source};
pub use report::{BatchReport, BatchStatus, FileError};
pub use rows::{DataRow, data_rows};

// Re-export for convenience
pub use lotcopy_common::{CellValue, GridSheet, Sheet, SheetMut};
pub use lotcopy_io::SheetSelector;
