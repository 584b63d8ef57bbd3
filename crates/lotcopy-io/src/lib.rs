pub mod backends;
pub mod error;
pub mod traits;

#[cfg(feature = "calamine")]
pub use backends::CalamineAdapter;
#[cfg(feature = "umya")]
pub use backends::{UmyaAdapter, UmyaSheet};
pub use error::IoError;
pub use traits::{SheetSelector, SpreadsheetReader, SpreadsheetWriter, read_selected_sheet};

// Re-export for convenience
pub use lotcopy_common::{CellValue, GridSheet, Sheet, SheetMut};
