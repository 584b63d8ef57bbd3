pub mod address;
pub mod sheet;
pub mod value;

pub use address::*;
pub use sheet::*;
pub use value::*;
