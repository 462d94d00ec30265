pub mod batch;
pub mod label;
pub mod qr;
pub mod table;
pub mod writer;

pub use crate::domain::model::{RunSummary, SerialRecord};
pub use crate::domain::ports::{ConfigProvider, ProgressReporter, Storage};
pub use crate::utils::error::Result;
