pub mod audit;
pub mod contrast;

pub use crate::domain::model::{AuditReport, PairReport};
pub use crate::domain::ports::{ReportSettings, Storage};
pub use crate::utils::error::Result;
