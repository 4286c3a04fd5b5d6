//! Domain errors shared by the pure calendar and phrase modules.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("month {0} is out of range (expected 0-11)")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("{0} collection is empty")]
    EmptyCollection(&'static str),
}
