//! Record Status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use sqlx::{Row, postgres::PgRow};
use thiserror::Error;

/// Lifecycle state shared by departments, employees and addresses.
///
/// Stored as a constrained `TEXT` column. Only [`RecordStatus::Active`]
/// records are visible to read operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    /// Live record.
    Active,

    /// Disabled but not deleted.
    Inactive,

    /// Soft-deleted.
    Deleted,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown record status: {0}")]
pub struct UnknownRecordStatus(String);

impl RecordStatus {
    /// Column value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deleted => "deleted",
        }
    }

    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = UnknownRecordStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "deleted" => Ok(Self::Deleted),
            other => Err(UnknownRecordStatus(other.to_string())),
        }
    }
}

/// Decode a status column from a row.
pub(crate) fn try_get_status(row: &PgRow, column: &str) -> sqlx::Result<RecordStatus> {
    row.try_get::<String, _>(column)?
        .parse()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}
