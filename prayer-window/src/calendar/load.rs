//! Reading calendar documents from disk.

use std::path::Path;

use tracing::debug;

use super::error::CalendarError;
use super::types::MonthlyCalendar;

impl MonthlyCalendar {
    /// Read and decode a calendar document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CalendarError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| CalendarError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let calendar = Self::from_json(&contents)?;
        debug!(path = %path.display(), days = calendar.len(), "Loaded calendar");
        Ok(calendar)
    }
}
