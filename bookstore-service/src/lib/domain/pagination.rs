use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("skip must not be negative, got {0}")]
    NegativeSkip(i64),

    #[error("limit must be between 1 and {max}, got {actual}")]
    LimitOutOfRange { max: i64, actual: i64 },
}

/// Offset pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    pub const MAX_LIMIT: i64 = 100;

    /// Build a window from optional request values.
    ///
    /// # Arguments
    /// * `skip` - Rows to skip (defaults to 0)
    /// * `limit` - Rows to return (defaults to `default_limit`)
    /// * `default_limit` - Endpoint-specific default
    ///
    /// # Errors
    /// * `NegativeSkip` - `skip` is below zero
    /// * `LimitOutOfRange` - `limit` is outside `1..=MAX_LIMIT`
    pub fn new(
        skip: Option<i64>,
        limit: Option<i64>,
        default_limit: i64,
    ) -> Result<Self, PageError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(default_limit);

        if skip < 0 {
            return Err(PageError::NegativeSkip(skip));
        }
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PageError::LimitOutOfRange {
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }

        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}
