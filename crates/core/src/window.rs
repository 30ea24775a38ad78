//! Offset/count windows for list endpoints and look-back intervals for
//! aggregate queries.
//!
//! Query parameters arrive as raw strings so that the lenient and strict
//! parameters can be told apart: a bad `offset` falls back to zero, while a
//! missing or bad `count` rejects the request.

use crate::error::CoreError;

/// A validated `OFFSET`/`LIMIT` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: i64,
    pub count: i64,
}

impl Window {
    /// Build a window from raw `offset` and `count` query values.
    ///
    /// Values are parsed as-is: surrounding whitespace makes them unparsable.
    ///
    /// - `offset`: missing, unparsable or negative → `0`
    /// - `count`: missing, unparsable or negative → [`CoreError::Validation`]
    pub fn parse(offset: Option<&str>, count: Option<&str>) -> Result<Self, CoreError> {
        let offset = offset
            .and_then(|raw| raw.parse::<i32>().ok())
            .filter(|v| *v >= 0)
            .unwrap_or(0);

        let raw_count = count.unwrap_or_default();
        let count = raw_count.parse::<i32>().map_err(|e| {
            CoreError::Validation(format!(
                "request does not contain required parameter count: {e}"
            ))
        })?;
        if count < 0 {
            return Err(CoreError::Validation(format!(
                "request does not contain required parameter count: {count} is negative"
            )));
        }

        Ok(Self {
            offset: i64::from(offset),
            count: i64::from(count),
        })
    }
}

/// A look-back interval expressed in whole months and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookBack {
    pub months: i32,
    pub days: i32,
}

impl LookBack {
    /// Build an interval from raw `months` and `days` query values; anything
    /// missing or unparsable counts as zero.
    pub fn parse(months: Option<&str>, days: Option<&str>) -> Self {
        let lenient = |raw: Option<&str>| raw.and_then(|v| v.parse::<i32>().ok()).unwrap_or(0);
        Self {
            months: lenient(months),
            days: lenient(days),
        }
    }
}
