//! Shared query parameter types for API handlers.
//!
//! Values are taken as raw strings and validated in `camsvc_core::window`,
//! so that an unparsable value is reported (or defaulted) per parameter
//! instead of rejecting the whole query string.

use camsvc_core::error::CoreError;
use camsvc_core::window::{LookBack, Window};
use serde::Deserialize;

/// Offset/count window parameters (`?offset=&count=`).
///
/// `count` is required; `offset` falls back to zero.
#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    pub offset: Option<String>,
    pub count: Option<String>,
}

impl WindowParams {
    pub fn window(&self) -> Result<Window, CoreError> {
        Window::parse(self.offset.as_deref(), self.count.as_deref())
    }
}

/// Look-back interval parameters (`?days=&months=`).
#[derive(Debug, Default, Deserialize)]
pub struct LookBackParams {
    pub days: Option<String>,
    pub months: Option<String>,
}

impl LookBackParams {
    pub fn look_back(&self) -> LookBack {
        LookBack::parse(self.months.as_deref(), self.days.as_deref())
    }
}
