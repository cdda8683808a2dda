//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the sentinel normalizer finishes each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelMode {
    /// Replace null/empty/boolean markers; leave everything else as is.
    #[default]
    Basic,
    /// As `Basic`, then cast every surviving non-null value to text.
    ForceText,
}

/// How columns are distributed among the classifiers during fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipMode {
    /// Each classifier only sees columns no earlier classifier claimed.
    #[default]
    Exclusive,
    /// Each classifier re-probes every column of the previous stage's output.
    /// A column may be rewritten by more than one stage.
    Independent,
}

/// How classifiers render a blank cell in a claimed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullRendering {
    /// Per-type text sentinel: `""` for numeric and boolean columns,
    /// `" "` for date and string columns.
    #[default]
    Sentinel,
    /// Keep blank cells as [`tnorm_model::Cell::Null`].
    Missing,
}

/// Output representation of values in date columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRendering {
    /// `Cell::Text("YYYY-MM-DD")`.
    #[default]
    IsoText,
    /// `Cell::Date`.
    Value,
}

/// Case rule for the boolean classifier's `True`/`False` literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanCase {
    /// `true`, `TRUE` and `True` are all accepted, matching the sentinel patterns.
    #[default]
    Insensitive,
    /// Only `True` and `False` are accepted.
    Sensitive,
}

/// Options for [`crate::TypePipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub sentinel_mode: SentinelMode,
    pub ownership_mode: OwnershipMode,
    pub null_rendering: NullRendering,
    pub date_rendering: DateRendering,
    pub boolean_case: BooleanCase,
    /// When true, a column whose values all parse as floats is never
    /// offered to the string classifier. Off by default: the float probe is
    /// logged but does not decide fit.
    pub float_probe_excludes_strings: bool,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_sentinel_mode(mut self, mode: SentinelMode) -> Self {
        self.sentinel_mode = mode;
        self
    }

    #[must_use]
    pub fn with_ownership_mode(mut self, mode: OwnershipMode) -> Self {
        self.ownership_mode = mode;
        self
    }

    #[must_use]
    pub fn with_null_rendering(mut self, rendering: NullRendering) -> Self {
        self.null_rendering = rendering;
        self
    }

    #[must_use]
    pub fn with_date_rendering(mut self, rendering: DateRendering) -> Self {
        self.date_rendering = rendering;
        self
    }

    #[must_use]
    pub fn with_boolean_case(mut self, case: BooleanCase) -> Self {
        self.boolean_case = case;
        self
    }

    #[must_use]
    pub fn with_float_probe_excludes_strings(mut self, enable: bool) -> Self {
        self.float_probe_excludes_strings = enable;
        self
    }
}
