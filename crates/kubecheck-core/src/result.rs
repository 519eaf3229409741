use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::CheckConfig;
use crate::error::CheckError;

/// Health status, ordered by severity.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Critical,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Critical => "CRITICAL",
        }
    }

    /// Process exit code in the Nagios plugin convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warn => 1,
            Self::Critical => 2,
        }
    }

    /// Most severe status of the set, `Ok` when empty.
    pub fn worst(statuses: impl IntoIterator<Item = Status>) -> Status {
        statuses.into_iter().max().unwrap_or_default()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    pub status: Status,
    #[serde(default)]
    pub output: String,
}

impl CheckResult {
    /// Start an `Ok` result stamped with the check's identity.
    pub fn from_config(config: &CheckConfig) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            tags: config.tags.clone(),
            status: Status::Ok,
            output: String::new(),
        }
    }
}

/// Pretty-print a value as check output (2-space indent, field order as
/// declared by the type).
pub fn render_output<T: Serialize + ?Sized>(value: &T) -> Result<String, CheckError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Text describing a check and the options it accepts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckUsage {
    pub description: String,
    pub flags: String,
}

impl std::fmt::Display for CheckUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        write!(f, "{}", self.flags)
    }
}
