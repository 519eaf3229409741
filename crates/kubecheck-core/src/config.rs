use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity and raw options of one configured check instance.
///
/// `argv[0]` is the program name; the remaining entries are the check's own
/// flags (e.g. `["deployment_status", "--warn", "0.75"]`).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub argv: Vec<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl CheckConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            argv: vec![name.clone()],
            name,
            tags: BTreeMap::new(),
        }
    }

    /// Append flags after the program name.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
