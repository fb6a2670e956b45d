use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key-value description of a resolved build, produced by detection.
///
/// Only `framework` and `outputDir` are read here. Missing keys read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanMeta(BTreeMap<String, String>);

impl PlanMeta {
    pub const FRAMEWORK: &'static str = "framework";
    pub const OUTPUT_DIR: &'static str = "outputDir";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn framework(&self) -> &str {
        self.get(Self::FRAMEWORK)
    }

    pub fn output_dir(&self) -> &str {
        self.get(Self::OUTPUT_DIR)
    }
}

impl<K, V> FromIterator<(K, V)> for PlanMeta
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Kind of build that produced the image handed to the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PlanType {
    /// Pure static build; files live under the static server root.
    Static,
    /// Node.js image whose build also emitted static files.
    Nodejs,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Nodejs => "nodejs",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "nodejs" => Ok(Self::Nodejs),
            other => Err(crate::Error::UnknownPlanType(other.to_owned())),
        }
    }
}

/// Routing artifact written next to the staged static tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub containerized: bool,
    pub routes: Vec<OutputRoute>,
}

/// A `src` pattern rewritten to `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRoute {
    pub src: String,
    pub dest: String,
}

impl OutputRoute {
    /// Rewrites every path to the root document.
    pub fn catch_all() -> Self {
        Self {
            src: ".*".to_owned(),
            dest: "/".to_owned(),
        }
    }
}
