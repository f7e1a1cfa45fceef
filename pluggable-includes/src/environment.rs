use crate::{LMS_TEMPLATE_INCLUDES_NAMESPACE, STUDIO_TEMPLATE_INCLUDES_NAMESPACE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The host application a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// The learner-facing site.
    Lms,
    /// The course authoring site.
    Studio,
}

impl Environment {
    /// The plugin namespace for this environment.
    pub fn namespace(self) -> &'static str {
        match self {
            Environment::Lms => LMS_TEMPLATE_INCLUDES_NAMESPACE,
            Environment::Studio => STUDIO_TEMPLATE_INCLUDES_NAMESPACE,
        }
    }

    /// The environment's name as written in templates.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Lms => "lms",
            Environment::Studio => "studio",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string names no known environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template environment: {0}")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lms" => Ok(Environment::Lms),
            "studio" => Ok(Environment::Studio),
            other => Err(UnknownEnvironment(other.to_owned())),
        }
    }
}
