//! Linter configuration.
//!
//! Settings are loaded once per run from TOML. Validation is strict and
//! fatal: unknown options and wrongly typed values abort the run before any
//! traversal begins.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::rules::nesting::AllowedPositions;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LinterSettings {
    pub nesting: NestingSettings,
    pub unreachable: UnreachableSettings,
}

impl Default for LinterSettings {
    fn default() -> Self {
        Self {
            nesting: NestingSettings::default(),
            unreachable: UnreachableSettings::default(),
        }
    }
}

impl LinterSettings {
    /// Reads settings from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&contents)?;
        debug!("loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }
}

impl fmt::Display for LinterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.nesting, self.unreachable)
    }
}

/// Which slots of a ternary may hold another ternary, and how deep a chain
/// may nest.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NestingSettings {
    pub test: bool,
    pub consequent: bool,
    pub alternate: bool,
    /// Maximum nesting depth below a chain root; unset means unbounded.
    /// `0` permits only non-nested ternaries.
    pub depth: Option<u32>,
}

impl Default for NestingSettings {
    fn default() -> Self {
        Self {
            test: false,
            consequent: true,
            alternate: true,
            depth: None,
        }
    }
}

impl NestingSettings {
    pub(crate) fn allowed_positions(&self) -> AllowedPositions {
        let mut positions = AllowedPositions::empty();
        positions.set(AllowedPositions::TEST, self.test);
        positions.set(AllowedPositions::CONSEQUENT, self.consequent);
        positions.set(AllowedPositions::ALTERNATE, self.alternate);
        positions
    }
}

impl fmt::Display for NestingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nesting.test = {}", self.test)?;
        writeln!(f, "nesting.consequent = {}", self.consequent)?;
        writeln!(f, "nesting.alternate = {}", self.alternate)?;
        match self.depth {
            Some(depth) => writeln!(f, "nesting.depth = {depth}"),
            None => writeln!(f, "nesting.depth = unbounded"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct UnreachableSettings {
    /// When `false`, a condition that shares a disjunct with an earlier
    /// OR-combination is reported even if it is not fully subsumed.
    pub allow_duplicate_or_conditions: bool,
}

impl Default for UnreachableSettings {
    fn default() -> Self {
        Self {
            allow_duplicate_or_conditions: true,
        }
    }
}

impl fmt::Display for UnreachableSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "unreachable.allow-duplicate-or-conditions = {}",
            self.allow_duplicate_or_conditions
        )
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read configuration file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
