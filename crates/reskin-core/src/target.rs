//! Output targets.

use std::fmt;
use std::str::FromStr;

use crate::strategy::{self, Strategy};

/// Component library a module is rewritten for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryTarget {
    /// Leave the module as it is
    React,
    Preact,
    Vue2,
    Vue3,
}

impl LibraryTarget {
    pub const ALL: [LibraryTarget; 4] = [Self::React, Self::Preact, Self::Vue2, Self::Vue3];

    /// The tag used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Preact => "preact",
            Self::Vue2 => "vue2",
            Self::Vue3 => "vue3",
        }
    }

    /// The rewrite strategy for this target.
    pub fn strategy(self) -> &'static Strategy {
        strategy::lookup(self)
    }
}

impl fmt::Display for LibraryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryTarget {
    type Err = UnsupportedTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| UnsupportedTarget(s.to_string()))
    }
}

/// A target tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported target '{0}' (expected one of: react, preact, vue2, vue3)")]
pub struct UnsupportedTarget(pub String);
