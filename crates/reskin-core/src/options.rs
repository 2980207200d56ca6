//! Options passed through to the syntax backend.

use std::path::Path;

/// Source language of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    JavaScript,
    #[default]
    TypeScript,
}

impl Dialect {
    /// Pick the dialect from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match extension(path) {
            Some("ts" | "tsx" | "mts" | "cts") => Self::TypeScript,
            _ => Self::JavaScript,
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Parser configuration for one module.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub dialect: Dialect,
    /// Whether `<` may open a JSX element. Off for plain `.ts` modules,
    /// where it starts a type assertion or a generic arrow instead.
    pub jsx: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::TypeScript,
            jsx: true,
        }
    }
}

impl ParserOptions {
    pub fn for_path(path: &Path) -> Self {
        Self {
            dialect: Dialect::from_path(path),
            jsx: !matches!(extension(path), Some("ts" | "mts" | "cts")),
        }
    }
}
