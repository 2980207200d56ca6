//! Rewrite rules, one module per node shape.

pub mod attribute;
pub mod component;
pub mod import;
