//! Built-in output formats

pub mod html;
pub mod json;
pub mod plain;
pub mod tag;
