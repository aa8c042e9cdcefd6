//! Report presentation layer
//!
//! This module handles:
//! - Rendering tabular reports as aligned plain text or GitHub markdown
//!
//! Rendering is a pure function of headers, rows and [`TableFormat`]; callers
//! decide where the text goes.

pub mod table;

pub use table::{TableFormat, render};
