//! Common utility modules for shared functionality across the codebase.

pub mod ref_normalizer;
pub mod string_utils;
