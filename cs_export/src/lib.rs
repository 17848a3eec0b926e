//! Internal modules for the courtside exporter.
//!
//! This library provides configuration loading, input documents, and table
//! rendering used by the cs_export binary.

pub mod config;
pub mod input;
pub mod output;
