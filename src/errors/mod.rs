//! Error types and error handling for the front end.
//!
//! This module defines the single diagnostic type returned by every
//! stage of the pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for scanning, parsing and type checking
//! - Error names and suggestions for display

pub mod errors;
