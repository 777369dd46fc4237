//! Conversion features
//!
//! `unit_converter` owns the registry and the numeric engine.
//! `natural_language` sits on top of it and turns free text into a conversion.

pub mod unit_converter;
pub mod natural_language;
