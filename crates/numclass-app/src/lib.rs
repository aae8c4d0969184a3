//! Shared library module for the numclass app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod cli;
pub mod form;
pub mod version;
