//! Command handlers for the walkstat CLI.

pub mod report;
