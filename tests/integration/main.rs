//! Integration test harness for the walkstat binary.

mod helpers;
mod report_test;
