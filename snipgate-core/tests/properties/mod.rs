//! Property-based tests for Snipgate core library

mod ordering_tests;
mod trigger_tests;
