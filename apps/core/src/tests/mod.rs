//! Test Module
//!
//! Test suite for the EchoLearn backend.
//!
//! ## Test Categories
//! - `database_tests`: SQLite document store operations
//! - `recorder_tests`: best-effort interaction persistence and diagnostics against live and failing stores
//! - `api_tests`: HTTP endpoints exercised through the router


pub mod recorder_tests;
