//! Single-component unit tests.

mod connection_tests;
mod scene_tests;
mod types_tests;
