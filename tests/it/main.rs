//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (camera, snap, layout, connections)
//! - integration: Full pointer-session workflows through the engine

mod helpers;
mod integration;
mod unit;
