// src/lib.rs
//! Tooling around the boxtree layout engine: a demo scene and text/JSON
//! reports of laid-out trees, shared by the `boxtree-debug` binary and the
//! integration tests.

pub mod demo;
pub mod report;
