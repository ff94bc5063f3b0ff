//! Time-boxed quiz session runner.
//!
//! Presents an ordered problem set, collects typed answers, enforces a single
//! session-wide time budget, and writes a timestamped result report. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (answer normalization, outcome
//!   types, the result ledger). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration, problem loading,
//!   report writing). Isolated to enable tempdir-based tests.
//!
//! Orchestration modules ([`session`], [`collect`], [`deadline`]) coordinate
//! core logic with I/O: the session runs one sequential control flow that
//! races each answer read against the single session deadline.

pub mod collect;
pub mod core;
pub mod deadline;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
