//! # mutation-workbench
//!
//! `mutation-workbench` is an in-process mutation-testing harness organized
//! around:
//! - `harness::registry`: restorable rebinding of named target functions
//! - `harness::runner`: the substitute/execute/classify/restore protocol
//! - `harness::report`: kill-rate aggregation and rendering
//! - `fixtures`: bundled demo target modules with curated mutants
//!
//! A mutant is a deliberately altered implementation standing in for a
//! hypothetical bug. The harness swaps each mutant into a symbol table,
//! replays a fixed test suite against it, and classifies the mutant as
//! killed (some test failed or errored) or survived (every test passed).
//! Survivors point at coverage gaps in the suite.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod fixtures;
pub mod harness;
pub mod prelude;
