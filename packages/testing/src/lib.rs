#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing, benchmarks and examples in the `dyn_array` workspace.
//!
//! The helpers observe element lifecycles without any process-wide state: each scenario creates
//! its own [`LifecycleProbe`] and hands it to every [`Tracked`] element it builds.

mod probe;
mod tracked;

pub use probe::*;
pub use tracked::*;
