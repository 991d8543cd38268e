//! Core building blocks: filename convention parsing (`naming`) and
//! tale grouping/sorting (`grouping`). Consumed by the high-level `api` module.
pub mod grouping;
pub mod naming;
