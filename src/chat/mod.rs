//! Submission flow shared by both assistant panels.
//!
//! DESIGN
//! ======
//! `submit` is one state machine (`idle` -> `submitting` -> `idle`) that is
//! generic over an [`assistant::Assistant`]. Each assistant only supplies its
//! endpoint, how raw form controls become a request body, and how a response
//! is summarized under the answer. `filters` holds the normalization rules
//! the form snapshots go through.

pub mod assistant;
pub mod filters;
pub mod submit;
