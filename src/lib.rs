//! JavaScript bindings for the `shapes2d` intersection engine.
//!
//! Shapes cross the boundary as JSON documents tagged by `"kind"`. Each query has a
//! plain variant that falls back to an empty/false result and a `_res` variant that
//! returns `{ok, value}` or `{ok: false, error: {code, message, data}}`.

mod api;
mod error;
mod interop;

pub use api::*;
