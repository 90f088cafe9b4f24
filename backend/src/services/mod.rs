//! Service layer: the deterministic KPI engine.
//!
//! Everything here is pure and synchronous. The HTTP layer calls into these
//! functions directly; there is no shared state to coordinate.

pub mod compare;
pub mod generator;
pub mod seed;


pub use compare::{compare, compare_raw, compute_delta, trend};
pub use generator::{pseudo_random, round_to, synthesize, synthesize_raw};
pub use seed::derive_seed;
