//! Command line front end for the lotto engine.
//!
//! [`cli`] wires configuration, the draw API and the weight store into a
//! [`lotto_combora::Session`]; [`terminal`] renders its state.

mod app;

pub use app::{cli, terminal};
