//! Core library for the `qpress` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, the pacing logic that turns a presses-per-minute target
//! into a fixed issuance cadence, the simulated press operation, and the
//! three scheduling strategies. The primary user-facing interface is the
//! `qpress` command-line application.
pub mod args;
pub mod error;
pub mod pacer;
pub mod press;
pub mod scheduler;
