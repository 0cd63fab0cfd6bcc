//! Reusable observers for the placeline simulation.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across the placeline solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasEstimate`], [`CanStopEarly`], [`CanCancel`])
//! - [`progress`] — A counting progress sink; rendering belongs to the
//!   caller-supplied closure
//!
//! [`Observer`]: placeline_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanCancel`]: traits::CanCancel

pub mod progress;
pub mod traits;

pub use progress::Progress;
