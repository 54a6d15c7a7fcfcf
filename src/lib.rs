//! AHP Decision - Multi-criteria decision support
//!
//! This crate implements the Analytic Hierarchy Process: criterion weights
//! from pairwise judgments (Saaty) or from value dispersion (Gaussian),
//! aggregated into a ranking of alternatives.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
