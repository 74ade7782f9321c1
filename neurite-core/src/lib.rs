//! Stochastic growth of stylized 3-D neuron morphologies.
//!
//! Main components:
//! - [`vector`] — normalization, normal draws and spacing helpers.
//! - [`noise`] — transverse and isotropic heading perturbation.
//! - [`trunk`] — unbranched persistent random walks.
//! - [`branch`] — random walks that shed branch seeds.
//! - [`tree`] — depth-limited recursive branch expansion.
//! - [`patterns`] — dense, pyramidal, bundle and prunable neurons.
//! - [`prune`] — coarse prefix pruning of polyline collections.
//! - [`figure`] — the seeded four-panel generation pass.
//! - [`geometry`] — the output container and summaries.
//! - [`config`] — growth parameters and their defaults.
//! - [`error`] — input validation errors.
//! - [`types`] — shared point, polyline and seed types.
//!
//! Randomness is never global: every grower takes the generator as an
//! argument and consumes it in depth-first call order.

pub mod branch;
pub mod config;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod noise;
pub mod patterns;
pub mod prune;
pub mod tree;
pub mod trunk;
pub mod types;
pub mod vector;

pub use error::GrowthError;
pub use geometry::NeuronGeometry;
