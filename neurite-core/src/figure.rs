//! The full four-panel generation pass.
//!
//! A [`Figure`] is built from one generator seeded once, and the panels
//! are generated in a fixed order (A, B, C, D). Changing that order
//! changes which random draws each panel sees, so it is part of the
//! output's identity.

use crate::{
    config::FigureConfig,
    error::GrowthError,
    geometry::{NeuronGeometry, polyline_midpoint},
    patterns,
    prune::prune,
    types::Point3,
    vector::linspace,
};
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Geometry for every panel of the figure, ready for an external renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// A row of pyramidal neurons; anchors are their somas.
    pub row: NeuronGeometry,
    /// One dense tree at the origin.
    pub dense: NeuronGeometry,
    /// The trunk bundle; anchors are the trunk starts.
    pub bundle: NeuronGeometry,
    /// The point halfway along each bundle trunk.
    pub bundle_midpoints: Vec<Point3>,
    /// The prunable tree before pruning.
    pub full: NeuronGeometry,
    /// The same tree after pruning.
    pub pruned: NeuronGeometry,
}

impl Figure {
    /// Generates all panels from a generator seeded with `cfg.seed`.
    pub fn generate(cfg: &FigureConfig) -> Result<Self, GrowthError> {
        cfg.validate()?;
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let mut row = NeuronGeometry::default();
        for x in linspace(cfg.row_x_min, cfg.row_x_max, cfg.neuron_count) {
            let origin = Vec3::new(x, cfg.row_y, 0.0);
            row.extend(patterns::pyramidal(origin, &cfg.pyramidal, &mut rng)?);
        }

        let dense = patterns::dense_tree(Vec3::ZERO, &cfg.dense, &mut rng)?;

        let bundle = patterns::bundle(&cfg.bundle, &mut rng)?;
        let bundle_midpoints = bundle.polylines.iter().filter_map(polyline_midpoint).collect();

        let full = patterns::prunable_tree(&cfg.pruning, &mut rng)?;
        let pruned = NeuronGeometry::new(
            prune(&full.polylines, cfg.pruning.keep_fraction),
            full.anchors.clone(),
        );

        log::debug!(
            "[FIGURE] seed {}: row {}, dense {}, bundle {}, pruned {}/{} polylines",
            cfg.seed,
            row.len(),
            dense.len(),
            bundle.len(),
            pruned.len(),
            full.len()
        );

        Ok(Self {
            row,
            dense,
            bundle,
            bundle_midpoints,
            full,
            pruned,
        })
    }

    /// Panels in generation order, labelled as in the figure.
    pub fn panels(&self) -> [(&'static str, &NeuronGeometry); 5] {
        [
            ("A", &self.row),
            ("B", &self.dense),
            ("C", &self.bundle),
            ("D full", &self.full),
            ("D pruned", &self.pruned),
        ]
    }
}
