//! Growth parameters.
//!
//! Every struct carries the stock values of the generator in its
//! [`Default`] impl. Pattern-level configs expose `validate`, which the
//! pattern functions call before drawing from the generator.

use crate::error::{
    GrowthError, check_magnitude, check_point, check_probability, check_shrink_fraction,
};
use glam::Vec3;

/// Step model for [`crate::trunk::grow_trunk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrunkParams {
    pub step: f32,
    pub sigma: f32,
}

impl Default for TrunkParams {
    fn default() -> Self {
        Self {
            step: 1.6,
            sigma: 0.02,
        }
    }
}

impl TrunkParams {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_magnitude("trunk step", self.step)?;
        check_magnitude("trunk sigma", self.sigma)
    }
}

/// Step model and spawning for [`crate::branch::grow_branch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchParams {
    pub step: f32,
    pub angle_std: f32,
    /// Per-step chance of emitting a seed.
    pub branch_prob: f32,
    /// Extra isotropic noise baked into a seed's direction.
    pub seed_jitter: f32,
    /// Share of the branch's original step budget handed to each seed.
    pub seed_budget_fraction: f32,
}

impl Default for BranchParams {
    fn default() -> Self {
        Self {
            step: 1.2,
            angle_std: 0.22,
            branch_prob: 0.06,
            seed_jitter: 0.4,
            seed_budget_fraction: 0.55,
        }
    }
}

impl BranchParams {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_magnitude("branch step", self.step)?;
        check_magnitude("branch angle_std", self.angle_std)?;
        check_probability("branch_prob", self.branch_prob)?;
        check_magnitude("seed_jitter", self.seed_jitter)?;
        check_shrink_fraction("seed_budget_fraction", self.seed_budget_fraction)
    }
}

/// Settings for [`crate::tree::expand_branch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpandParams {
    /// Branch model used at every level; tuned denser than the plain
    /// [`BranchParams`] defaults.
    pub branch: BranchParams,
    /// Seeds followed per branch. Later seeds are discarded.
    pub max_children: usize,
    /// Budgets below this end the recursion.
    pub min_steps: usize,
    /// Isotropic noise applied to a seed's direction on entry.
    pub entry_jitter: f32,
}

impl Default for ExpandParams {
    fn default() -> Self {
        Self {
            branch: BranchParams {
                angle_std: 0.24,
                branch_prob: 0.07,
                ..BranchParams::default()
            },
            max_children: 2,
            min_steps: 5,
            entry_jitter: 0.25,
        }
    }
}

impl ExpandParams {
    pub fn validate(&self) -> Result<(), GrowthError> {
        self.branch.validate()?;
        check_magnitude("entry_jitter", self.entry_jitter)
    }
}

/// One richly branching structure: `branch_count` trees from a shared origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DenseConfig {
    pub branch_count: usize,
    pub steps: usize,
    pub depth: usize,
    pub expand: ExpandParams,
}

impl Default for DenseConfig {
    fn default() -> Self {
        Self {
            branch_count: 10,
            steps: 90,
            depth: 3,
            expand: ExpandParams::default(),
        }
    }
}

impl DenseConfig {
    pub fn validate(&self) -> Result<(), GrowthError> {
        self.expand.validate()
    }
}

/// Trunk with a distal tuft plus basal branches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PyramidalConfig {
    pub trunk_heading: Vec3,
    pub trunk_steps: usize,
    pub trunk: TrunkParams,
    /// Number of trailing trunk points eligible for tuft branches.
    pub tuft_window: usize,
    /// Every `tuft_stride`-th point of the window starts a tuft branch.
    pub tuft_stride: usize,
    pub tuft_jitter: f32,
    pub tuft_steps: usize,
    pub tuft_depth: usize,
    pub basal_count: usize,
    /// Fixed y component of each basal heading before normalization.
    pub basal_drop: f32,
    pub basal_steps: usize,
    pub basal_depth: usize,
    pub expand: ExpandParams,
}

impl Default for PyramidalConfig {
    fn default() -> Self {
        Self {
            trunk_heading: Vec3::Y,
            trunk_steps: 140,
            trunk: TrunkParams::default(),
            tuft_window: 90,
            tuft_stride: 10,
            tuft_jitter: 0.15,
            tuft_steps: 50,
            tuft_depth: 3,
            basal_count: 5,
            basal_drop: -0.4,
            basal_steps: 70,
            basal_depth: 3,
            expand: ExpandParams::default(),
        }
    }
}

impl PyramidalConfig {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_point(self.trunk_heading)?;
        self.trunk.validate()?;
        if self.tuft_stride == 0 {
            return Err(GrowthError::InvalidParameter {
                name: "tuft_stride",
                value: 0.0,
            });
        }
        check_magnitude("tuft_jitter", self.tuft_jitter)?;
        if !self.basal_drop.is_finite() {
            return Err(GrowthError::InvalidParameter {
                name: "basal_drop",
                value: self.basal_drop,
            });
        }
        self.expand.validate()
    }
}

/// Roughly parallel trunks started along the y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BundleConfig {
    pub count: usize,
    pub x: f32,
    pub z: f32,
    pub y_min: f32,
    pub y_max: f32,
    /// Nominal heading shared by all trunks before jitter.
    pub heading: Vec3,
    pub lateral_jitter: f32,
    pub vertical_jitter: f32,
    pub steps: usize,
    pub trunk: TrunkParams,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            count: 7,
            x: 180.0,
            z: 200.0,
            y_min: 140.0,
            y_max: 320.0,
            heading: Vec3::new(1.0, 0.0, -0.25),
            lateral_jitter: 0.15,
            vertical_jitter: 0.1,
            steps: 95,
            trunk: TrunkParams {
                step: 1.7,
                sigma: 0.01,
            },
        }
    }
}

impl BundleConfig {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_point(Vec3::new(self.x, self.y_min, self.z))?;
        check_point(Vec3::new(self.x, self.y_max, self.z))?;
        if self.y_min > self.y_max {
            return Err(GrowthError::InvalidBounds {
                min: self.y_min,
                max: self.y_max,
            });
        }
        check_point(self.heading)?;
        check_magnitude("lateral_jitter", self.lateral_jitter)?;
        check_magnitude("vertical_jitter", self.vertical_jitter)?;
        self.trunk.validate()
    }
}

/// A tree grown for before/after pruning comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PruningConfig {
    pub origin: Vec3,
    pub branch_count: usize,
    pub steps: usize,
    pub depth: usize,
    pub keep_fraction: f32,
    pub expand: ExpandParams,
}

impl Default for PruningConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::splat(260.0),
            branch_count: 6,
            steps: 70,
            depth: 3,
            keep_fraction: 0.4,
            expand: ExpandParams::default(),
        }
    }
}

impl PruningConfig {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_point(self.origin)?;
        check_probability("keep_fraction", self.keep_fraction)?;
        self.expand.validate()
    }
}

/// The full four-panel generation pass of [`crate::figure::Figure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureConfig {
    pub seed: u64,
    pub neuron_count: usize,
    pub row_x_min: f32,
    pub row_x_max: f32,
    pub row_y: f32,
    pub pyramidal: PyramidalConfig,
    pub dense: DenseConfig,
    pub bundle: BundleConfig,
    pub pruning: PruningConfig,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            seed: 4,
            neuron_count: 8,
            row_x_min: 40.0,
            row_x_max: 520.0,
            row_y: 40.0,
            pyramidal: PyramidalConfig::default(),
            dense: DenseConfig::default(),
            bundle: BundleConfig::default(),
            pruning: PruningConfig::default(),
        }
    }
}

impl FigureConfig {
    pub fn validate(&self) -> Result<(), GrowthError> {
        check_point(Vec3::new(self.row_x_min, self.row_y, 0.0))?;
        check_point(Vec3::new(self.row_x_max, self.row_y, 0.0))?;
        if self.row_x_min > self.row_x_max {
            return Err(GrowthError::InvalidBounds {
                min: self.row_x_min,
                max: self.row_x_max,
            });
        }
        self.pyramidal.validate()?;
        self.dense.validate()?;
        self.bundle.validate()?;
        self.pruning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(FigureConfig::default().validate().is_ok());
    }

    #[test]
    fn expand_defaults_are_denser_than_plain_branches() {
        let plain = BranchParams::default();
        let expand = ExpandParams::default();
        assert_eq!(expand.branch.branch_prob, 0.07);
        assert_eq!(expand.branch.angle_std, 0.24);
        assert_eq!(expand.branch.step, plain.step);
        assert_eq!(expand.max_children, 2);
        assert_eq!(expand.min_steps, 5);
    }

    #[test]
    fn negative_step_is_rejected() {
        let mut cfg = BundleConfig::default();
        cfg.trunk.step = -1.7;
        assert_eq!(
            cfg.validate(),
            Err(GrowthError::InvalidParameter {
                name: "trunk step",
                value: -1.7
            })
        );
    }

    #[test]
    fn inverted_bundle_bounds_are_rejected() {
        let mut cfg = BundleConfig::default();
        cfg.y_min = 400.0;
        assert!(matches!(
            cfg.validate(),
            Err(GrowthError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        let mut cfg = DenseConfig::default();
        cfg.expand.branch.branch_prob = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = PruningConfig::default();
        cfg.keep_fraction = -0.1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn seed_budget_fraction_must_shrink() {
        let mut cfg = ExpandParams::default();
        cfg.branch.seed_budget_fraction = 1.0;
        assert_eq!(
            cfg.validate(),
            Err(GrowthError::InvalidFraction {
                name: "seed_budget_fraction",
                value: 1.0
            })
        );

        cfg.branch.seed_budget_fraction = 0.999;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_tuft_stride_is_rejected() {
        let mut cfg = PyramidalConfig::default();
        cfg.tuft_stride = 0;
        assert!(cfg.validate().is_err());
    }
}
