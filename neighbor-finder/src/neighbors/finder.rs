use rayon::prelude::*;

use crate::{Error, PointSet, Site};
use super::NeighborList;

/// Options controlling which fields are included in each
/// [`NeighborRecord`](super::NeighborRecord). The distance to the neighbor is
/// always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct NeighborOptions {
    /// Include the index of the neighbor in the point set
    pub include_index: bool,
    /// Include a reference to the neighbor site itself
    pub include_site: bool,
    /// Include the periodic image of the neighbor. Since only non-periodic
    /// sets of sites are supported, this is always `[0, 0, 0]`.
    pub include_image: bool,
}

impl Default for NeighborOptions {
    fn default() -> NeighborOptions {
        NeighborOptions {
            include_index: true,
            include_site: false,
            include_image: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// This searches all neighbors within a spherical cutoff around each site of
/// a finite (non-periodic) point set, using the dense matrix of all pairwise
/// distances.
///
/// Two sites are neighbors if their distance `d` satisfies `1e-8 < d <=
/// cutoff`: a site is never its own neighbor, and sites sitting on top of one
/// another are ignored. Neighbors are reported sorted by index.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NeighborFinder {
    /// Spherical cutoff to use to determine if two sites are neighbors. This
    /// must be a finite, non-negative number.
    pub cutoff: f64,
    /// Include the index of the neighbor in each record
    #[serde(default = "default_true")]
    pub include_index: bool,
    /// Include the neighbor site itself in each record
    #[serde(default)]
    pub include_site: bool,
    /// Include the (always zero) periodic image of the neighbor in each
    /// record
    #[serde(default = "default_true")]
    pub include_image: bool,
}

impl NeighborFinder {
    /// Create a new `NeighborFinder` with the given `cutoff` and default
    /// options
    pub fn new(cutoff: f64) -> Result<NeighborFinder, Error> {
        NeighborFinder::with_options(cutoff, NeighborOptions::default())
    }

    /// Create a new `NeighborFinder` with the given `cutoff` and `options`
    pub fn with_options(cutoff: f64, options: NeighborOptions) -> Result<NeighborFinder, Error> {
        super::check_cutoff(cutoff)?;
        Ok(NeighborFinder {
            cutoff: cutoff,
            include_index: options.include_index,
            include_site: options.include_site,
            include_image: options.include_image,
        })
    }

    /// Create a new `NeighborFinder` from its JSON representation, e.g.
    /// `{"cutoff": 3.5, "include_image": false}`. All options are optional
    /// and take their default value if missing.
    pub fn from_json(parameters: &str) -> Result<NeighborFinder, Error> {
        let finder = serde_json::from_str::<NeighborFinder>(parameters)?;
        super::check_cutoff(finder.cutoff)?;
        return Ok(finder);
    }

    /// Get the JSON representation of this `NeighborFinder`
    pub fn parameters(&self) -> String {
        serde_json::to_string(self).expect("failed to serialize to JSON")
    }

    /// Get the record options for this `NeighborFinder`
    pub fn options(&self) -> NeighborOptions {
        NeighborOptions {
            include_index: self.include_index,
            include_site: self.include_site,
            include_image: self.include_image,
        }
    }

    /// Compute the neighbor list of all sites in `points`
    pub fn compute<'a, S: Site>(&self, points: &'a PointSet<S>) -> Result<NeighborList<'a, S>, Error> {
        points.neighbors(self.cutoff, self.options())
    }

    /// Compute the neighbor lists of multiple independent point sets in
    /// parallel. The lists are returned in the same order as `point_sets`;
    /// if any computation fails, the error for the first failing point set is
    /// returned.
    pub fn compute_all<'a, S>(&self, point_sets: &'a [PointSet<S>]) -> Result<Vec<NeighborList<'a, S>>, Error>
        where S: Site + Sync
    {
        let results = point_sets.par_iter()
            .map(|points| self.compute(points))
            .collect::<Vec<_>>();

        return results.into_iter().collect();
    }
}
