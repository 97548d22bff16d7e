//! Cutoff-based neighbor search on finite point sets.
//!
//! The search computes the dense matrix of all pairwise distances, and then
//! keeps all pairs with a distance in `(MIN_NEIGHBOR_DISTANCE, cutoff]`. This
//! is quadratic in the number of sites, which is fine for molecules with up
//! to a few hundred atoms.
//!
//! Periodic boundary conditions are not supported: the image attached to
//! neighbor records is always [`ZERO_IMAGE`], even if the sites come from a
//! periodic crystal.

use log::{debug, warn};
use ndarray::ArrayView1;

use crate::{Error, DistanceMatrix, PointSet, Site};

mod record;
pub use self::record::{NeighborRecord, NeighborList, ZERO_IMAGE};

mod finder;
pub use self::finder::{NeighborFinder, NeighborOptions};

/// Sites closer than this distance (in the same units as the positions) are
/// never considered neighbors. This excludes a site from its own neighbors,
/// as well as duplicated sites.
pub const MIN_NEIGHBOR_DISTANCE: f64 = 1e-8;

/// Compute the neighbors of all sites in `points` within the given `cutoff`.
///
/// This is the same as [`PointSet::neighbors`].
pub fn neighbors<S: Site>(points: &PointSet<S>, cutoff: f64, options: NeighborOptions) -> Result<NeighborList<'_, S>, Error> {
    points.neighbors(cutoff, options)
}

impl<S: Site> PointSet<S> {
    /// Compute the neighbors of all sites in this set within the given
    /// `cutoff`. Site `j` is a neighbor of site `i` if `1e-8 < d_ij <= cutoff`.
    ///
    /// The cutoff must be finite and non-negative, otherwise this returns
    /// `Error::InvalidParameter`. If any position is not finite, the whole
    /// computation fails with `Error::MalformedInput`.
    pub fn neighbors(&self, cutoff: f64, options: NeighborOptions) -> Result<NeighborList<'_, S>, Error> {
        check_cutoff(cutoff)?;

        time_graph::spanned!("NeighborList", {
            debug!("searching neighbors of {} sites with cutoff {}", self.size(), cutoff);

            let distances = self.distance_matrix()?;
            let rows = (0..self.size())
                .map(|center| filter_row(self.sites(), center, distances.row(center), cutoff, options))
                .collect();

            Ok(NeighborList { rows })
        })
    }

    /// Compute the neighbors of the single site at index `center` within the
    /// given `cutoff`. The result is the same as `self.neighbors(cutoff,
    /// options)?[center]`, but only the distances involving `center` are
    /// computed.
    pub fn neighbors_of(&self, center: usize, cutoff: f64, options: NeighborOptions) -> Result<Vec<NeighborRecord<'_, S>>, Error> {
        check_cutoff(cutoff)?;

        time_graph::spanned!("NeighborList::single_site", {
            debug!("searching neighbors of site {} out of {} with cutoff {}", center, self.size(), cutoff);

            let distances = DistanceMatrix::row_for(self.positions(), center)?;
            Ok(filter_row(self.sites(), center, distances.view(), cutoff, options))
        })
    }
}

fn check_cutoff(cutoff: f64) -> Result<(), Error> {
    if !cutoff.is_finite() || cutoff < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "cutoff must be a finite, non-negative number, got {}", cutoff
        )));
    }
    return Ok(());
}

/// Select the neighbors of `center` from its row of the distance matrix, and
/// create the corresponding records
fn filter_row<'a, S>(
    sites: &'a [S],
    center: usize,
    distances: ArrayView1<'_, f64>,
    cutoff: f64,
    options: NeighborOptions,
) -> Vec<NeighborRecord<'a, S>> {
    let mut neighbors = Vec::new();
    for (index, &distance) in distances.iter().enumerate() {
        if distance <= MIN_NEIGHBOR_DISTANCE {
            // each pair is seen from both sides, only warn once
            if center < index {
                warn!(
                    "sites {} and {} are very close to one another ({} A), they will not be neighbors",
                    center, index, distance
                );
            }
            continue;
        }

        if distance > cutoff {
            continue;
        }

        neighbors.push(NeighborRecord {
            site: if options.include_site { Some(&sites[index]) } else { None },
            distance: distance,
            index: if options.include_index { Some(index) } else { None },
            image: if options.include_image { Some(ZERO_IMAGE) } else { None },
        });
    }

    return neighbors;
}
