use crate::{Error, Vector3D};

use super::{Site, Structure, DistanceMatrix};

/// An ordered, read-only set of sites on which neighbor searches run.
///
/// The index of a site in the set is the only identity used to refer to it:
/// neighbor lists report indices into this set. Positions are read once from
/// the sites when the set is created.
///
/// A `PointSet` can either own its sites (`PointSet<SimpleSite>`) or borrow
/// them from another structure (`PointSet<&SimpleSite>`, created with
/// [`PointSet::from_structure`]).
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<S> {
    sites: Vec<S>,
    positions: Vec<Vector3D>,
}

impl<S: Site> PointSet<S> {
    /// Create a new `PointSet` containing the given `sites`, in order
    pub fn new(sites: Vec<S>) -> PointSet<S> {
        let positions = sites.iter().map(Site::position).collect();
        PointSet {
            sites: sites,
            positions: positions,
        }
    }

    /// Get the number of sites in this set
    pub fn size(&self) -> usize {
        self.sites.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Get all the sites in this set
    pub fn sites(&self) -> &[S] {
        &self.sites
    }

    /// Get the site at the given `index`, if it exists
    pub fn site(&self, index: usize) -> Option<&S> {
        self.sites.get(index)
    }

    /// Get the positions of all the sites in this set
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Compute the full matrix of distances between all pairs of sites
    pub fn distance_matrix(&self) -> Result<DistanceMatrix, Error> {
        DistanceMatrix::new(&self.positions)
    }
}

impl<'a, S: Site> PointSet<&'a S> {
    /// Create a `PointSet` referencing all the sites of the given `structure`,
    /// in the same order. A structure without sites gives an empty set.
    pub fn from_structure<T>(structure: &'a T) -> PointSet<&'a S>
        where T: Structure<Site = S> + ?Sized
    {
        PointSet::new(structure.sites().iter().collect())
    }
}

impl<S: Site> From<Vec<S>> for PointSet<S> {
    fn from(sites: Vec<S>) -> PointSet<S> {
        PointSet::new(sites)
    }
}
