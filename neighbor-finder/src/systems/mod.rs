use crate::Vector3D;

mod simple_structure;
pub use self::simple_structure::{SimpleSite, SimpleStructure};

mod point_set;
pub use self::point_set::PointSet;

mod distances;
pub use self::distances::DistanceMatrix;

#[cfg(test)]
pub(crate) mod test_utils;

/// A `Site` is anything located at a single point in 3D space. Sites usually
/// carry additional data (atomic type, charge, ...) which is never used by the
/// neighbor search: only the position matters.
pub trait Site {
    /// Get the Cartesian position of this site
    fn position(&self) -> Vector3D;
}

impl<T: Site + ?Sized> Site for &T {
    fn position(&self) -> Vector3D {
        (**self).position()
    }
}

/// A bare position is a site without any additional data
impl Site for Vector3D {
    fn position(&self) -> Vector3D {
        *self
    }
}

/// A `Structure` is an external representation of a molecule or another
/// finite set of atoms, from which a [`PointSet`] can be built with
/// [`PointSet::from_structure`].
pub trait Structure {
    /// Type of the sites in this structure
    type Site: Site;

    /// Get all the sites in this structure. The order of the sites defines
    /// the index used to refer to them in neighbor lists.
    fn sites(&self) -> &[Self::Site];
}
