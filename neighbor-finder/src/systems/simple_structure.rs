use crate::Vector3D;

use super::{Site, Structure};

/// A single atom, with an atomic type and a position
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimpleSite {
    /// Atomic type of this site. This is usually the atomic number, but does
    /// not have to be.
    #[serde(rename = "type")]
    pub atomic_type: i32,
    /// Cartesian position of this site
    pub position: Vector3D,
}

impl SimpleSite {
    pub fn new(atomic_type: i32, position: Vector3D) -> SimpleSite {
        SimpleSite { atomic_type, position }
    }
}

impl Site for SimpleSite {
    fn position(&self) -> Vector3D {
        self.position
    }
}

/// A simple implementation of `Structure` to use when no other is available
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleStructure {
    sites: Vec<SimpleSite>,
}

impl SimpleStructure {
    /// Create a new structure without any site
    pub fn new() -> SimpleStructure {
        SimpleStructure {
            sites: Vec::new(),
        }
    }

    /// Add a site with the given atomic type and position to this structure
    pub fn add_site(&mut self, atomic_type: i32, position: Vector3D) {
        self.sites.push(SimpleSite::new(atomic_type, position));
    }

    /// Get the number of sites in this structure
    pub fn size(&self) -> usize {
        self.sites.len()
    }

    /// Get the atomic types of all sites in this structure
    pub fn types(&self) -> impl Iterator<Item = i32> + '_ {
        self.sites.iter().map(|site| site.atomic_type)
    }

    /// Get the positions of all sites in this structure
    pub fn positions(&self) -> impl Iterator<Item = Vector3D> + '_ {
        self.sites.iter().map(|site| site.position)
    }
}

impl Structure for SimpleStructure {
    type Site = SimpleSite;

    fn sites(&self) -> &[SimpleSite] {
        &self.sites
    }
}

impl From<Vec<SimpleSite>> for SimpleStructure {
    fn from(sites: Vec<SimpleSite>) -> SimpleStructure {
        SimpleStructure { sites }
    }
}

impl FromIterator<SimpleSite> for SimpleStructure {
    fn from_iter<I: IntoIterator<Item = SimpleSite>>(iter: I) -> SimpleStructure {
        SimpleStructure {
            sites: iter.into_iter().collect(),
        }
    }
}
