use serde::ser::{Serialize, Serializer, SerializeSeq};

/// Periodic image marker attached to neighbor records. Neighbor search only
/// handles finite, non-periodic sets of sites, so this is always the zero
/// cell shift.
pub const ZERO_IMAGE: [i32; 3] = [0, 0, 0];

/// A single neighbor of a site.
///
/// Only `distance` is always present, the other fields are set depending on
/// the [`NeighborOptions`](super::NeighborOptions) used for the search. When
/// serialized, a record becomes a flat sequence of its present fields, in the
/// order `[site, distance, index, image]`.
#[derive(Debug, PartialEq)]
pub struct NeighborRecord<'a, S> {
    /// The neighboring site, if `include_site` was set
    pub site: Option<&'a S>,
    /// Distance between the center and this neighbor
    pub distance: f64,
    /// Index of the neighbor in the point set, if `include_index` was set
    pub index: Option<usize>,
    /// Periodic image of the neighbor, if `include_image` was set. This is
    /// always [`ZERO_IMAGE`].
    pub image: Option<[i32; 3]>,
}

impl<S> Clone for NeighborRecord<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NeighborRecord<'_, S> {}

impl<S: Serialize> Serialize for NeighborRecord<'_, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let len = 1
            + usize::from(self.site.is_some())
            + usize::from(self.index.is_some())
            + usize::from(self.image.is_some());

        let mut seq = serializer.serialize_seq(Some(len))?;
        if let Some(site) = self.site {
            seq.serialize_element(site)?;
        }
        seq.serialize_element(&self.distance)?;
        if let Some(index) = self.index {
            seq.serialize_element(&index)?;
        }
        if let Some(image) = &self.image {
            seq.serialize_element(image)?;
        }
        seq.end()
    }
}

/// Neighbors of all sites in a point set. Row `i` contains the neighbors of
/// site `i`, sorted by increasing neighbor index.
#[derive(Debug, PartialEq)]
pub struct NeighborList<'a, S> {
    pub(super) rows: Vec<Vec<NeighborRecord<'a, S>>>,
}

impl<S> Clone for NeighborList<'_, S> {
    fn clone(&self) -> Self {
        NeighborList {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, S> NeighborList<'a, S> {
    /// Get the number of rows in this list, i.e. the number of sites
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is this list empty, i.e. was it computed on an empty point set?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the neighbors of the site at index `center`, if it exists
    pub fn get(&self, center: usize) -> Option<&[NeighborRecord<'a, S>]> {
        self.rows.get(center).map(|row| &**row)
    }

    /// Iterate over the rows of this list
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<NeighborRecord<'a, S>>> {
        self.rows.iter()
    }

    /// Iterate over all `(center, neighbor)` pairs in this list
    pub fn pairs(&self) -> impl Iterator<Item = (usize, &NeighborRecord<'a, S>)> + '_ {
        self.rows.iter()
            .enumerate()
            .flat_map(|(center, row)| row.iter().map(move |record| (center, record)))
    }

    /// Get the rows of this list
    pub fn into_rows(self) -> Vec<Vec<NeighborRecord<'a, S>>> {
        self.rows
    }
}

impl<'a, S> std::ops::Index<usize> for NeighborList<'a, S> {
    type Output = [NeighborRecord<'a, S>];

    fn index(&self, center: usize) -> &Self::Output {
        &self.rows[center]
    }
}

impl<'b, 'a, S> IntoIterator for &'b NeighborList<'a, S> {
    type Item = &'b Vec<NeighborRecord<'a, S>>;
    type IntoIter = std::slice::Iter<'b, Vec<NeighborRecord<'a, S>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<S: Serialize> Serialize for NeighborList<'_, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.rows.serialize(serializer)
    }
}
