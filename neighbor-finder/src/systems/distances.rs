use ndarray::{Array1, Array2, ArrayView1};

use crate::{Error, Vector3D};

/// Dense matrix containing the euclidean distance between all pairs of sites
/// in a point set.
///
/// The matrix is symmetric, with exactly `0.0` on the diagonal. Each pair is
/// only computed once, so `distance(i, j)` and `distance(j, i)` are bitwise
/// identical. Distances are computed without squaring the raw coordinates
/// differences, so far-apart sites get a finite distance as long as it is
/// representable.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    distances: Array2<f64>,
}

impl DistanceMatrix {
    /// Compute the distance matrix for the sites at the given `positions`.
    ///
    /// This fails with `Error::MalformedInput` if a position involved in a
    /// pair is not finite.
    #[time_graph::instrument(name = "DistanceMatrix")]
    pub fn new(positions: &[Vector3D]) -> Result<DistanceMatrix, Error> {
        let n_sites = positions.len();
        let mut distances = Array2::zeros((n_sites, n_sites));

        for i in 0..n_sites {
            for j in (i + 1)..n_sites {
                let distance = pair_distance(positions, i, j)?;
                distances[[i, j]] = distance;
                distances[[j, i]] = distance;
            }
        }

        return Ok(DistanceMatrix { distances });
    }

    /// Compute a single row of the distance matrix, containing the distances
    /// between the site at index `center` and all sites (including itself).
    ///
    /// The values are identical to `DistanceMatrix::new(positions)?.row(center)`.
    pub fn row_for(positions: &[Vector3D], center: usize) -> Result<Array1<f64>, Error> {
        if center >= positions.len() {
            return Err(Error::InvalidParameter(format!(
                "site index {} is out of bounds for a set of {} sites", center, positions.len()
            )));
        }

        let mut row = Array1::zeros(positions.len());
        for other in 0..positions.len() {
            if other == center {
                continue;
            }

            row[other] = if center < other {
                pair_distance(positions, center, other)?
            } else {
                pair_distance(positions, other, center)?
            };
        }

        return Ok(row);
    }

    /// Get the number of sites in this matrix
    pub fn size(&self) -> usize {
        self.distances.nrows()
    }

    /// Get the distance between sites `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[[i, j]]
    }

    /// Get the distances between site `i` and all sites
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.distances.row(i)
    }

    /// Get the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.distances
    }
}

/// Distance between sites `i` and `j`, checking that both positions are
/// finite
fn pair_distance(positions: &[Vector3D], i: usize, j: usize) -> Result<f64, Error> {
    for site in [i, j] {
        if !positions[site].is_finite() {
            return Err(Error::MalformedInput(format!(
                "position of site {} is not finite: {:?}", site, positions[site]
            )));
        }
    }

    let vector = positions[j] - positions[i];
    return Ok(vector.norm());
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::systems::PointSet;
    use crate::systems::test_utils::test_structure;
    use super::*;

    #[test]
    fn symmetric_with_zero_diagonal() {
        let structure = test_structure("methane");
        let points = PointSet::from_structure(&structure);
        let distances = points.distance_matrix().unwrap();

        assert_eq!(distances.size(), 5);
        for i in 0..5 {
            assert_eq!(distances.get(i, i), 0.0);
            for j in 0..5 {
                assert_eq!(distances.get(i, j).to_bits(), distances.get(j, i).to_bits());
            }
        }

        // C-H bonds in methane are all close to 1.087 A
        for j in 1..5 {
            assert_relative_eq!(distances.get(0, j), 1.087, epsilon = 1e-3);
        }
    }

    #[test]
    fn known_distances() {
        let positions = [
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(3.0, 4.0, 0.0),
            Vector3D::new(3.0, 4.0, 12.0),
        ];
        let distances = DistanceMatrix::new(&positions).unwrap();

        assert_eq!(distances.get(0, 1), 5.0);
        assert_eq!(distances.get(1, 2), 12.0);
        assert_relative_eq!(distances.get(0, 2), 13.0, max_relative = 1e-15);
        assert_eq!(distances.row(2)[1], 12.0);
        assert_eq!(distances.row(2)[2], 0.0);
        assert_eq!(distances.as_array().shape(), [3, 3]);
    }

    #[test]
    fn single_row() {
        let structure = test_structure("methane");
        let points = PointSet::from_structure(&structure);
        let distances = points.distance_matrix().unwrap();

        for center in 0..points.size() {
            let row = DistanceMatrix::row_for(points.positions(), center).unwrap();
            assert_eq!(row.view(), distances.row(center));
        }

        let error = DistanceMatrix::row_for(points.positions(), 5).unwrap_err();
        assert_eq!(error.to_string(), "invalid parameter: site index 5 is out of bounds for a set of 5 sites");
    }

    #[test]
    fn far_apart_sites() {
        let positions = [
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(2e160, 0.0, 0.0),
            Vector3D::new(0.0, -3e160, 4e160),
        ];
        let distances = DistanceMatrix::new(&positions).unwrap();

        assert_eq!(distances.get(0, 1), 2e160);
        assert_relative_eq!(distances.get(0, 2), 5e160, max_relative = 1e-15);
        assert!(distances.get(1, 2).is_finite());
    }

    #[test]
    fn empty() {
        let distances = DistanceMatrix::new(&[]).unwrap();
        assert_eq!(distances.size(), 0);
    }

    #[test]
    fn non_finite_positions() {
        let positions = [
            Vector3D::new(0.0, 0.0, 0.0),
            Vector3D::new(1.0, f64::NAN, 0.0),
        ];
        let error = DistanceMatrix::new(&positions).unwrap_err();
        assert!(matches!(error, Error::MalformedInput(_)));
        assert!(error.to_string().contains("site 1"));

        let positions = [
            Vector3D::new(f64::INFINITY, 0.0, 0.0),
            Vector3D::new(1.0, 0.0, 0.0),
        ];
        let error = DistanceMatrix::new(&positions).unwrap_err();
        assert!(matches!(error, Error::MalformedInput(_)));
        assert!(error.to_string().contains("site 0"));

        // a lone site never takes part in a pair
        let positions = [Vector3D::new(f64::NAN, 0.0, 0.0)];
        assert!(DistanceMatrix::new(&positions).is_ok());
    }
}
