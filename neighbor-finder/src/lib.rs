#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::comparison_chain)]
#![allow(clippy::redundant_field_names, clippy::redundant_closure_for_method_calls)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod types;
pub use types::*;

mod errors;
pub use self::errors::Error;

pub mod systems;
pub use systems::{Site, Structure, SimpleSite, SimpleStructure, PointSet, DistanceMatrix};

pub mod neighbors;
pub use neighbors::{neighbors, NeighborFinder, NeighborOptions, NeighborRecord, NeighborList};
pub use neighbors::{MIN_NEIGHBOR_DISTANCE, ZERO_IMAGE};
