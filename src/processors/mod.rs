pub mod filter;
pub mod geo_projector;
pub mod normalizer;

pub use filter::{filter, Selection};
pub use geo_projector::{project_geo, project_row, GeoProjection};
pub use normalizer::{column_display_name, normalize, ToObservation};
