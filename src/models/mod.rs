pub mod geo;
pub mod observation;
pub mod table;

pub use geo::GeoPoint;
pub use observation::{parse_observation_date, RawObservation, TemperatureObservation};
pub use table::ObservationTable;
