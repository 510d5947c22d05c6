mod observation;
pub use self::observation::{Observation, ObservationsResponse, MISSING_VALUE};
