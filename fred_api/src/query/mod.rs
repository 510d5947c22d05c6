mod common;
pub use self::common::{Query, SortOrder};

mod observation;
pub use self::observation::ObservationQuery;
