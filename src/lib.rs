pub mod client;
pub mod error;
pub mod fixture;
pub mod model;
pub mod stub;

pub use client::{HttpResponse, LocationClient};
pub use error::HarnessError;
pub use fixture::{FixtureRecord, FixtureStore};
pub use model::{LOCATION_CODES, LocationDetail, LocationDetails, LocationEntry, LocationList};
pub use stub::{StubResponse, StubServer, mount_location_stubs};
