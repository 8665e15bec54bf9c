//! Domain entities
//!
//! Records form a tree rather than a graph: a trip may embed its route, a
//! vehicle its trip, a passage any of stop/trip/route/vehicle. Embedded
//! records are independent copies.

mod lookup_result;
mod passage;
mod path;
mod route;
mod stop;
mod stop_point;
mod trip;
mod vehicle;

pub use lookup_result::LookupResult;
pub use passage::Passage;
pub use path::Path;
pub use route::Route;
pub use stop::Stop;
pub use stop_point::StopPoint;
pub use trip::Trip;
pub use vehicle::Vehicle;
