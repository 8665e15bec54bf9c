//! Client for the TTSS public transit tracking service
//!
//! Covers the endpoints of the Kraków deployment at
//! [ttss.krakow.pl](http://www.ttss.krakow.pl): stop lookup, live departures
//! at stops and stop points, trip progress, vehicle positions and route
//! geometry. Responses are turned into the records of the `domain` crate.
//!
//! # Architecture
//!
//! [`TtssClient`] issues one blocking request per call through a
//! [`Transport`] ([`ReqwestTransport`] by default) and hands the body to a
//! pure function in [`extractors`]. Extractors do no I/O and take the
//! current time as an explicit [`PassageContext`], so they can be used on
//! recorded responses as well.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ttss::{PassageQuery, TtssClient, TtssConfig};
//!
//! let client = TtssClient::new(&TtssConfig::load()?)?;
//!
//! for stop in client.autocomplete_stops("Teatr")? {
//!     println!("{:?} {:?}", stop.number, stop.name);
//! }
//!
//! let departures = client.get_stop_passages("3242", &PassageQuery::default())?;
//! for passage in departures.upcoming() {
//!     println!("{:?} {:?}", passage.route, passage.dt);
//! }
//! ```

mod client;
mod config;
mod error;
pub mod extractors;
mod models;
mod params;
pub mod time;
mod transport;

pub use client::TtssClient;
pub use config::TtssConfig;
pub use error::{ParseError, TtssError};
pub use extractors::PassageContext;
pub use models::{RouteStops, StopPassages, TripPassages};
pub use params::{ColorType, PassageMode, PassageQuery, PositionType, VehicleQuery};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
