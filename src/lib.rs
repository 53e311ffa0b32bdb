pub mod adapter;
mod config;
pub mod core;
mod coords;
mod geometry;
pub mod serialization;

pub use self::config::WktConfig;
pub use self::coords::*;
pub use self::core::*;
pub use self::geometry::*;
pub use self::serialization::{Extract, Ingest, Wkt};
