pub mod extract;
pub mod geojson;
pub mod ingest;
pub mod tokens;
pub mod wkt;

pub use extract::Extract;
pub use ingest::Ingest;
pub use wkt::{Wkt, read, read_each, write};
