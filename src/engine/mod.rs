//! Engine: per-file processing, geometry, CRS, catalogue output and the CLI front end.

pub mod arg_parser;
pub mod catalogue_writer;
pub mod cli;
pub mod corners;
pub mod crs;
pub mod gpkg;
pub mod processor;
pub mod progress;
pub mod raster;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use catalogue_writer::{CatalogueWriter, FlushOutcome, artifact_path, flush};
pub use cli::{ConsoleObserver, handle_run, setup_opts};
pub use corners::{corners, corners_of, is_georeferenced};
pub use crs::{CrsParser, DefaultCrsParser};
pub use gpkg::{GeoPackageWriter, read_catalogue};
pub use processor::FileProcessor;
pub use raster::{FileRasterReader, RasterReader};
