mod loader;
mod store;

pub use loader::{load_catalog, load_catalog_from_reader, parse_grouped_number, REQUIRED_COLUMNS};
pub use store::Catalog;
