//! File-backed adapters for the catalog and archive ports.

mod file_result_archive;
mod json_catalog_provider;

pub use file_result_archive::JsonFileResultArchive;
pub use json_catalog_provider::JsonCatalogProvider;
