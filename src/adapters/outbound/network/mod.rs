/// Network adapters for package registry APIs
mod caching_fetcher;
mod crates_io_client;
mod registry_metadata_client;
mod reqwest_fetcher;

pub use caching_fetcher::CachingHttpFetcher;
pub use crates_io_client::{CratesIoClient, CratesIoSettings};
pub use registry_metadata_client::RegistryMetadataClient;
pub use reqwest_fetcher::ReqwestHttpFetcher;
