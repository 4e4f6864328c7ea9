pub mod ecosystem;
pub mod package_identity;
pub mod package_record;
pub mod repository_ref;
pub mod sbom_entry;

pub use ecosystem::Ecosystem;
pub use package_identity::PackageIdentity;
pub use package_record::PackageRecord;
pub use repository_ref::RepositoryRef;
pub use sbom_entry::{ExternalReference, SbomEntry};
