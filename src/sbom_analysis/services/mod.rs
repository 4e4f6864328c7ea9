mod package_resolver;

pub use package_resolver::PackageResolver;
