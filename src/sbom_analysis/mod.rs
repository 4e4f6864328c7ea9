/// Analysis core - package identity, provenance record, retry policy
///
/// Pure domain logic with no knowledge of HTTP, files or output formats.
pub mod domain;
pub mod policies;
pub mod services;
