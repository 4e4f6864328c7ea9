/// Crate-wide Result alias with anyhow::Error as the error type.
/// Fatal paths propagate through this; registry failures use `RegistryError` instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
