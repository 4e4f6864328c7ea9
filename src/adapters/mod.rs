/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the filesystem, the terminal and
/// package registries. The CLI in `main.rs` is the only inbound adapter.
pub mod outbound;
