/// The runtime value type.
///
/// Defines [`Value`](core::Value), its conversions from literals and host
/// types, display forms and truthiness.
pub mod core;
