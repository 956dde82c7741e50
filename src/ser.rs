//! Serialization of generated [Models](crate::Model) to storage formats.

#[cfg(feature = "ser_gltf")]
pub mod gltf;
