//! glTF test models for primitive restart.
//!
//! Each generated [Model] holds two mesh primitives drawn side by side: the left one indexes the
//! largest value its [IndexComponentType] can store (the primitive restart value), the right one
//! stays one vertex short of it. A conforming renderer breaks the left primitive at that index
//! and draws the right one whole.
//!
//! Models are plain data; [ser] maps them onto an external glTF model for export.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod group;
mod model;
mod positions;
mod primitive;
pub mod readme;
#[cfg(feature = "serialize")]
pub mod ser;
mod topology;

pub use error::Error;
pub use group::*;
pub use model::*;
pub use positions::*;
pub use primitive::*;
pub use topology::*;
