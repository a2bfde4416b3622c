//! Block types, face ordering, and the block registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod face;
pub mod registry;
pub mod types;

pub use face::Face;
pub use registry::{BlockRegistry, RegistryError};
pub use types::{BlockId, BlockType, FaceTextures, TextureId};
