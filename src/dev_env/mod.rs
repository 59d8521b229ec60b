//! Development Environment entity, descriptor schema, and status machine.
//!
//! A Development Environment (DevEnv) is a named collection of tool image
//! references plus install state. It is constructed from a descriptor
//! mapping (catalog entries) or loaded from a descriptor file (local
//! store), bound to the tool image registry, and its aggregate status is
//! derived on demand from the bound images' availability.

pub mod descriptor;
pub mod entity;
pub mod status;

pub use descriptor::{DevEnvDescriptor, ToolImageDescriptor};
pub use entity::DevEnv;
pub use status::DevEnvStatus;
