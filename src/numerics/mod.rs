// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules,
// plus the shared error type and tolerance configuration.

pub mod config;
pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod point;
    pub mod capability;
    pub mod matrix;
    pub mod fixed;
    pub mod accessors;
    pub mod square;
    pub mod transform;
}
