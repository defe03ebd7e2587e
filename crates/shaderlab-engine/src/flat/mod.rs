//! Flat (2D) programs drawn over a full-screen quad.

mod context;

pub use context::FlatContext;
