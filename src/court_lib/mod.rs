// src/court_lib/mod.rs
pub mod config;
pub mod error;
pub mod generator;
pub mod shape_types;

pub use config::CourtConfig;
pub use error::{ConfigResult, ConfigurationError};
pub use generator::{CourtGeometryGenerator, CENTER_CIRCLE_RADIUS, MARKING_EPSILON};
pub use shape_types::{
    BoxParams, MaterialKind, PlacedShape, PlaneParams, RingParams, SceneDescriptor,
    Shape, ShapeKind, Transform,
};
