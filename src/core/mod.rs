//! Core-Domänentypen und Geometrie-Kern: Flächen, Ebenen-Projektion,
//! Begrenzungs-Index, Geraden-Flächen-Schnitt, Index-Bereiche und Segmente.

pub mod boundary;
pub mod face;
pub mod index_range;
pub mod intersect;
pub mod model;
pub mod plane;
pub mod segment;

pub use boundary::{BoundaryEdge, BoundaryIndex};
pub use face::{Face, FaceId, PointClassification};
pub use index_range::{index_count, index_range};
pub use intersect::{face_segments, intersect_line_line};
pub use model::{EdgeId, Model, ModelEdge};
pub use plane::Plane;
pub use segment::{unique_segments, Segment, SegmentKey};
