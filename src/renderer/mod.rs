//! Rendering support
//!
//! Everything here is CPU-side: the simulation is turned into a flat
//! triangle list in court coordinates plus a court-to-clip matrix, which the
//! page uploads to a WebGPU vertex buffer laid out by [`Vertex::desc`].

pub mod frame;
pub mod shapes;
pub mod vertex;
pub mod view;

pub use frame::{Frame, build_frame};
pub use vertex::Vertex;
pub use view::CourtView;
