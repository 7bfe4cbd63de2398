//! Skin condition detection with annotated output and skincare advice.
//!
//! Bounded contexts follow a domain/infrastructure split: domain modules
//! hold data and traits, infrastructure modules hold the ONNX, `image`
//! and drawing backed implementations, and `pipeline` wires them together.

pub mod advice;
pub mod annotation;
pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod shared;
