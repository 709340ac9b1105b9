//! vizframe: animation-frame builder for chart renderers.
//!
//! This crate turns flat tabular records into ordered animation-frame
//! sequences and drawable per-frame payloads for Plotly-style animated
//! charts (pie, bar race, US-state choropleth). Rendering and playback
//! chrome stay in the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod samples;
pub mod telemetry;

pub use api::{AnimationOptions, AnimationSpec, build_animation, build_frames};
pub use error::{VizError, VizResult};
