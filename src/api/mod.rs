mod animation;
mod bar_race_trace_builder;
mod choropleth_trace_builder;
mod frame_builder;
mod json_contract;
mod pie_trace_builder;

pub use animation::{
    AnimationFrame, AnimationOptions, AnimationSpec, TracePayload, build_animation,
};
pub use bar_race_trace_builder::BarTrace;
pub use choropleth_trace_builder::ChoroplethTrace;
pub use frame_builder::build_frames;
pub use json_contract::{ANIMATION_JSON_SCHEMA_V1, AnimationJsonContractV1};
pub use pie_trace_builder::PieTrace;
