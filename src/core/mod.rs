pub mod bounds;
pub mod chart_kind;
pub mod dataset;
pub mod frame;
pub mod record;

pub use bounds::ScaleBounds;
pub use chart_kind::ChartKind;
pub use dataset::DataSet;
pub use frame::{Frame, FrameSequence};
pub use record::Record;
