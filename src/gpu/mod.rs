mod batch;
mod context;
mod pipeline;

pub use batch::{QuadBatch, QuadInstance};
pub use context::GpuContext;
pub use pipeline::QuadPipeline;
