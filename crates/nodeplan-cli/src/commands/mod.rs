mod plan;
mod transform;

pub use plan::plan;
pub use transform::transform;
