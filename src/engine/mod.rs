pub mod provisioner;
pub mod script;
pub mod transform;

pub use provisioner::{PipelineReport, Provisioner};
pub use script::TransformScript;
pub use transform::{transform_request, transform_star_event};
