pub mod endpoint;
pub mod reference;

pub use endpoint::{CodeBlock, Endpoint, Method};
pub use reference::{ApiReference, GuideStep, Resource};
