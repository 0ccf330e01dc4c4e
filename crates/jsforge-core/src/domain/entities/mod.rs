pub mod descriptor;

pub use crate::domain::DomainError;
pub use descriptor::{ClassDescriptor, ProjectDescriptor, PropertySpec};
