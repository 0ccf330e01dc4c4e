use crate::domain::{entities::ProjectDescriptor, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &ProjectDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }
}
