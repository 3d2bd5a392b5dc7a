//! The contract shared by every persistable record type.

use crate::domain::error::DomainResult;
use crate::domain::record_id::RecordId;
use crate::domain::validation::{self, FieldSpec};

/// A validated, identity-bearing record.
///
/// Implementors hold their fields, declare a constraint table through
/// [`Entity::field_specs`], and get validation and the identifier half of
/// sanitization for free. Entities with extra output transforms (blanking a
/// password hash, re-encoding a binary payload) override [`Entity::sanitize`]
/// and finish with [`Entity::sanitize_id`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Collection name in the document store.
    const KIND: &'static str;

    /// Internal store identifier, when assigned.
    fn record_id(&self) -> Option<&RecordId>;

    /// Attach the internal store identifier.
    fn set_record_id(&mut self, id: RecordId);

    /// Drop the internal store identifier.
    fn clear_record_id(&mut self);

    /// Attach the external string form of the identifier.
    fn set_external_id(&mut self, id: String);

    /// The constraint table over the entity's current values.
    fn field_specs(&self) -> Vec<FieldSpec<'_>>;

    /// Check every declared constraint, reporting all violations at once.
    fn validate(&self) -> DomainResult<()> {
        validation::evaluate(&self.field_specs())
    }

    /// Move the internal identifier into its external string form.
    ///
    /// A no-op when the internal identifier is already absent, which makes
    /// sanitization idempotent.
    fn sanitize_id(&mut self) {
        if let Some(id) = self.record_id().cloned() {
            self.set_external_id(id.to_hex());
            self.clear_record_id();
        }
    }

    /// Produce the output-ready form of the entity in place.
    fn sanitize(&mut self) {
        self.sanitize_id();
    }
}
