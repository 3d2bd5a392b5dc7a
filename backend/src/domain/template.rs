//! Template entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;
use crate::domain::validation::{Constraint, FieldSpec};

const DESCRIPTION_RULES: &[Constraint] = &[Constraint::Length { min: 1, max: 255 }];

/// A reusable description template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(skip)]
    id: Option<RecordId>,
    /// External identifier, attached during sanitization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub template_id: Option<String>,
    /// Template body.
    #[serde(default)]
    pub description: String,
}

impl Template {
    /// Build a template from its description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

impl Entity for Template {
    const KIND: &'static str = "templates";

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_record_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn clear_record_id(&mut self) {
        self.id = None;
    }

    fn set_external_id(&mut self, id: String) {
        self.template_id = Some(id);
    }

    fn field_specs(&self) -> Vec<FieldSpec<'_>> {
        vec![FieldSpec::text(
            "description",
            &self.description,
            DESCRIPTION_RULES,
        )]
    }
}

/// Partial field bag accepted from API payloads; only supplied fields are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    /// External identifier, when updating.
    pub template_id: Option<String>,
    /// Template body.
    pub description: Option<String>,
}

impl TemplateDraft {
    /// Build a template applying only the supplied fields.
    pub fn build(self) -> Template {
        let mut template = Template::default();
        if let Some(value) = self.template_id {
            template.template_id = Some(value);
        }
        if let Some(value) = self.description {
            template.description = value;
        }
        template
    }
}
