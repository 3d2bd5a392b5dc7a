//! Stock accessory entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;
use crate::domain::validation::{Constraint, FieldSpec};

const NAME_RULES: &[Constraint] = &[Constraint::Length { min: 1, max: 255 }];
const DESCRIPTION_RULES: &[Constraint] = &[Constraint::Length { min: 1, max: 255 }];

/// An accessory referenced by stock items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockAccessory {
    #[serde(skip)]
    id: Option<RecordId>,
    /// External identifier, attached during sanitization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub stock_accessory_id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl StockAccessory {
    /// Build an accessory from its field values.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

impl Entity for StockAccessory {
    const KIND: &'static str = "stock_accessories";

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
        self.stock_accessory_id = Some(id);
    }

    fn field_specs(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::text("name", &self.name, NAME_RULES),
            FieldSpec::text("description", &self.description, DESCRIPTION_RULES),
        ]
    }
}

/// Partial field bag accepted from API payloads; only supplied fields are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockAccessoryDraft {
    /// External identifier, when updating.
    pub stock_accessory_id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

impl StockAccessoryDraft {
    /// Build an accessory applying only the supplied fields.
    pub fn build(self) -> StockAccessory {
        let mut accessory = StockAccessory::default();
        if let Some(value) = self.stock_accessory_id {
            accessory.stock_accessory_id = Some(value);
        }
        if let Some(value) = self.name {
            accessory.name = value;
        }
        if let Some(value) = self.description {
            accessory.description = value;
        }
        accessory
    }
}
