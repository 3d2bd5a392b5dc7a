//! Stock image entity.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;
use crate::domain::validation::{Constraint, FieldSpec};

const IMAGE_RULES: &[Constraint] = &[Constraint::NotEmpty];

/// Image payload: raw bytes as stored, or the transport-safe base64 text
/// produced by sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ImagePayload {
    /// Base64 text form.
    Encoded(String),
    /// Raw bytes.
    Raw(Vec<u8>),
}

impl Default for ImagePayload {
    fn default() -> Self {
        Self::Raw(Vec::new())
    }
}

impl ImagePayload {
    /// The payload viewed as bytes, whichever form it is in.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Encoded(text) => text.as_bytes(),
            Self::Raw(bytes) => bytes.as_slice(),
        }
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Re-encode raw bytes as base64 text; already-encoded payloads are
    /// returned unchanged, keeping the transform idempotent.
    #[must_use]
    pub fn encode(self) -> Self {
        match self {
            Self::Raw(bytes) => Self::Encoded(STANDARD.encode(bytes)),
            encoded @ Self::Encoded(_) => encoded,
        }
    }
}

/// A stored vehicle photograph referenced by stock items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockImage {
    #[serde(skip)]
    id: Option<RecordId>,
    /// External identifier, attached during sanitization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub stock_image_id: Option<String>,
    /// Original file name.
    #[serde(default)]
    pub name: String,
    /// Binary payload; must be non-empty to persist.
    #[serde(default)]
    pub image: ImagePayload,
}

impl StockImage {
    /// Build an image record from a name and raw payload.
    pub fn new(name: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            image: ImagePayload::Raw(image),
            ..Self::default()
        }
    }
}

impl Entity for StockImage {
    const KIND: &'static str = "stock_images";

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
        self.stock_image_id = Some(id);
    }

    fn field_specs(&self) -> Vec<FieldSpec<'_>> {
        vec![FieldSpec::bytes("image", self.image.as_bytes(), IMAGE_RULES)]
    }

    fn sanitize(&mut self) {
        self.image = std::mem::take(&mut self.image).encode();
        self.sanitize_id();
    }
}

/// Partial field bag accepted from API payloads; only supplied fields are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockImageDraft {
    /// External identifier, when updating.
    pub stock_image_id: Option<String>,
    /// Original file name.
    pub name: Option<String>,
    /// Payload, either raw bytes or base64 text.
    pub image: Option<ImagePayload>,
}

impl StockImageDraft {
    /// Build an image record applying only the supplied fields.
    pub fn build(self) -> StockImage {
        let mut image = StockImage::default();
        if let Some(value) = self.stock_image_id {
            image.stock_image_id = Some(value);
        }
        if let Some(value) = self.name {
            image.name = value;
        }
        if let Some(value) = self.image {
            image.image = value;
        }
        image
    }
}
