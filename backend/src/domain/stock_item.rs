//! Stock item entity: a vehicle on the dealership floor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;
use crate::domain::stock_accessory::StockAccessory;
use crate::domain::stock_image::StockImage;
use crate::domain::validation::{Constraint, FieldSpec};

const REGISTRATION_RULES: &[Constraint] = &[Constraint::Length { min: 4, max: 255 }];
const TEXT_RULES: &[Constraint] = &[Constraint::Length { min: 1, max: 255 }];
const PRICE_RULES: &[Constraint] = &[Constraint::Length { min: 1, max: 50 }];
const MODEL_YEAR_RULES: &[Constraint] = &[Constraint::Range {
    min: 1950,
    max: 2100,
}];
const ODOMETER_RULES: &[Constraint] = &[Constraint::Range {
    min: 0,
    max: 10_000_000,
}];

/// A vehicle with ordered references to its accessories and images.
///
/// The `accessories`/`images` lists hold external identifier strings; the
/// service layer resolves them into `stock_accessories`/`stock_images` on
/// read. The store never sees the expanded forms populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    #[serde(skip)]
    id: Option<RecordId>,
    /// External identifier, attached during sanitization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub stock_item_id: Option<String>,
    /// Number plate.
    #[serde(default)]
    pub registration_number: String,
    /// Manufacturer.
    #[serde(default)]
    pub make: String,
    /// Model line.
    #[serde(default)]
    pub model: String,
    /// First registration year.
    #[serde(default)]
    pub model_year: i64,
    /// Odometer reading in kilometres.
    #[serde(default)]
    pub odometer: i64,
    /// Body colour.
    #[serde(default)]
    pub colour: String,
    /// Vehicle identification number.
    #[serde(default)]
    pub vin: String,
    /// Sticker price, formatted by the caller.
    #[serde(default)]
    pub retail_price: String,
    /// Acquisition price, formatted by the caller.
    #[serde(default)]
    pub cost_price: String,
    /// Identifiers of attached accessories, in display order.
    #[serde(default)]
    pub accessories: Vec<String>,
    /// Identifiers of attached images, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Stamped by the service on first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Re-stamped by the service on every mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Resolved accessories, populated on read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_accessories: Vec<StockAccessory>,
    /// Resolved images, populated on read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_images: Vec<StockImage>,
}

impl Entity for StockItem {
    const KIND: &'static str = "stock_items";

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
        self.stock_item_id = Some(id);
    }

    fn field_specs(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::text(
                "registrationNumber",
                &self.registration_number,
                REGISTRATION_RULES,
            ),
            FieldSpec::text("make", &self.make, TEXT_RULES),
            FieldSpec::text("model", &self.model, TEXT_RULES),
            FieldSpec::integer("modelYear", self.model_year, MODEL_YEAR_RULES),
            FieldSpec::integer("odometer", self.odometer, ODOMETER_RULES),
            FieldSpec::text("colour", &self.colour, TEXT_RULES),
            FieldSpec::text("vin", &self.vin, TEXT_RULES),
            FieldSpec::text("retailPrice", &self.retail_price, PRICE_RULES),
            FieldSpec::text("costPrice", &self.cost_price, PRICE_RULES),
        ]
    }
}

/// Partial field bag accepted from API payloads; only supplied fields are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItemDraft {
    /// External identifier, when updating.
    pub stock_item_id: Option<String>,
    /// Number plate.
    pub registration_number: Option<String>,
    /// Manufacturer.
    pub make: Option<String>,
    /// Model line.
    pub model: Option<String>,
    /// First registration year.
    pub model_year: Option<i64>,
    /// Odometer reading in kilometres.
    pub odometer: Option<i64>,
    /// Body colour.
    pub colour: Option<String>,
    /// Vehicle identification number.
    pub vin: Option<String>,
    /// Sticker price.
    pub retail_price: Option<String>,
    /// Acquisition price.
    pub cost_price: Option<String>,
    /// Identifiers of attached accessories.
    pub accessories: Option<Vec<String>>,
    /// Identifiers of attached images.
    pub images: Option<Vec<String>>,
}

impl StockItemDraft {
    /// Build a stock item applying only the supplied fields; relation lists
    /// default to empty, never null.
    pub fn build(self) -> StockItem {
        let mut item = StockItem::default();
        if let Some(value) = self.stock_item_id {
            item.stock_item_id = Some(value);
        }
        if let Some(value) = self.registration_number {
            item.registration_number = value;
        }
        if let Some(value) = self.make {
            item.make = value;
        }
        if let Some(value) = self.model {
            item.model = value;
        }
        if let Some(value) = self.model_year {
            item.model_year = value;
        }
        if let Some(value) = self.odometer {
            item.odometer = value;
        }
        if let Some(value) = self.colour {
            item.colour = value;
        }
        if let Some(value) = self.vin {
            item.vin = value;
        }
        if let Some(value) = self.retail_price {
            item.retail_price = value;
        }
        if let Some(value) = self.cost_price {
            item.cost_price = value;
        }
        if let Some(value) = self.accessories {
            item.accessories = value;
        }
        if let Some(value) = self.images {
            item.images = value;
        }
        item
    }
}
