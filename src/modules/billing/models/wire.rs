// Wire shapes for document line items, shared by all three document types.
//
// `LineRecord` is the loaded shape: money fields come through the lenient
// parse boundary because older stored payloads carry them as strings with
// currency noise. `LinePayload` is the saved shape: the entire item array
// is re-sent wholesale on every save.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::DiscountKind;
use crate::core::money;

/// One stored line, as returned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "money::lenient")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "money::lenient")]
    pub rate: Decimal,
    #[serde(default, deserialize_with = "money::lenient")]
    pub discount: Decimal,
    #[serde(default)]
    pub discount_kind: DiscountKind,
    #[serde(default)]
    pub tax_label: String,
    #[serde(default, deserialize_with = "money::lenient")]
    pub tax_amount: Decimal,
    #[serde(default, deserialize_with = "money::lenient")]
    pub total: Decimal,
}

/// One line of the save payload. `discount` is always the absolute amount
/// actually applied, never a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePayload {
    pub id: Option<String>,
    pub item_id: Option<String>,
    pub name: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit: String,
    pub rate: Decimal,
    pub discount: Decimal,
    pub discount_kind: DiscountKind,
    pub tax_amount: Decimal,
    pub tax_label: String,
    pub total: Decimal,
}
