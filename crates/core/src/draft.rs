//! The in-progress listing draft and its merge rules.
//!
//! A draft accumulates across the wizard. Each step owns a fixed set of
//! top-level keys and a merge overwrites exactly those keys, leaving keys
//! written by other steps untouched. Serialized key names are camelCase so
//! the stored record reads the same as the listing it becomes.

use serde::{Deserialize, Serialize};

use crate::catalog::{Condition, ListingFormat, ShippingOption};
use crate::category::{CategoryCrumb, CategoryPath};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// Opaque reference to an uploaded image (an object URL, storage key, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form descriptive attributes. Blank strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSpecifics {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub size: String,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The single in-progress listing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    // -- category step --
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_path: Vec<CategoryCrumb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    // -- details step --
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_format: Option<ListingFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_specifics: Option<ItemSpecifics>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRef>,
}

/// How far a draft has progressed through the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStage {
    NoDraft,
    CategoryChosen,
    DetailsEntered,
}

impl DraftStage {
    pub fn of(draft: Option<&Draft>) -> Self {
        draft.map_or(Self::NoDraft, Draft::stage)
    }
}

impl Draft {
    /// Stage implied by which keys are present. A stored draft with no
    /// category yet still counts as `NoDraft`.
    pub fn stage(&self) -> DraftStage {
        if self.title.is_some() {
            DraftStage::DetailsEntered
        } else if self.category_id.is_some() {
            DraftStage::CategoryChosen
        } else {
            DraftStage::NoDraft
        }
    }

    /// Overwrite the keys owned by `patch`'s step.
    pub fn merge(&mut self, patch: DraftPatch) {
        match patch {
            DraftPatch::Category(section) => {
                self.category_path = section.category_path;
                self.category_id = Some(section.category_id);
                self.category_name = Some(section.category_name);
            }
            DraftPatch::Details(section) => {
                self.title = Some(section.title);
                self.description = Some(section.description);
                self.condition = Some(section.condition);
                self.condition_name = Some(section.condition.name().to_string());
                self.listing_format = Some(section.listing_format);
                self.price = section.price;
                self.starting_bid = section.starting_bid;
                self.quantity = Some(section.quantity);
                self.shipping = Some(section.shipping);
                self.shipping_name = Some(section.shipping.name().to_string());
                self.shipping_price = Some(section.shipping.price().unwrap_or(0.0));
                self.item_specifics = Some(section.item_specifics);
                self.images = section.images;
            }
        }
    }

    /// Fail unless the draft has reached at least `stage`.
    pub fn require_stage(&self, stage: DraftStage) -> Result<(), CoreError> {
        if self.stage() >= stage {
            return Ok(());
        }
        let message = match stage {
            DraftStage::DetailsEntered => "Enter item details before submitting the listing",
            _ => "Choose a category before entering item details",
        };
        Err(CoreError::Validation(message.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Patches
// ---------------------------------------------------------------------------

/// Keys written by the category step.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category_path: Vec<CategoryCrumb>,
    pub category_id: String,
    pub category_name: String,
}

impl CategorySection {
    /// Build the category keys for `path`, which must hold a root and at
    /// least one descendant.
    pub fn from_path(path: &CategoryPath) -> Result<Self, CoreError> {
        let leaf = match path.last() {
            Some(leaf) if path.is_complete() => leaf,
            _ => {
                return Err(CoreError::Validation(
                    "Select a category and at least one subcategory to continue".to_string(),
                ))
            }
        };
        Ok(Self {
            category_path: path.crumbs(),
            category_id: leaf.id.to_string(),
            category_name: path.label(),
        })
    }
}

/// Keys written by the item details step, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsSection {
    pub title: String,
    pub description: String,
    pub condition: Condition,
    pub listing_format: ListingFormat,
    pub price: Option<f64>,
    pub starting_bid: Option<f64>,
    pub quantity: u32,
    pub shipping: ShippingOption,
    pub item_specifics: ItemSpecifics,
    pub images: Vec<ImageRef>,
}

/// A partial update produced by one wizard step.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPatch {
    Category(CategorySection),
    Details(DetailsSection),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
