//! Field validation for the item details step, plus image intake.
//!
//! Every rule reports against one [`DraftField`], so a rejected form comes
//! back with one message per offending field rather than a single failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Condition, ListingFormat, ShippingOption};
use crate::draft::{DetailsSection, Draft, ImageRef, ItemSpecifics};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 80;
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Maximum number of images attached to one listing.
pub const MAX_IMAGES: usize = 12;

/// Largest accepted image upload (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Form fields that can carry a validation error, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    Description,
    Condition,
    ListingFormat,
    Price,
    StartingBid,
    Quantity,
    Shipping,
    Images,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Condition => "condition",
            Self::ListingFormat => "listingFormat",
            Self::Price => "price",
            Self::StartingBid => "startingBid",
            Self::Quantity => "quantity",
            Self::Shipping => "shipping",
            Self::Images => "images",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

/// Ordered set of field errors, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn single(field: DraftField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    /// Record an error; a field that already has one keeps its first message.
    pub fn add(&mut self, field: DraftField, message: impl Into<String>) {
        if self.get(field).is_some() {
            return;
        }
        let at = self.0.partition_point(|e| e.field < field);
        self.0.insert(
            at,
            FieldError {
                field,
                message: message.into(),
            },
        );
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> Vec<DraftField> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Details input
// ---------------------------------------------------------------------------

/// Raw item details as submitted by the form.
///
/// Omitted keys take the form's initial values: buy-it-now, free shipping,
/// quantity 1. An explicit `null` clears them and fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDetailsInput {
    pub title: String,
    pub description: String,
    pub condition: Option<String>,
    pub listing_format: Option<String>,
    pub price: Option<f64>,
    pub starting_bid: Option<f64>,
    pub quantity: Option<i64>,
    pub shipping: Option<String>,
    pub item_specifics: ItemSpecifics,
    pub images: Vec<ImageRef>,
}

impl Default for ItemDetailsInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            condition: None,
            listing_format: Some(ListingFormat::BuyItNow.id().to_string()),
            price: None,
            starting_bid: None,
            quantity: Some(1),
            shipping: Some(ShippingOption::Free.id().to_string()),
            item_specifics: ItemSpecifics::default(),
            images: Vec::new(),
        }
    }
}

impl ItemDetailsInput {
    /// Rebuild the form input from a stored draft (used to re-check a draft
    /// before it is finalized).
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            condition: draft.condition.map(|c| c.id().to_string()),
            listing_format: draft.listing_format.map(|f| f.id().to_string()),
            price: draft.price,
            starting_bid: draft.starting_bid,
            quantity: draft.quantity.map(i64::from),
            shipping: draft.shipping.map(|s| s.id().to_string()),
            item_specifics: draft.item_specifics.clone().unwrap_or_default(),
            images: draft.images.clone(),
        }
    }
}

fn is_positive(amount: Option<f64>) -> bool {
    amount.is_some_and(|a| a.is_finite() && a > 0.0)
}

/// Check every details rule and, if all hold, produce the typed section to
/// merge into the draft.
pub fn validate_item_details(input: &ItemDetailsInput) -> Result<DetailsSection, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title_chars = input.title.chars().count();
    if input.title.trim().is_empty() {
        errors.add(DraftField::Title, "Title is required");
    } else if title_chars < TITLE_MIN_CHARS {
        errors.add(
            DraftField::Title,
            format!("Title must be at least {TITLE_MIN_CHARS} characters"),
        );
    } else if title_chars > TITLE_MAX_CHARS {
        errors.add(
            DraftField::Title,
            format!("Title must be {TITLE_MAX_CHARS} characters or less"),
        );
    }

    if input.description.trim().is_empty() {
        errors.add(DraftField::Description, "Description is required");
    } else if input.description.chars().count() < DESCRIPTION_MIN_CHARS {
        errors.add(
            DraftField::Description,
            format!("Description must be at least {DESCRIPTION_MIN_CHARS} characters"),
        );
    }

    let condition = input.condition.as_deref().and_then(Condition::from_id);
    if condition.is_none() {
        errors.add(DraftField::Condition, "Please select a condition");
    }

    let listing_format = input.listing_format.as_deref().and_then(ListingFormat::from_id);
    match listing_format {
        None => errors.add(DraftField::ListingFormat, "Please select a listing format"),
        Some(format) => {
            if format.requires_price() && !is_positive(input.price) {
                errors.add(DraftField::Price, "Please enter a valid price");
            }
            if format.requires_starting_bid() && !is_positive(input.starting_bid) {
                errors.add(DraftField::StartingBid, "Please enter a valid starting bid");
            }
        }
    }

    let quantity = input
        .quantity
        .and_then(|q| u32::try_from(q).ok())
        .filter(|q| *q >= 1);
    if quantity.is_none() {
        errors.add(DraftField::Quantity, "Quantity must be at least 1");
    }

    let shipping = input.shipping.as_deref().and_then(ShippingOption::from_id);
    if shipping.is_none() {
        errors.add(DraftField::Shipping, "Please select a shipping option");
    }

    if input.images.is_empty() {
        errors.add(DraftField::Images, "At least one image is required");
    }

    match (condition, listing_format, quantity, shipping) {
        (Some(condition), Some(listing_format), Some(quantity), Some(shipping))
            if errors.is_empty() =>
        {
            Ok(DetailsSection {
                title: input.title.clone(),
                description: input.description.clone(),
                condition,
                listing_format,
                price: input.price,
                starting_bid: input.starting_bid,
                quantity,
                shipping,
                item_specifics: input.item_specifics.clone(),
                images: input.images.clone(),
            })
        }
        _ => Err(errors),
    }
}

// ---------------------------------------------------------------------------
// Image intake
// ---------------------------------------------------------------------------

/// A file offered for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCandidate {
    pub reference: ImageRef,
    pub media_type: String,
    pub size_bytes: u64,
}

impl ImageCandidate {
    /// Image media type and at most [`MAX_IMAGE_BYTES`].
    pub fn is_eligible(&self) -> bool {
        self.media_type.starts_with("image/") && self.size_bytes <= MAX_IMAGE_BYTES
    }
}

/// Add a batch of upload candidates to the images already attached.
///
/// Ineligible candidates are dropped silently. If the eligible remainder
/// would push the total past [`MAX_IMAGES`] the whole batch is rejected and
/// `current` stays as it was.
pub fn accept_images(
    current: &[ImageRef],
    batch: Vec<ImageCandidate>,
) -> Result<Vec<ImageRef>, ValidationErrors> {
    let eligible: Vec<ImageRef> = batch
        .into_iter()
        .filter(ImageCandidate::is_eligible)
        .map(|c| c.reference)
        .collect();

    if current.len() + eligible.len() > MAX_IMAGES {
        return Err(ValidationErrors::single(
            DraftField::Images,
            format!("Maximum {MAX_IMAGES} images allowed"),
        ));
    }

    let mut images = current.to_vec();
    images.extend(eligible);
    Ok(images)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
