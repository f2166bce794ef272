//! Fixed catalogs offered by the item details step.
//!
//! Item conditions, shipping options and listing formats are closed sets.
//! Each variant serializes as its kebab-case id and carries its display
//! name plus whatever payload the listing pages show alongside it.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Item condition
// ---------------------------------------------------------------------------

/// Physical condition of the item being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    OpenBox,
    Refurbished,
    UsedLikeNew,
    UsedGood,
    UsedAcceptable,
    ForParts,
}

impl Condition {
    /// Every condition, in catalog order.
    pub const ALL: [Condition; 7] = [
        Self::New,
        Self::OpenBox,
        Self::Refurbished,
        Self::UsedLikeNew,
        Self::UsedGood,
        Self::UsedAcceptable,
        Self::ForParts,
    ];

    /// Resolve a catalog id such as `"used-good"`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::OpenBox => "open-box",
            Self::Refurbished => "refurbished",
            Self::UsedLikeNew => "used-like-new",
            Self::UsedGood => "used-good",
            Self::UsedAcceptable => "used-acceptable",
            Self::ForParts => "for-parts",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::OpenBox => "Open Box",
            Self::Refurbished => "Certified Refurbished",
            Self::UsedLikeNew => "Used - Like New",
            Self::UsedGood => "Used - Good",
            Self::UsedAcceptable => "Used - Acceptable",
            Self::ForParts => "For Parts or Not Working",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::New => "A brand-new, unused item in its original packaging",
            Self::OpenBox => "An item in excellent condition with original packaging opened",
            Self::Refurbished => "Professionally restored to working order",
            Self::UsedLikeNew => "In perfect working condition with no signs of wear",
            Self::UsedGood => "Shows some signs of wear but works perfectly",
            Self::UsedAcceptable => "Shows wear and may have minor cosmetic damage",
            Self::ForParts => "Not in working condition, for parts only",
        }
    }
}

// ---------------------------------------------------------------------------
// Shipping
// ---------------------------------------------------------------------------

/// Shipping option chosen by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingOption {
    Free,
    Standard,
    Expedited,
    Express,
    LocalPickup,
    Calculated,
}

impl ShippingOption {
    pub const ALL: [ShippingOption; 6] = [
        Self::Free,
        Self::Standard,
        Self::Expedited,
        Self::Express,
        Self::LocalPickup,
        Self::Calculated,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Expedited => "expedited",
            Self::Express => "express",
            Self::LocalPickup => "local-pickup",
            Self::Calculated => "calculated",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Free => "Free Shipping",
            Self::Standard => "Standard Shipping",
            Self::Expedited => "Expedited Shipping",
            Self::Express => "Express Shipping (1-2 days)",
            Self::LocalPickup => "Local Pickup Only",
            Self::Calculated => "Calculated (based on buyer location)",
        }
    }

    /// Flat display price. `None` when the cost depends on the buyer.
    pub fn price(self) -> Option<f64> {
        match self {
            Self::Free | Self::LocalPickup => Some(0.0),
            Self::Standard => Some(5.99),
            Self::Expedited => Some(12.99),
            Self::Express => Some(24.99),
            Self::Calculated => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing format
// ---------------------------------------------------------------------------

/// Sale mode of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingFormat {
    BuyItNow,
    Auction,
    AuctionBin,
}

impl ListingFormat {
    pub const ALL: [ListingFormat; 3] = [Self::BuyItNow, Self::Auction, Self::AuctionBin];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::BuyItNow => "buy-it-now",
            Self::Auction => "auction",
            Self::AuctionBin => "auction-bin",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BuyItNow => "Buy It Now",
            Self::Auction => "Auction",
            Self::AuctionBin => "Auction with Buy It Now",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BuyItNow => "Fixed price listing",
            Self::Auction => "Buyers bid on your item",
            Self::AuctionBin => "Auction with optional instant purchase",
        }
    }

    /// Whether a fixed `price` must be supplied.
    pub fn requires_price(self) -> bool {
        matches!(self, Self::BuyItNow | Self::AuctionBin)
    }

    /// Whether a `startingBid` must be supplied.
    pub fn requires_starting_bid(self) -> bool {
        matches!(self, Self::Auction | Self::AuctionBin)
    }
}

// ---------------------------------------------------------------------------
// Catalog listing
// ---------------------------------------------------------------------------

/// One catalog entry as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// All three catalogs, in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogs {
    pub conditions: Vec<CatalogEntry>,
    pub shipping_options: Vec<CatalogEntry>,
    pub listing_formats: Vec<CatalogEntry>,
}

impl Catalogs {
    pub fn build() -> Self {
        Self {
            conditions: Condition::ALL
                .into_iter()
                .map(|c| CatalogEntry {
                    id: c.id(),
                    name: c.name(),
                    description: Some(c.description()),
                    price: None,
                })
                .collect(),
            shipping_options: ShippingOption::ALL
                .into_iter()
                .map(|s| CatalogEntry {
                    id: s.id(),
                    name: s.name(),
                    description: None,
                    price: s.price(),
                })
                .collect(),
            listing_formats: ListingFormat::ALL
                .into_iter()
                .map(|f| CatalogEntry {
                    id: f.id(),
                    name: f.name(),
                    description: Some(f.description()),
                    price: None,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
