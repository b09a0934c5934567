//! Wire types mirrored from the remote marketplace functions.
//!
//! DESIGN
//! ======
//! The remote functions are loosely typed Python handlers, so nearly every
//! field carries `#[serde(default)]`. A record missing optional columns must
//! still decode; only `id` is required where the remote always sends it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Catalog position assigned to listings that never won a placement.
pub const UNPLACED_POSITION: i64 = 999;

fn unplaced() -> i64 {
    UNPLACED_POSITION
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

/// Decimal columns arrive as JSON strings (`"4.50"`), integers as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
impl NumberOrText {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(v.round() as i64),
            Self::Text(raw) => {
                let raw = raw.trim();
                raw.parse().ok().or_else(|| raw.parse::<f64>().ok().map(|v| v.round() as i64))
            }
        }
    }
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<NumberOrText>::deserialize(de)?.and_then(|v| v.as_f64()))
}

fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(lenient_opt_f64(de)?.unwrap_or_default())
}

fn lenient_opt_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    Ok(Option::<NumberOrText>::deserialize(de)?.and_then(|v| v.as_i64()))
}

fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    Ok(lenient_opt_i64(de)?.unwrap_or_default())
}

fn position_or_unplaced<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    Ok(lenient_opt_i64(de)?.unwrap_or(UNPLACED_POSITION))
}

/// Treat an explicit `null` like a missing field.
fn null_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

// =============================================================================
// LISTINGS
// =============================================================================

/// A bookable hotel or apartment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_default")]
    pub district: String,
    #[serde(default, deserialize_with = "null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub rating: Option<f64>,
    #[serde(default = "unplaced", deserialize_with = "position_or_unplaced")]
    pub auction: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub features: Vec<String>,
    #[serde(default)]
    pub metro: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub metro_walk: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub metro_stations: Vec<MetroStation>,
    #[serde(default, deserialize_with = "null_default")]
    pub has_parking: bool,
    #[serde(default)]
    pub parking_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub parking_price_per_hour: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub min_hours: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_archived: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub subscription_expires_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_by_owner: bool,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub expert_photo_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub expert_fullness_rating: Option<f64>,
}

impl Listing {
    /// Cover image: explicit `image_url`, else the first gallery image.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Lowest room price, falling back to the listing price.
    #[must_use]
    pub fn min_price(&self) -> i64 {
        self.rooms
            .iter()
            .map(|room| room.price)
            .filter(|price| *price > 0)
            .min()
            .unwrap_or(self.price)
    }

    /// Whether an expert has rated the listing itself or any of its rooms.
    #[must_use]
    pub fn has_expert_rating(&self) -> bool {
        positive(self.expert_photo_rating)
            || positive(self.expert_fullness_rating)
            || self.rooms.iter().any(Room::has_expert_rating)
    }

    /// Map coordinates when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }
}

fn positive(rating: Option<f64>) -> bool {
    rating.is_some_and(|r| r > 0.0)
}

/// Room category inside a listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub square_meters: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub min_hours: Option<i64>,
    #[serde(default)]
    pub payment_methods: Option<String>,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub expert_photo_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub expert_fullness_rating: Option<f64>,
}

impl Room {
    #[must_use]
    pub fn has_expert_rating(&self) -> bool {
        positive(self.expert_photo_rating) || positive(self.expert_fullness_rating)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetroStation {
    #[serde(default, deserialize_with = "null_default")]
    pub station_name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub walk_minutes: i64,
}

/// Moderation status strings used by the remote workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    NeedsChanges,
    AwaitingRecheck,
    #[serde(untagged)]
    Other(String),
}

impl ModerationStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::NeedsChanges => "needs_changes",
            Self::AwaitingRecheck => "awaiting_recheck",
            Self::Other(raw) => raw,
        }
    }

    /// Badge caption shown on admin cards.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "✓ Одобрено",
            Self::Rejected => "✕ Отклонено",
            Self::NeedsChanges => "⚠ Нужны правки",
            Self::AwaitingRecheck => "↻ Повторная проверка",
            Self::Pending | Self::Other(_) => "⏳ На проверке",
        }
    }
}

// =============================================================================
// BACK OFFICE
// =============================================================================

/// Hotel owner account as listed in the admin panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bonus_balance: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub hotels: Vec<OwnerHotel>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerHotel {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
}

/// Back-office employee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default, alias = "name", deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_default")]
    pub permissions: PermissionSet,
    #[serde(default = "active", deserialize_with = "null_default")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub bonus_total: Option<f64>,
}

fn active() -> bool {
    true
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    #[default]
    Employee,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Superadmin => "Суперадмин",
            Self::Employee => "Сотрудник",
        }
    }
}

/// A single back-office permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Owners,
    Listings,
    Settings,
}

impl Permission {
    pub const ALL: [Self; 3] = [Self::Owners, Self::Listings, Self::Settings];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Owners => "owners",
            Self::Listings => "listings",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Owners => "Владельцы",
            Self::Listings => "Объекты",
            Self::Settings => "Настройки",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Owners => 1,
            Self::Listings => 1 << 1,
            Self::Settings => 1 << 2,
        }
    }
}

/// Permission bitset. The remote stores it as `{ "owners": true, ... }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct PermissionSet(u8);

impl PermissionSet {
    #[must_use]
    pub fn contains(self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission.bit();
    }

    pub fn remove(&mut self, permission: Permission) {
        self.0 &= !permission.bit();
    }

    pub fn toggle(&mut self, permission: Permission) {
        self.0 ^= permission.bit();
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Permissions present in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Permission> {
        Permission::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl From<BTreeMap<String, bool>> for PermissionSet {
    fn from(map: BTreeMap<String, bool>) -> Self {
        let mut set = Self::default();
        for (key, enabled) in map {
            if let (true, Some(permission)) = (enabled, Permission::from_key(&key)) {
                set.insert(permission);
            }
        }
        set
    }
}

impl From<PermissionSet> for BTreeMap<String, bool> {
    fn from(set: PermissionSet) -> Self {
        Permission::ALL
            .into_iter()
            .map(|p| (p.key().to_owned(), set.contains(p)))
            .collect()
    }
}

/// Owner balance movement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub balance_after: Option<f64>,
}

/// Listing row embedded in the subscription lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListing {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default)]
    pub subscription_expires_at: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_archived: bool,
}

/// Subscription lookup: `{ "listing": {...}, "days_left", "price_per_month", "prices" }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    #[serde(default, deserialize_with = "null_default")]
    pub listing: SubscriptionListing,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub days_left: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub price_per_month: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub prices: SubscriptionPrices,
}

impl SubscriptionInfo {
    #[must_use]
    pub fn expires_at(&self) -> Option<&str> {
        self.listing.subscription_expires_at.as_deref().filter(|e| !e.is_empty())
    }
}

/// `{ "transactions": [...] }` envelope of the owner history query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub transactions: Vec<Transaction>,
}

/// Package prices quoted by the subscription function.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPrices {
    #[serde(default, rename = "30_days", deserialize_with = "lenient_opt_f64")]
    pub days_30: Option<f64>,
    #[serde(default, rename = "90_days", deserialize_with = "lenient_opt_f64")]
    pub days_90: Option<f64>,
}

// =============================================================================
// TOP-20
// =============================================================================

/// Response of the TOP-20 positions query for one city.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Top20Response {
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_default")]
    pub positions: Vec<Top20Position>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Top20Position {
    pub position: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub price: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub is_booked: bool,
    #[serde(default)]
    pub booking_info: Option<Top20Booking>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Top20Booking {
    pub listing_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub listing_title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub district: String,
    #[serde(default, rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub square_meters: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub features: Vec<String>,
    #[serde(default)]
    pub metro: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub metro_walk: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub has_parking: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Reply to a TOP-20 booking.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Top20Receipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub booking_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub new_balance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub new_bonus_balance: Option<f64>,
}

// =============================================================================
// AUCTION
// =============================================================================

/// A listing in a city's auction ranking, with its active bid if any.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuctionEntry {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default = "unplaced", deserialize_with = "position_or_unplaced")]
    pub current_position: i64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub bid_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub target_position: Option<i64>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuctionInfo {
    #[serde(default, deserialize_with = "null_default")]
    pub listings: Vec<AuctionEntry>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub min_bid_for_top: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BidReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub bid_id: Option<i64>,
}

// =============================================================================
// STATISTICS
// =============================================================================

/// One day of listing traffic.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsDay {
    #[serde(default, deserialize_with = "null_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub views: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub clicks: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub phone_clicks: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub telegram_clicks: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsSummary {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_views: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_clicks: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub phone_clicks: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub telegram_clicks: i64,
    /// Click-through rate in percent.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ctr: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub period_days: i64,
}

/// `GET statistics?listing_id=&days=`; days arrive newest first.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ListingStats {
    #[serde(default, deserialize_with = "null_default")]
    pub stats: Vec<StatsDay>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: StatsSummary,
}

// =============================================================================
// EMPLOYEE BONUSES
// =============================================================================

/// Per-employee payout totals for the bonuses tab.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BonusSummary {
    #[serde(alias = "id", deserialize_with = "lenient_i64")]
    pub admin_id: i64,
    #[serde(default, alias = "name", alias = "admin_name", deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "unpaid_amount", deserialize_with = "lenient_f64")]
    pub total_unpaid: f64,
    #[serde(default, alias = "paid_amount", deserialize_with = "lenient_f64")]
    pub total_paid: f64,
    #[serde(default, alias = "unpaid_bonuses", deserialize_with = "lenient_i64")]
    pub unpaid_count: i64,
}

/// A single bonus accrued by an employee action.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EmployeeBonus {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub admin_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, alias = "action", deserialize_with = "null_default")]
    pub action_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub listing_id: Option<i64>,
    #[serde(default)]
    pub listing_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_paid: bool,
    #[serde(default)]
    pub paid_at: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

/// Claims carried in the admin JWT payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    #[serde(default, alias = "employee_id", alias = "id", deserialize_with = "lenient_opt_i64")]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_default")]
    pub permissions: BTreeMap<String, bool>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub exp: Option<i64>,
}

/// Logged-in owner, persisted between visits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSession {
    pub token: String,
    pub owner_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
}

/// Owner record embedded in the login and registration responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OwnerAuthOwner {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bonus_balance: f64,
}

/// Owner login response: `{ "token": "...", "owner": { "id": 7, ... } }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OwnerAuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerAuthOwner>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OwnerAuthResponse {
    /// Session to persist after a successful login or registration.
    ///
    /// # Errors
    ///
    /// Returns the remote error, or a generic message when the token or
    /// owner record is missing.
    pub fn into_session(self) -> Result<OwnerSession, String> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(error);
        }
        match (self.token.filter(|t| !t.is_empty()), self.owner.filter(|o| o.id > 0)) {
            (Some(token), Some(owner)) => Ok(OwnerSession { token, owner_id: owner.id, full_name: owner.full_name }),
            _ => Err("Сервер не вернул данные входа".to_owned()),
        }
    }
}

/// Generic `{ "error": "..." }` envelope returned on failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
