//! REST helpers for the remote marketplace functions.
//!
//! Every call goes to the same-origin `/api/{service}` prefix; the server
//! relays it to the configured function URL. Client-side (hydrate) requests
//! use `gloo-net`. Server-side (SSR) the helpers return an error since data
//! is fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so pages can show the message in a toast.
//! The remote reports failures either with a non-2xx status or with a 200
//! body of `{ "error": "..." }`; both become `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::types::{
    AuctionInfo, BidReceipt, BonusSummary, Employee, EmployeeBonus, ErrorBody, Listing, ListingStats, Owner, OwnerAuthResponse, Room,
    SubscriptionInfo, Top20Receipt, Top20Response, Transaction, TransactionsResponse,
};

pub const API_PREFIX: &str = "/api";

/// Page size used by the admin panel when loading the full inventory.
pub const ADMIN_PAGE_LIMIT: u32 = 1000;

/// Remote function behind `/api/{service}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    AdminAuth,
    AdminListings,
    AdminUpload,
    AdminOwners,
    AdminEmployees,
    OwnerAuth,
    OwnerListings,
    OwnerUpdateListing,
    OwnerTransactions,
    ListingSubmission,
    PublicListings,
    Statistics,
    Subscription,
    Top20,
    Auction,
    EmployeeBonuses,
}

impl Service {
    pub const ALL: [Self; 16] = [
        Self::AdminAuth,
        Self::AdminListings,
        Self::AdminUpload,
        Self::AdminOwners,
        Self::AdminEmployees,
        Self::OwnerAuth,
        Self::OwnerListings,
        Self::OwnerUpdateListing,
        Self::OwnerTransactions,
        Self::ListingSubmission,
        Self::PublicListings,
        Self::Statistics,
        Self::Subscription,
        Self::Top20,
        Self::Auction,
        Self::EmployeeBonuses,
    ];

    /// Service behind a `/api/{name}` path segment.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AdminAuth => "admin-auth",
            Self::AdminListings => "admin-listings",
            Self::AdminUpload => "admin-upload",
            Self::AdminOwners => "admin-owners",
            Self::AdminEmployees => "admin-employees",
            Self::OwnerAuth => "owner-auth",
            Self::OwnerListings => "owner-listings",
            Self::OwnerUpdateListing => "owner-update-listing",
            Self::OwnerTransactions => "owner-transactions",
            Self::ListingSubmission => "owner-listing-submission",
            Self::PublicListings => "public-listings",
            Self::Statistics => "statistics",
            Self::Subscription => "subscription",
            Self::Top20 => "top20",
            Self::Auction => "auction",
            Self::EmployeeBonuses => "employee-bonuses",
        }
    }

    /// Deployed function id on the hosting platform.
    #[must_use]
    pub fn function_id(self) -> &'static str {
        match self {
            Self::AdminAuth => "f446518c-113b-41ed-8bdc-17ef6babda08",
            Self::AdminListings => "5dea57de-4652-4870-b39f-6b34e594bc21",
            Self::AdminUpload => "22c1da70-b8a6-4b5e-81b8-330b559a8943",
            Self::AdminOwners => "25475092-b74f-493d-a43c-082847302085",
            Self::AdminEmployees => "ca59381a-030d-421c-8c98-057bb7ae12e4",
            Self::OwnerAuth => "381f57fd-5365-49e9-bb38-088d8db34102",
            Self::OwnerListings => "f431775b-031f-4417-b3eb-9e0475119162",
            Self::OwnerUpdateListing => "3e708f67-7174-4fd3-84a6-6541bcc2186b",
            Self::OwnerTransactions => "d65e7c1b-75b3-4a33-965b-70ee3a543a50",
            Self::ListingSubmission => "ee10a4fa-4437-4fe1-87b7-36ebaf726da9",
            Self::PublicListings => "38a2f104-026e-40ea-80dc-0c07c014f868",
            Self::Statistics => "0b408e53-8bd4-4f19-a1b5-9403bb03cffd",
            Self::Subscription => "083c2fbe-03b3-474d-accd-281d4089bb06",
            Self::Top20 => "3a7d0c03-532a-459f-9580-a416ebac4e41",
            Self::Auction => "8e5ad1a2-e9bb-462c-baba-212ad26ae9a7",
            Self::EmployeeBonuses => "e7b4566b-8aa8-4db2-a866-4ba2231208a3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Header carrying the bearer token. Back-office functions read the
/// `X-Authorization` variant because their gateway strips `Authorization`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthHeader {
    Standard,
    Extended,
}

impl AuthHeader {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Authorization",
            Self::Extended => "X-Authorization",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Auth {
    header: AuthHeader,
    token: String,
}

impl Auth {
    /// `None` for an empty token, so callers never send a bare `Bearer `.
    fn standard(token: &str) -> Option<Self> {
        (!token.is_empty()).then(|| Self { header: AuthHeader::Standard, token: token.to_owned() })
    }

    fn extended(token: &str) -> Option<Self> {
        (!token.is_empty()).then(|| Self { header: AuthHeader::Extended, token: token.to_owned() })
    }

    fn value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Build `/api/{service}` with a percent-encoded query string.
pub(crate) fn service_url(service: Service, query: &[(&str, String)]) -> String {
    let base = format!("{API_PREFIX}/{}", service.name());
    if query.is_empty() {
        return base;
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        serializer.append_pair(key, value);
    }
    format!("{base}?{}", serializer.finish())
}

/// Message for a non-2xx response: the remote `error` field when present.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Rows from either a bare array or an object holding the array under `key`.
pub(crate) fn rows_in<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, String> {
    let rows = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove(key).unwrap_or(Value::Array(Vec::new())),
        Value::Null => Value::Array(Vec::new()),
        other => return Err(format!("unexpected response: {other}")),
    };
    serde_json::from_value(rows).map_err(|e| format!("unexpected response: {e}"))
}

/// Decode a 2xx payload, treating `{ "error": "..." }` bodies as failures.
pub(crate) fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    if let Some(err) = value.get("error").and_then(Value::as_str) {
        return Err(err.to_owned());
    }
    serde_json::from_value(value).map_err(|e| format!("unexpected response: {e}"))
}

async fn request<T: DeserializeOwned>(
    method: Method,
    url: String,
    auth: Option<Auth>,
    body: Option<Value>,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(auth) = &auth {
            builder = builder.header(auth.header.name(), &auth.value());
        }
        let resp = match &body {
            Some(payload) => builder.json(payload).map_err(|e| e.to_string())?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("{method:?} {url} failed: {status}");
            return Err(error_message(status, &text));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| format!("unexpected response: {e}"))?
        };
        decode_payload(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, auth, body);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

/// `POST admin-auth` with login + password.
///
/// # Errors
///
/// Returns the remote error message when the credentials are rejected.
pub async fn admin_login(login: &str, password: &str) -> Result<AdminLoginResponse, String> {
    let body = json!({ "email": login, "password": password });
    request(Method::Post, service_url(Service::AdminAuth, &[]), None, Some(body)).await
}

/// Register a new owner account.
///
/// # Errors
///
/// Returns the remote error message on failure.
pub async fn owner_register(
    email: &str,
    password: &str,
    full_name: &str,
    phone: &str,
) -> Result<OwnerAuthResponse, String> {
    let body = json!({
        "action": "register",
        "email": email,
        "password": password,
        "full_name": full_name,
        "phone": phone,
    });
    request(Method::Post, service_url(Service::OwnerAuth, &[]), None, Some(body)).await
}

/// Log an owner in by email.
///
/// # Errors
///
/// Returns the remote error message when the credentials are rejected.
pub async fn owner_login(email: &str, password: &str) -> Result<OwnerAuthResponse, String> {
    let body = json!({ "action": "login", "email": email, "password": password });
    request(Method::Post, service_url(Service::OwnerAuth, &[]), None, Some(body)).await
}

// =============================================================================
// ADMIN LISTINGS
// =============================================================================

pub(crate) fn listings_query(archived: bool, limit: u32, offset: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(3);
    if archived {
        query.push(("archived", "true".to_owned()));
    }
    query.push(("limit", limit.to_string()));
    query.push(("offset", offset.to_string()));
    query
}

/// Fetch one page of admin listings.
///
/// # Errors
///
/// Returns an error string when the request fails or the body is not a list.
pub async fn list_listings(token: &str, archived: bool, limit: u32, offset: u32) -> Result<Vec<Listing>, String> {
    let url = service_url(Service::AdminListings, &listings_query(archived, limit, offset));
    request(Method::Get, url, Auth::standard(token), None).await
}

/// Fetch one listing with rooms for editing.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn get_listing(token: &str, id: i64) -> Result<Listing, String> {
    let url = service_url(Service::AdminListings, &[("id", id.to_string())]);
    request(Method::Get, url, Auth::standard(token), None).await
}

/// Listings in a moderation queue (`pending`, `awaiting_recheck`, `rejected`).
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn moderation_queue(token: &str, status: &str) -> Result<Vec<Listing>, String> {
    let url = service_url(Service::AdminListings, &[("moderation", status.to_owned())]);
    request(Method::Get, url, Auth::extended(token), None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn create_listing(token: &str, data: &Value) -> Result<Listing, String> {
    let url = service_url(Service::AdminListings, &[]);
    request(Method::Post, url, Auth::standard(token), Some(data.clone())).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn update_listing(token: &str, id: i64, data: &Value) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", id.to_string())]);
    request(Method::Put, url, Auth::standard(token), Some(data.clone())).await
}

/// Move a listing to the archive (soft delete).
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn archive_listing(token: &str, id: i64) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", id.to_string())]);
    request(Method::Delete, url, Auth::standard(token), None).await
}

/// Permanently delete a listing (superadmin only).
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn delete_listing(token: &str, id: i64) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", id.to_string()), ("permanent", "true".to_owned())]);
    request(Method::Delete, url, Auth::extended(token), None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn unarchive_listing(token: &str, id: i64) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", id.to_string())]);
    request(Method::Patch, url, Auth::standard(token), Some(json!({ "is_archived": false }))).await
}

/// Set the catalog position of a listing.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn update_position(token: &str, listing_id: i64, position: i64) -> Result<Value, String> {
    let body = json!({ "action": "update_position", "listing_id": listing_id, "position": position });
    request(Method::Patch, service_url(Service::AdminListings, &[]), Auth::extended(token), Some(body)).await
}

/// Record a moderation decision.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn moderate_listing(token: &str, listing_id: i64, status: &str, comment: &str) -> Result<Value, String> {
    let body = json!({ "action": "moderate", "listing_id": listing_id, "status": status, "comment": comment });
    request(Method::Patch, service_url(Service::AdminListings, &[]), Auth::extended(token), Some(body)).await
}

/// Owner-side: ask moderators to re-check an edited listing.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn submit_for_recheck(token: &str, listing_id: i64) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", listing_id.to_string())]);
    let body = json!({ "action": "submit_for_recheck" });
    request(Method::Patch, url, Auth::standard(token), Some(body)).await
}

/// Save expert ratings for a listing and its rooms.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn update_expert_ratings(token: &str, listing_id: i64, data: &Value) -> Result<Value, String> {
    let url = service_url(Service::AdminListings, &[("id", listing_id.to_string())]);
    request(Method::Put, url, Auth::standard(token), Some(data.clone())).await
}

#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct UploadBody<'a> {
    pub image: &'a str,
    #[serde(rename = "contentType")]
    pub content_type: &'a str,
    pub filename: &'a str,
}

/// Upload one image given as a `data:` URL. Returns the public URL.
/// The onboarding wizard uploads without a token.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn upload_photo(
    token: Option<&str>,
    data_url: &str,
    content_type: &str,
    filename: &str,
) -> Result<String, String> {
    let body = serde_json::to_value(UploadBody { image: data_url, content_type, filename }).map_err(|e| e.to_string())?;
    let auth = token.and_then(Auth::standard);
    let resp: UploadResponse = request(Method::Post, service_url(Service::AdminUpload, &[]), auth, Some(body)).await?;
    Ok(resp.url)
}

// =============================================================================
// PUBLIC CATALOG
// =============================================================================

/// # Errors
///
/// Returns an error string on failure.
pub async fn public_listings() -> Result<Vec<Listing>, String> {
    request(Method::Get, service_url(Service::PublicListings, &[]), None, None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn room_details(listing_id: i64, room_index: usize) -> Result<Room, String> {
    let url = service_url(
        Service::PublicListings,
        &[("listing_id", listing_id.to_string()), ("room_index", room_index.to_string())],
    );
    request(Method::Get, url, None, None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn top20_positions(city: &str) -> Result<Top20Response, String> {
    let url = service_url(Service::Top20, &[("city", city.to_owned())]);
    request(Method::Get, url, None, None).await
}

/// Book a free TOP-20 slot for 30 days, paid from the owner balance.
///
/// # Errors
///
/// Returns the remote message (slot taken, short subscription, low balance).
pub async fn book_top20(token: &str, listing_id: i64, city: &str, position: i64) -> Result<Top20Receipt, String> {
    let body = json!({ "action": "book_position", "city": city, "position": position, "listing_id": listing_id });
    request(Method::Post, service_url(Service::Top20, &[]), Auth::extended(token), Some(body)).await
}

/// Auction ranking for a city.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn auction_info(city: &str) -> Result<AuctionInfo, String> {
    let url = service_url(Service::Auction, &[("city", city.to_owned())]);
    request(Method::Get, url, None, None).await
}

/// What an owner offers for a catalog position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bid {
    pub owner_id: i64,
    pub listing_id: i64,
    pub city: String,
    pub target_position: i64,
    pub bid_amount: i64,
}

pub(crate) fn bid_body(bid: &Bid) -> Value {
    json!({
        "action": "place_bid",
        "owner_id": bid.owner_id,
        "listing_id": bid.listing_id,
        "city": bid.city,
        "target_position": bid.target_position,
        "bid_amount": bid.bid_amount,
    })
}

/// # Errors
///
/// Returns the remote message (bid too low, insufficient balance).
pub async fn place_bid(token: &str, bid: &Bid) -> Result<BidReceipt, String> {
    request(Method::Post, service_url(Service::Auction, &[]), Auth::extended(token), Some(bid_body(bid))).await
}

/// Daily traffic for a listing over the last `days` days.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn listing_stats(listing_id: i64, days: i64) -> Result<ListingStats, String> {
    let url = service_url(Service::Statistics, &[("listing_id", listing_id.to_string()), ("days", days.to_string())]);
    request(Method::Get, url, None, None).await
}

/// Contact kind recorded by click statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickKind {
    Phone,
    Telegram,
    General,
}

impl ClickKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Telegram => "telegram",
            Self::General => "general",
        }
    }
}

/// Record a listing view. Failures are logged and ignored.
pub async fn track_view(listing_id: i64) {
    let body = json!({ "action": "view", "listing_id": listing_id });
    if let Err(e) = request::<Value>(Method::Post, service_url(Service::Statistics, &[]), None, Some(body)).await {
        log::debug!("view tracking failed: {e}");
    }
}

/// Record a contact click. Failures are logged and ignored.
pub async fn track_click(listing_id: i64, kind: ClickKind) {
    let body = json!({ "action": "click", "listing_id": listing_id, "click_type": kind.as_str() });
    if let Err(e) = request::<Value>(Method::Post, service_url(Service::Statistics, &[]), None, Some(body)).await {
        log::debug!("click tracking failed: {e}");
    }
}

/// Send the onboarding wizard draft for moderation.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn submit_listing(payload: &Value) -> Result<Value, String> {
    request(Method::Post, service_url(Service::ListingSubmission, &[]), None, Some(payload.clone())).await
}

// =============================================================================
// OWNERS
// =============================================================================

/// # Errors
///
/// Returns an error string on failure.
pub async fn list_owners(token: &str) -> Result<Vec<Owner>, String> {
    request(Method::Get, service_url(Service::AdminOwners, &[]), Auth::extended(token), None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn create_owner(token: &str, data: &Value) -> Result<Owner, String> {
    request(Method::Post, service_url(Service::AdminOwners, &[]), Auth::extended(token), Some(data.clone())).await
}

/// `data` must carry the owner `id`.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn update_owner(token: &str, data: &Value) -> Result<Owner, String> {
    request(Method::Put, service_url(Service::AdminOwners, &[]), Auth::extended(token), Some(data.clone())).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn archive_owner(token: &str, id: i64) -> Result<Value, String> {
    let body = json!({ "id": id });
    request(Method::Delete, service_url(Service::AdminOwners, &[]), Auth::extended(token), Some(body)).await
}

/// Credit bonus rubles to an owner.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn add_bonus(token: &str, owner_id: i64, amount: i64) -> Result<Value, String> {
    let body = json!({ "action": "add_bonus", "owner_id": owner_id, "amount": amount });
    request(Method::Patch, service_url(Service::AdminOwners, &[]), Auth::extended(token), Some(body)).await
}

/// Listings that can be linked to owners (admin view of owner-listings).
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn available_listings(token: &str) -> Result<Vec<Listing>, String> {
    request(Method::Get, service_url(Service::OwnerListings, &[]), Auth::extended(token), None).await
}

/// Link a listing to an owner, or unlink it with `None`.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn assign_listing(token: &str, listing_id: i64, owner_id: Option<i64>) -> Result<Value, String> {
    let body = json!({ "listing_id": listing_id, "owner_id": owner_id });
    request(Method::Patch, service_url(Service::OwnerListings, &[]), Auth::extended(token), Some(body)).await
}

/// Listings belonging to the logged-in owner.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn owner_listings(token: &str, owner_id: i64) -> Result<Vec<Listing>, String> {
    let url = service_url(Service::OwnerListings, &[("owner_id", owner_id.to_string())]);
    request(Method::Get, url, Auth::standard(token), None).await
}

pub(crate) fn owner_update_body(listing_id: i64, data: &Value) -> Value {
    let mut body = json!({ "listing_id": listing_id });
    if let (Some(target), Some(fields)) = (body.as_object_mut(), data.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    body
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn owner_update_listing(token: &str, listing_id: i64, data: &Value) -> Result<Value, String> {
    let body = owner_update_body(listing_id, data);
    request(Method::Put, service_url(Service::OwnerUpdateListing, &[]), Auth::extended(token), Some(body)).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn owner_transactions(token: &str, owner_id: i64, limit: u32) -> Result<Vec<Transaction>, String> {
    let url = service_url(
        Service::OwnerTransactions,
        &[("owner_id", owner_id.to_string()), ("limit", limit.to_string())],
    );
    let response: TransactionsResponse = request(Method::Get, url, Auth::standard(token), None).await?;
    Ok(response.transactions)
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// # Errors
///
/// Returns an error string on failure.
pub async fn list_employees(token: &str) -> Result<Vec<Employee>, String> {
    request(Method::Get, service_url(Service::AdminEmployees, &[]), Auth::extended(token), None).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn create_employee(token: &str, data: &Value) -> Result<Value, String> {
    request(Method::Post, service_url(Service::AdminEmployees, &[]), Auth::extended(token), Some(data.clone())).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn update_employee(token: &str, id: i64, data: &Value) -> Result<Value, String> {
    let mut body = data.clone();
    if let Some(map) = body.as_object_mut() {
        map.insert("id".to_owned(), json!(id));
    }
    request(Method::Put, service_url(Service::AdminEmployees, &[]), Auth::extended(token), Some(body)).await
}

/// # Errors
///
/// Returns an error string on failure.
pub async fn delete_employee(token: &str, id: i64) -> Result<Value, String> {
    let url = service_url(Service::AdminEmployees, &[("id", id.to_string())]);
    request(Method::Delete, url, Auth::extended(token), None).await
}

// =============================================================================
// EMPLOYEE BONUSES
// =============================================================================

/// Payout totals per employee.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn bonus_summaries(token: &str) -> Result<Vec<BonusSummary>, String> {
    let value: Value = request(Method::Get, service_url(Service::EmployeeBonuses, &[]), Auth::extended(token), None).await?;
    rows_in(value, "employees")
}

/// Bonuses of one employee; unpaid only unless `include_paid`.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn employee_bonuses(token: &str, admin_id: i64, include_paid: bool) -> Result<Vec<EmployeeBonus>, String> {
    let mut query = vec![("admin_id", admin_id.to_string())];
    if include_paid {
        query.push(("paid", "true".to_owned()));
    }
    let url = service_url(Service::EmployeeBonuses, &query);
    let value: Value = request(Method::Get, url, Auth::extended(token), None).await?;
    rows_in(value, "bonuses")
}

pub(crate) fn mark_bonuses_body(bonus_ids: &[i64], paid: bool) -> Value {
    let action = if paid { "mark_paid" } else { "mark_unpaid" };
    json!({ "action": action, "bonus_ids": bonus_ids })
}

/// Flip the paid flag on a batch of bonuses.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn mark_bonuses(token: &str, bonus_ids: &[i64], paid: bool) -> Result<Value, String> {
    let body = mark_bonuses_body(bonus_ids, paid);
    request(Method::Patch, service_url(Service::EmployeeBonuses, &[]), Auth::extended(token), Some(body)).await
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

/// # Errors
///
/// Returns an error string on failure.
pub async fn subscription_info(listing_id: i64) -> Result<SubscriptionInfo, String> {
    let url = service_url(Service::Subscription, &[("listing_id", listing_id.to_string())]);
    request(Method::Get, url, None, None).await
}

/// Owner pays from balance to extend a listing subscription.
///
/// # Errors
///
/// Returns an error string on failure (for example, insufficient balance).
pub async fn extend_subscription(token: &str, owner_id: i64, listing_id: i64, days: i64) -> Result<Value, String> {
    let body = json!({
        "action": "extend_subscription",
        "owner_id": owner_id,
        "listing_id": listing_id,
        "days": days,
    });
    request(Method::Post, service_url(Service::Subscription, &[]), Auth::standard(token), Some(body)).await
}

/// Admin grants subscription days without payment.
///
/// # Errors
///
/// Returns an error string on failure.
pub async fn admin_set_subscription(token: &str, listing_id: i64, days: i64) -> Result<Value, String> {
    let body = json!({ "action": "admin_set_subscription", "listing_id": listing_id, "days": days });
    request(Method::Post, service_url(Service::Subscription, &[]), Auth::extended(token), Some(body)).await
}
