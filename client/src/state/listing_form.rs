//! Listing edit form shared by the admin panel and the owner dashboard.
//!
//! Inputs are kept as text so partially typed numbers survive re-renders;
//! parsing happens once in `validate`/`payload`.

#[cfg(test)]
#[path = "listing_form_test.rs"]
mod listing_form_test;

use serde_json::{Value, json};

use crate::net::types::Listing;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub kind: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub price: String,
    pub phone: String,
    pub telegram: String,
    pub description: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub lat: String,
    pub lng: String,
    pub expert_photo_rating: String,
    pub expert_fullness_rating: String,
}

fn text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Empty text is `None`; anything else must parse.
fn optional_number(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim().replace(',', ".");
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>().map(Some).map_err(|_| ())
}

fn rating(raw: &str) -> Result<Option<f64>, &'static str> {
    match optional_number(raw) {
        Ok(Some(v)) if !(0.0..=10.0).contains(&v) => Err("Оценка от 0 до 10"),
        Ok(v) => Ok(v),
        Err(()) => Err("Оценка от 0 до 10"),
    }
}

impl ListingForm {
    #[must_use]
    pub fn from_listing(listing: &Listing) -> Self {
        let mut images = listing.images.clone();
        if let Some(cover) = listing.image_url.as_ref().filter(|u| !u.is_empty()) {
            if !images.contains(cover) {
                images.insert(0, cover.clone());
            }
        }
        Self {
            title: listing.title.clone(),
            kind: listing.kind.clone(),
            city: listing.city.clone(),
            district: listing.district.clone(),
            address: listing.address.clone(),
            price: if listing.price > 0 { listing.price.to_string() } else { String::new() },
            phone: listing.phone.clone().unwrap_or_default(),
            telegram: listing.telegram.clone().unwrap_or_default(),
            description: listing.description.clone().unwrap_or_default(),
            images,
            features: listing.features.clone(),
            lat: text(listing.lat),
            lng: text(listing.lng),
            expert_photo_rating: text(listing.expert_photo_rating),
            expert_fullness_rating: text(listing.expert_fullness_rating),
        }
    }

    /// # Errors
    ///
    /// Returns the first user-facing problem.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Укажите название объекта");
        }
        if self.city.trim().is_empty() {
            return Err("Укажите город");
        }
        if !self.price.trim().is_empty() && self.price.trim().parse::<u32>().is_err() {
            return Err("Укажите корректную цену");
        }
        if optional_number(&self.lat).is_err() || optional_number(&self.lng).is_err() {
            return Err("Координаты должны быть числами");
        }
        rating(&self.expert_photo_rating)?;
        rating(&self.expert_fullness_rating)?;
        Ok(())
    }

    /// Body for create/update; the first image doubles as the cover.
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({
            "title": self.title.trim(),
            "type": self.kind,
            "city": self.city.trim(),
            "district": self.district.trim(),
            "address": self.address.trim(),
            "price": self.price.trim().parse::<u32>().unwrap_or(0),
            "phone": self.phone.trim(),
            "telegram": self.telegram.trim(),
            "description": self.description,
            "images": self.images,
            "image_url": self.images.first(),
            "features": self.features,
            "lat": optional_number(&self.lat).ok().flatten(),
            "lng": optional_number(&self.lng).ok().flatten(),
        })
    }

    #[must_use]
    pub fn ratings_payload(&self) -> Value {
        json!({
            "expert_photo_rating": rating(&self.expert_photo_rating).ok().flatten(),
            "expert_fullness_rating": rating(&self.expert_fullness_rating).ok().flatten(),
        })
    }

    /// Whether the expert ratings differ from what `listing` carries.
    #[must_use]
    pub fn ratings_changed(&self, listing: &Listing) -> bool {
        rating(&self.expert_photo_rating).ok().flatten() != listing.expert_photo_rating
            || rating(&self.expert_fullness_rating).ok().flatten() != listing.expert_fullness_rating
    }
}
