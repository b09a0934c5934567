//! Onboarding wizard state for new listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/add-listing` walks a prospective owner through six steps. Each step
//! component edits a slice of one flat `ListingDraft` by emitting a
//! `DraftPatch`; the review step submits the accumulated draft as JSON.
//!
//! DESIGN
//! ======
//! Validation is synchronous and per step. `next` refuses to advance while
//! the current step has errors; `back` never validates.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::types::MetroStation;

pub const LISTING_TYPES: [&str; 2] = ["Отель/Гостиница", "Апартаменты/Квартира"];

pub const PARKING_FREE: &str = "Бесплатная";
pub const PARKING_PAID: &str = "Платная";

pub const LISTING_FEATURES: [&str; 30] = [
    "Wi-Fi",
    "Кондиционер",
    "Телевизор",
    "Мини-бар",
    "Сейф",
    "Фен",
    "Халаты",
    "Тапочки",
    "Утюг",
    "Балкон",
    "Душ",
    "Ванна",
    "Джакузи",
    "Сауна",
    "Бассейн",
    "Фитнес-зал",
    "Ресторан",
    "Бар",
    "Завтрак включен",
    "Круглосуточный ресепшн",
    "Консьерж",
    "Трансфер",
    "Прачечная",
    "Химчистка",
    "Room service",
    "Лифт",
    "Детская кроватка",
    "Разрешены животные",
    "Курение запрещено",
    "Гипоаллергенные номера",
];

pub const ROOM_FEATURES: [&str; 17] = [
    "Wi-Fi",
    "Кондиционер",
    "Телевизор",
    "Мини-бар",
    "Сейф",
    "Фен",
    "Халаты",
    "Тапочки",
    "Утюг",
    "Балкон",
    "Джакузи",
    "Кухня",
    "PlayStation",
    "Душевая кабина",
    "Ванна",
    "Двуспальная кровать",
    "Односпальная кровать",
];

const DEFAULT_PAYMENT_METHODS: &str = "Наличные, банковская карта при заселении";
const DEFAULT_CANCELLATION: &str = "Бесплатная отмена за 1 час до заселения";

/// Field name -> message for the fields that failed validation.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Owner,
    Basic,
    Location,
    Rooms,
    Contacts,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 6] = [Self::Owner, Self::Basic, Self::Location, Self::Rooms, Self::Contacts, Self::Review];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Owner => "О вас",
            Self::Basic => "Основная информация",
            Self::Location => "Местоположение",
            Self::Rooms => "Номера",
            Self::Contacts => "Контакты",
            Self::Review => "Проверка",
        }
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

// =============================================================================
// DRAFT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i64,
    pub description: String,
    pub images: Vec<String>,
    pub square_meters: i64,
    pub features: Vec<String>,
    pub min_hours: i64,
    pub payment_methods: String,
    pub cancellation_policy: String,
}

impl Default for RoomDraft {
    fn default() -> Self {
        Self {
            kind: String::new(),
            price: 0,
            description: String::new(),
            images: Vec::new(),
            square_meters: 0,
            features: Vec::new(),
            min_hours: 1,
            payment_methods: DEFAULT_PAYMENT_METHODS.to_owned(),
            cancellation_policy: DEFAULT_CANCELLATION.to_owned(),
        }
    }
}

/// Everything collected by the wizard, in the shape the submission
/// function expects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub owner_full_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    pub owner_telegram: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub district: String,
    pub description: String,
    pub features: Vec<String>,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub metro_stations: Vec<MetroStation>,
    pub has_parking: bool,
    pub parking_type: String,
    pub parking_price_per_hour: i64,
    pub rooms: Vec<RoomDraft>,
    pub phone: String,
    pub telegram: String,
    pub logo_url: String,
}

/// Partial update emitted by a step; `Some` fields override the draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftPatch {
    pub owner_full_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_telegram: Option<String>,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub address: Option<String>,
    pub lat: Option<Option<f64>>,
    pub lng: Option<Option<f64>>,
    pub metro_stations: Option<Vec<MetroStation>>,
    pub has_parking: Option<bool>,
    pub parking_type: Option<String>,
    pub parking_price_per_hour: Option<i64>,
    pub rooms: Option<Vec<RoomDraft>>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub logo_url: Option<String>,
}

macro_rules! override_fields {
    ($draft:ident, $patch:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $draft.$field = value;
            }
        )+
    };
}

impl ListingDraft {
    /// Shallow merge: every field present in `patch` replaces the draft value.
    pub fn merge(&mut self, patch: DraftPatch) {
        let draft = self;
        override_fields!(
            draft, patch;
            owner_full_name, owner_email, owner_phone, owner_telegram,
            title, kind, city, district, description, features,
            address, lat, lng, metro_stations, has_parking, parking_type, parking_price_per_hour,
            rooms, phone, telegram, logo_url,
        );
    }

    /// Turning parking off also clears its type and price.
    pub fn set_parking(&mut self, enabled: bool) {
        self.has_parking = enabled;
        if !enabled {
            self.parking_type.clear();
            self.parking_price_per_hour = 0;
        }
    }

    pub fn add_metro(&mut self) {
        self.metro_stations.push(MetroStation::default());
    }

    pub fn update_metro(&mut self, index: usize, station: MetroStation) {
        if let Some(slot) = self.metro_stations.get_mut(index) {
            *slot = station;
        }
    }

    pub fn remove_metro(&mut self, index: usize) {
        if index < self.metro_stations.len() {
            self.metro_stations.remove(index);
        }
    }

    pub fn remove_room(&mut self, index: usize) {
        if index < self.rooms.len() {
            self.rooms.remove(index);
        }
    }

    /// Insert a copy right after the original.
    pub fn duplicate_room(&mut self, index: usize) {
        if let Some(room) = self.rooms.get(index).cloned() {
            self.rooms.insert(index + 1, room);
        }
    }

    /// Move a room to a new position (drag-and-drop reorder).
    pub fn move_room(&mut self, from: usize, to: usize) {
        if from >= self.rooms.len() || to >= self.rooms.len() || from == to {
            return;
        }
        let room = self.rooms.remove(from);
        self.rooms.insert(to, room);
    }

    /// JSON body for the submission function.
    #[must_use]
    pub fn submission_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Add `feature` when absent, remove it when present.
pub fn toggle_feature(features: &mut Vec<String>, feature: &str) {
    if let Some(pos) = features.iter().position(|f| f == feature) {
        features.remove(pos);
    } else {
        features.push(feature.to_owned());
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn require(errors: &mut FieldErrors, value: &str, field: &'static str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

#[must_use]
pub fn validate_step(step: WizardStep, draft: &ListingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        WizardStep::Owner => {
            require(&mut errors, &draft.owner_full_name, "owner_full_name", "Укажите ваше имя");
            if draft.owner_email.trim().is_empty() {
                errors.insert("owner_email", "Укажите email");
            } else if !is_valid_email(&draft.owner_email) {
                errors.insert("owner_email", "Неверный формат email");
            }
            require(&mut errors, &draft.owner_phone, "owner_phone", "Укажите телефон");
        }
        WizardStep::Basic => {
            require(&mut errors, &draft.title, "title", "Укажите название объекта");
            require(&mut errors, &draft.kind, "type", "Выберите тип объекта");
            require(&mut errors, &draft.city, "city", "Укажите город");
            require(&mut errors, &draft.district, "district", "Укажите район");
        }
        WizardStep::Location => {
            require(&mut errors, &draft.address, "address", "Укажите адрес");
            if draft.has_parking && draft.parking_type == PARKING_PAID && draft.parking_price_per_hour <= 0 {
                errors.insert("parking_price_per_hour", "Укажите стоимость парковки");
            }
        }
        WizardStep::Rooms => {
            if draft.rooms.is_empty() {
                errors.insert("rooms", "Добавьте хотя бы один номер");
            }
        }
        WizardStep::Contacts => {
            require(&mut errors, &draft.phone, "phone", "Укажите телефон для гостей");
        }
        WizardStep::Review => {}
    }
    errors
}

#[must_use]
pub fn validate_room(room: &RoomDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, &room.kind, "type", "Укажите тип номера");
    if room.price <= 0 {
        errors.insert("price", "Укажите корректную цену");
    }
    errors
}

// =============================================================================
// WIZARD
// =============================================================================

/// Room being composed in the rooms step before it joins the draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomEditor {
    pub room: RoomDraft,
    /// Index of the draft room being edited, `None` when adding.
    pub editing: Option<usize>,
    pub errors: FieldErrors,
}

#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: ListingDraft,
    pub errors: FieldErrors,
    pub room_editor: RoomEditor,
    pub submitting: bool,
}

impl WizardState {
    pub fn update(&mut self, patch: DraftPatch) {
        self.draft.merge(patch);
    }

    /// Validate the current step and advance when it is clean.
    pub fn next(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.draft);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        self.errors.clear();
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    #[must_use]
    pub fn progress(&self) -> String {
        format!("Шаг {} из {}", self.step.index() + 1, WizardStep::ALL.len())
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::Review
    }

    /// Validate the room editor and add or replace the room in the draft.
    pub fn save_room(&mut self) -> bool {
        let errors = validate_room(&self.room_editor.room);
        if !errors.is_empty() {
            self.room_editor.errors = errors;
            return false;
        }
        let room = std::mem::take(&mut self.room_editor.room);
        match self.room_editor.editing.take() {
            Some(index) if index < self.draft.rooms.len() => self.draft.rooms[index] = room,
            _ => self.draft.rooms.push(room),
        }
        self.room_editor.errors.clear();
        self.errors.remove("rooms");
        true
    }

    pub fn edit_room(&mut self, index: usize) {
        if let Some(room) = self.draft.rooms.get(index) {
            self.room_editor = RoomEditor { room: room.clone(), editing: Some(index), errors: FieldErrors::new() };
        }
    }

    pub fn cancel_room_edit(&mut self) {
        self.room_editor = RoomEditor::default();
    }

    pub fn remove_room(&mut self, index: usize) {
        self.draft.remove_room(index);
        match self.room_editor.editing {
            Some(editing) if editing == index => self.cancel_room_edit(),
            Some(editing) if editing > index => self.room_editor.editing = Some(editing - 1),
            _ => {}
        }
    }
}
