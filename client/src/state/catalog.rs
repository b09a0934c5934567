//! Public catalog state: search, filters, ordering, pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page and the city landing pages render the public listings
//! returned by `public-listings`. Ordering follows the auction position so
//! paid placements come first.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Listing;

pub const ALL_CITIES: &str = "Все города";
pub const ALL_TYPES: &str = "all";
pub const PAGE_SIZE: usize = 12;

/// Auction positions at or above this rank get the TOP badge.
pub const TOP_POSITION: i64 = 3;

/// How the catalog results are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogView {
    #[default]
    Grid,
    Map,
}

#[derive(Clone, Debug)]
pub struct CatalogState {
    pub listings: Vec<Listing>,
    pub loading: bool,
    pub query: String,
    pub city: String,
    pub kind: String,
    pub view: CatalogView,
    pub page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            loading: false,
            query: String::new(),
            city: ALL_CITIES.to_owned(),
            kind: ALL_TYPES.to_owned(),
            view: CatalogView::Grid,
            page: 0,
        }
    }
}

#[must_use]
pub fn is_top(listing: &Listing) -> bool {
    listing.auction <= TOP_POSITION
}

impl CatalogState {
    /// Changing any filter returns to the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 0;
    }

    pub fn set_city(&mut self, city: String) {
        self.city = city;
        self.page = 0;
    }

    pub fn set_kind(&mut self, kind: String) {
        self.kind = kind;
        self.page = 0;
    }

    /// City options for the filter, starting with "all cities".
    #[must_use]
    pub fn city_options(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.listings.iter().map(|l| l.city.clone()).filter(|c| !c.is_empty()).collect();
        cities.sort();
        cities.dedup();
        cities.insert(0, ALL_CITIES.to_owned());
        cities
    }

    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let city_match = self.city == ALL_CITIES || listing.city == self.city;
        let kind_match = self.kind == ALL_TYPES || listing.kind == self.kind;
        let query = self.query.trim().to_lowercase();
        let query_match = query.is_empty()
            || [&listing.title, &listing.city, &listing.district].iter().any(|field| field.to_lowercase().contains(&query));
        city_match && kind_match && query_match
    }

    /// Matching listings ordered by auction position, then id.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Listing> {
        let mut out: Vec<&Listing> = self.listings.iter().filter(|l| self.matches(l)).collect();
        out.sort_by_key(|l| (l.auction, l.id));
        out
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Current page, clamped to the last page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page.min(self.page_count() - 1)
    }

    #[must_use]
    pub fn page_items(&self) -> Vec<&Listing> {
        let start = self.current_page() * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }
}

// =============================================================================
// CITY LANDING PAGES
// =============================================================================

/// Static copy for a city landing page at `/city/{slug}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CityInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 4],
}

pub const CITIES: [CityInfo; 8] = [
    CityInfo {
        slug: "moskva",
        name: "Москва",
        region: "Центральный федеральный округ",
        description: "Почасовая аренда номеров в отелях Москвы от 2 часов. Более 150 проверенных объектов в разных районах столицы.",
        highlights: ["Более 150 отелей", "От 500₽ за 2 часа", "Центр и районы", "Круглосуточно"],
    },
    CityInfo {
        slug: "sankt-peterburg",
        name: "Санкт-Петербург",
        region: "Северо-Западный федеральный округ",
        description: "Почасовая аренда номеров в отелях Санкт-Петербурга от 2 часов. Удобное расположение, проверенные объекты.",
        highlights: ["Более 100 отелей", "От 450₽ за 2 часа", "Центр и Васильевский остров", "24/7"],
    },
    CityInfo {
        slug: "kazan",
        name: "Казань",
        region: "Приволжский федеральный округ",
        description: "Почасовая аренда номеров в отелях Казани от 2 часов. Доступные цены, удобные локации.",
        highlights: ["50+ отелей", "От 400₽ за 2 часа", "Центр и районы", "Быстрое бронирование"],
    },
    CityInfo {
        slug: "ekaterinburg",
        name: "Екатеринбург",
        region: "Уральский федеральный округ",
        description: "Почасовая аренда номеров в отелях Екатеринбурга от 2 часов. Широкий выбор вариантов размещения.",
        highlights: ["70+ отелей", "От 350₽ за 2 часа", "Все районы города", "Без комиссии"],
    },
    CityInfo {
        slug: "novosibirsk",
        name: "Новосибирск",
        region: "Сибирский федеральный округ",
        description: "Почасовая аренда номеров в отелях Новосибирска от 2 часов. Качественные номера по доступным ценам.",
        highlights: ["60+ отелей", "От 350₽ за 2 часа", "Правый и левый берег", "Проверенные объекты"],
    },
    CityInfo {
        slug: "nizhniy-novgorod",
        name: "Нижний Новгород",
        region: "Приволжский федеральный округ",
        description: "Почасовая аренда номеров в отелях Нижнего Новгорода от 2 часов.",
        highlights: ["40+ отелей", "От 300₽ за 2 часа", "Центр и районы", "Онлайн бронирование"],
    },
    CityInfo {
        slug: "samara",
        name: "Самара",
        region: "Приволжский федеральный округ",
        description: "Почасовая аренда номеров в отелях Самары от 2 часов.",
        highlights: ["45+ отелей", "От 350₽ за 2 часа", "Центр и районы", "Круглосуточно"],
    },
    CityInfo {
        slug: "rostov-na-donu",
        name: "Ростов-на-Дону",
        region: "Южный федеральный округ",
        description: "Почасовая аренда номеров в отелях Ростова-на-Дону от 2 часов.",
        highlights: ["50+ отелей", "От 350₽ за 2 часа", "Центр и районы", "Проверенные объекты"],
    },
];

#[must_use]
pub fn city_by_slug(slug: &str) -> Option<&'static CityInfo> {
    CITIES.iter().find(|c| c.slug == slug)
}

#[must_use]
pub fn slug_for_city(name: &str) -> Option<&'static str> {
    CITIES.iter().find(|c| c.name == name).map(|c| c.slug)
}
