use super::*;

fn listing(id: i64, title: &str, city: &str, district: &str, auction: i64) -> Listing {
    Listing {
        id,
        title: title.to_owned(),
        city: city.to_owned(),
        district: district.to_owned(),
        kind: "Отель/Гостиница".to_owned(),
        auction,
        ..Listing::default()
    }
}

fn sample() -> CatalogState {
    CatalogState {
        listings: vec![
            listing(1, "Отель «Тверская»", "Москва", "ЦАО", 5),
            listing(2, "Апарт-отель «Невский»", "Санкт-Петербург", "Центральный", 2),
            listing(3, "Отель «Арбат Плаза»", "Москва", "Арбат", 1),
            listing(4, "Кремлевские", "Казань", "Вахитовский", 999),
            listing(5, "Центр", "Москва", "Хамовники", 5),
        ],
        ..CatalogState::default()
    }
}

fn ids(items: &[&Listing]) -> Vec<i64> {
    items.iter().map(|l| l.id).collect()
}

#[test]
fn default_shows_everything_by_auction_then_id() {
    assert_eq!(ids(&sample().filtered()), vec![3, 2, 1, 5, 4]);
}

#[test]
fn search_matches_title_city_or_district_case_insensitively() {
    let mut state = sample();
    state.set_query("арбат".to_owned());
    assert_eq!(ids(&state.filtered()), vec![3]);
    state.set_query("МОСКВА".to_owned());
    assert_eq!(ids(&state.filtered()), vec![3, 1, 5]);
    state.set_query("  хамов ".to_owned());
    assert_eq!(ids(&state.filtered()), vec![5]);
}

#[test]
fn city_and_type_filters() {
    let mut state = sample();
    state.set_city("Казань".to_owned());
    assert_eq!(ids(&state.filtered()), vec![4]);
    state.set_city(ALL_CITIES.to_owned());
    state.set_kind("Апартаменты/Квартира".to_owned());
    assert!(state.filtered().is_empty());
    assert_eq!(state.page_count(), 1);
}

#[test]
fn top_badge_for_first_three_positions() {
    assert!(is_top(&listing(1, "", "", "", 3)));
    assert!(!is_top(&listing(1, "", "", "", 4)));
}

#[test]
fn city_options_start_with_all() {
    assert_eq!(
        sample().city_options(),
        vec![ALL_CITIES.to_owned(), "Казань".to_owned(), "Москва".to_owned(), "Санкт-Петербург".to_owned()]
    );
}

#[test]
fn pagination_clamps_and_resets_on_filter_change() {
    let mut state = CatalogState {
        listings: (1..=30).map(|id| listing(id, "Отель", "Москва", "ЦАО", 999)).collect(),
        ..CatalogState::default()
    };
    assert_eq!(state.page_count(), 3);
    state.go_to_page(2);
    assert_eq!(state.page_items().len(), 6);
    assert_eq!(state.page_items()[0].id, 25);
    state.go_to_page(10);
    assert_eq!(state.current_page(), 2);
    state.set_query("отель".to_owned());
    assert_eq!(state.current_page(), 0);
    assert_eq!(state.page_items().len(), PAGE_SIZE);
}

#[test]
fn city_slugs_resolve_both_ways() {
    assert_eq!(city_by_slug("kazan").map(|c| c.name), Some("Казань"));
    assert_eq!(city_by_slug("atlantis"), None);
    assert_eq!(slug_for_city("Нижний Новгород"), Some("nizhniy-novgorod"));
}
