use super::*;
use crate::net::types::MetroStation;

#[test]
fn gallery_puts_cover_first_without_duplicates() {
    let listing = Listing {
        image_url: Some("b.jpg".to_owned()),
        images: vec!["a.jpg".to_owned(), "b.jpg".to_owned(), String::new()],
        ..Listing::default()
    };
    assert_eq!(gallery_images(&listing), vec!["b.jpg".to_owned(), "a.jpg".to_owned()]);
    assert!(gallery_images(&Listing::default()).is_empty());
}

#[test]
fn metro_prefers_station_list() {
    let listing = Listing {
        metro: Some("Старая".to_owned()),
        metro_walk: Some(3),
        metro_stations: vec![
            MetroStation { station_name: "Арбатская".to_owned(), walk_minutes: 5 },
            MetroStation { station_name: "Смоленская".to_owned(), walk_minutes: 0 },
            MetroStation { station_name: "  ".to_owned(), walk_minutes: 1 },
        ],
        ..Listing::default()
    };
    assert_eq!(metro_lines(&listing), vec!["Арбатская, 5 мин пешком".to_owned(), "Смоленская".to_owned()]);
}

#[test]
fn metro_falls_back_to_single_field() {
    let listing = Listing { metro: Some("Тверская".to_owned()), metro_walk: Some(7), ..Listing::default() };
    assert_eq!(metro_lines(&listing), vec!["Тверская, 7 мин пешком".to_owned()]);
    assert!(metro_lines(&Listing::default()).is_empty());
}

#[test]
fn parking_line_mentions_paid_price() {
    assert_eq!(parking_line(&Listing::default()), None);
    let free = Listing { has_parking: true, ..Listing::default() };
    assert_eq!(parking_line(&free).as_deref(), Some("Парковка"));
    let paid = Listing {
        has_parking: true,
        parking_type: Some("Платная".to_owned()),
        parking_price_per_hour: Some(150),
        ..Listing::default()
    };
    assert_eq!(parking_line(&paid).as_deref(), Some("Платная, 150 ₽ / час"));
}
