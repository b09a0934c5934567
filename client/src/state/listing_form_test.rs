use super::*;

fn sample() -> Listing {
    Listing {
        id: 4,
        title: "Отель «Арбат»".to_owned(),
        kind: "Отель/Гостиница".to_owned(),
        city: "Москва".to_owned(),
        price: 2500,
        image_url: Some("https://cdn/cover.jpg".to_owned()),
        images: vec!["https://cdn/1.jpg".to_owned()],
        lat: Some(55.75),
        expert_photo_rating: Some(8.0),
        ..Listing::default()
    }
}

#[test]
fn form_starts_from_listing_with_cover_first() {
    let form = ListingForm::from_listing(&sample());
    assert_eq!(form.images, vec!["https://cdn/cover.jpg".to_owned(), "https://cdn/1.jpg".to_owned()]);
    assert_eq!(form.price, "2500");
    assert_eq!(form.lat, "55.75");
    assert!(form.lng.is_empty());
    assert!(form.validate().is_ok());
}

#[test]
fn validation_messages() {
    let mut form = ListingForm::from_listing(&sample());
    form.price = "дорого".to_owned();
    assert_eq!(form.validate(), Err("Укажите корректную цену"));
    form.price = "100".to_owned();
    form.lat = "север".to_owned();
    assert_eq!(form.validate(), Err("Координаты должны быть числами"));
    form.lat = "55,7".to_owned();
    form.expert_fullness_rating = "11".to_owned();
    assert_eq!(form.validate(), Err("Оценка от 0 до 10"));
    form.title = " ".to_owned();
    assert_eq!(form.validate(), Err("Укажите название объекта"));
}

#[test]
fn payload_uses_wire_names_and_cover() {
    let mut form = ListingForm::from_listing(&sample());
    form.lat = "55,7".to_owned();
    let body = form.payload();
    assert_eq!(body["type"], "Отель/Гостиница");
    assert_eq!(body["image_url"], "https://cdn/cover.jpg");
    assert_eq!(body["price"], 2500);
    assert_eq!(body["lat"], 55.7);
    assert!(body["lng"].is_null());
}

#[test]
fn ratings_change_detection() {
    let listing = sample();
    let mut form = ListingForm::from_listing(&listing);
    assert!(!form.ratings_changed(&listing));
    form.expert_fullness_rating = "7".to_owned();
    assert!(form.ratings_changed(&listing));
    assert_eq!(form.ratings_payload()["expert_fullness_rating"], 7.0);
    assert_eq!(form.ratings_payload()["expert_photo_rating"], 8.0);
}
