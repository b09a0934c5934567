use super::*;

fn point(lat: f64, lng: f64, title: &str) -> MapPoint {
    MapPoint { lat, lng, title: title.to_owned(), href: Some("/listing/7".to_owned()) }
}

#[test]
fn empty_map_centers_on_default() {
    assert_eq!(center_of(&[]), DEFAULT_CENTER);
}

#[test]
fn center_is_mean_of_points() {
    let (lat, lng) = center_of(&[point(55.0, 37.0, "a"), point(57.0, 39.0, "b")]);
    assert!((lat - 56.0).abs() < 1e-9);
    assert!((lng - 38.0).abs() < 1e-9);
}

#[test]
fn state_carries_center_and_zoom() {
    let state = map_state(&[point(55.5, 37.5, "a")], 15);
    assert_eq!(state["center"], json!([55.5, 37.5]));
    assert_eq!(state["zoom"], 15);
}

#[test]
fn placemark_title_is_escaped() {
    let props = placemark_properties(&point(0.0, 0.0, "<b>Отель & Co</b>"));
    assert_eq!(props["hintContent"], "&lt;b&gt;Отель &amp; Co&lt;/b&gt;");
    assert_eq!(props["balloonContentBody"], "<a href=\"/listing/7\">Подробнее</a>");
}

#[test]
fn placemark_without_link_has_empty_body() {
    let props = placemark_properties(&MapPoint { href: None, ..point(0.0, 0.0, "x") });
    assert_eq!(props["balloonContentBody"], "");
}
