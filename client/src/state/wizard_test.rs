use super::*;

fn owner_done() -> ListingDraft {
    ListingDraft {
        owner_full_name: "Анна".to_owned(),
        owner_email: "anna@mail.ru".to_owned(),
        owner_phone: "+7 900 000-00-00".to_owned(),
        ..ListingDraft::default()
    }
}

fn priced_room(kind: &str, price: i64) -> RoomDraft {
    RoomDraft { kind: kind.to_owned(), price, ..RoomDraft::default() }
}

#[test]
fn email_shape_check() {
    assert!(is_valid_email("a@b.ru"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.ru"));
    assert!(!is_valid_email("@c.ru"));
    assert!(!is_valid_email("a@@c.ru"));
    assert!(!is_valid_email("a@.ru"));
    assert!(!is_valid_email("a@ru."));
}

#[test]
fn owner_step_reports_every_missing_field() {
    let errors = validate_step(WizardStep::Owner, &ListingDraft::default());
    assert_eq!(errors.get("owner_full_name"), Some(&"Укажите ваше имя"));
    assert_eq!(errors.get("owner_email"), Some(&"Укажите email"));
    assert_eq!(errors.get("owner_phone"), Some(&"Укажите телефон"));
}

#[test]
fn owner_step_flags_malformed_email() {
    let draft = ListingDraft { owner_email: "anna".to_owned(), ..owner_done() };
    let errors = validate_step(WizardStep::Owner, &draft);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("owner_email"), Some(&"Неверный формат email"));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let draft = ListingDraft { title: "   ".to_owned(), kind: LISTING_TYPES[0].to_owned(), ..ListingDraft::default() };
    let errors = validate_step(WizardStep::Basic, &draft);
    assert_eq!(errors.get("title"), Some(&"Укажите название объекта"));
    assert!(!errors.contains_key("type"));
    assert_eq!(errors.get("city"), Some(&"Укажите город"));
    assert_eq!(errors.get("district"), Some(&"Укажите район"));
}

#[test]
fn paid_parking_requires_price() {
    let mut draft = ListingDraft { address: "Тверская, 1".to_owned(), ..ListingDraft::default() };
    draft.has_parking = true;
    draft.parking_type = PARKING_PAID.to_owned();
    assert_eq!(
        validate_step(WizardStep::Location, &draft).get("parking_price_per_hour"),
        Some(&"Укажите стоимость парковки")
    );
    draft.parking_price_per_hour = 150;
    assert!(validate_step(WizardStep::Location, &draft).is_empty());
    draft.parking_price_per_hour = 0;
    draft.parking_type = PARKING_FREE.to_owned();
    assert!(validate_step(WizardStep::Location, &draft).is_empty());
}

#[test]
fn disabling_parking_clears_details() {
    let mut draft = ListingDraft::default();
    draft.set_parking(true);
    draft.parking_type = PARKING_PAID.to_owned();
    draft.parking_price_per_hour = 200;
    draft.set_parking(false);
    assert!(draft.parking_type.is_empty());
    assert_eq!(draft.parking_price_per_hour, 0);
}

#[test]
fn rooms_and_contacts_steps() {
    let mut draft = ListingDraft::default();
    assert_eq!(validate_step(WizardStep::Rooms, &draft).get("rooms"), Some(&"Добавьте хотя бы один номер"));
    draft.rooms.push(priced_room("Стандарт", 1500));
    assert!(validate_step(WizardStep::Rooms, &draft).is_empty());
    assert_eq!(validate_step(WizardStep::Contacts, &draft).get("phone"), Some(&"Укажите телефон для гостей"));
    assert!(validate_step(WizardStep::Review, &ListingDraft::default()).is_empty());
}

#[test]
fn room_validation_messages() {
    let errors = validate_room(&RoomDraft::default());
    assert_eq!(errors.get("type"), Some(&"Укажите тип номера"));
    assert_eq!(errors.get("price"), Some(&"Укажите корректную цену"));
    assert!(validate_room(&priced_room("Люкс", 3000)).is_empty());
}

#[test]
fn merge_overrides_only_present_fields() {
    let mut draft = owner_done();
    draft.merge(DraftPatch { title: Some("Арбат".to_owned()), lat: Some(Some(55.75)), ..DraftPatch::default() });
    assert_eq!(draft.title, "Арбат");
    assert_eq!(draft.lat, Some(55.75));
    assert_eq!(draft.owner_full_name, "Анна");
    draft.merge(DraftPatch { lat: Some(None), owner_full_name: Some(String::new()), ..DraftPatch::default() });
    assert_eq!(draft.lat, None);
    assert!(draft.owner_full_name.is_empty());
}

#[test]
fn next_blocks_on_errors_and_advances_when_valid() {
    let mut wizard = WizardState::default();
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Owner);
    assert_eq!(wizard.errors.len(), 3);

    wizard.update(DraftPatch {
        owner_full_name: Some("Анна".to_owned()),
        owner_email: Some("anna@mail.ru".to_owned()),
        owner_phone: Some("+7".to_owned()),
        ..DraftPatch::default()
    });
    assert!(wizard.next());
    assert_eq!(wizard.step, WizardStep::Basic);
    assert!(wizard.errors.is_empty());
    assert_eq!(wizard.progress(), "Шаг 2 из 6");
}

#[test]
fn back_clears_errors_without_validating() {
    let mut wizard = WizardState { draft: owner_done(), ..WizardState::default() };
    assert!(wizard.next());
    assert!(!wizard.next());
    assert!(!wizard.errors.is_empty());
    wizard.back();
    assert!(wizard.errors.is_empty());
    assert_eq!(wizard.step, WizardStep::Owner);
    wizard.back();
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn next_stops_at_review() {
    let mut wizard = WizardState { step: WizardStep::Review, ..WizardState::default() };
    assert!(wizard.is_last_step());
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Review);
}

#[test]
fn room_editor_adds_and_replaces() {
    let mut wizard = WizardState::default();
    assert!(!wizard.save_room());
    assert_eq!(wizard.room_editor.errors.len(), 2);

    wizard.room_editor.room = priced_room("Стандарт", 1500);
    assert!(wizard.save_room());
    assert_eq!(wizard.draft.rooms.len(), 1);
    assert_eq!(wizard.room_editor.room, RoomDraft::default());

    wizard.edit_room(0);
    wizard.room_editor.room.price = 1800;
    assert!(wizard.save_room());
    assert_eq!(wizard.draft.rooms.len(), 1);
    assert_eq!(wizard.draft.rooms[0].price, 1800);
    assert_eq!(wizard.room_editor.editing, None);
}

#[test]
fn removing_room_shifts_edit_index() {
    let mut wizard = WizardState::default();
    wizard.draft.rooms = vec![priced_room("A", 1), priced_room("B", 2), priced_room("C", 3)];
    wizard.edit_room(2);
    wizard.remove_room(0);
    assert_eq!(wizard.room_editor.editing, Some(1));
    wizard.remove_room(1);
    assert_eq!(wizard.room_editor.editing, None);
    assert_eq!(wizard.draft.rooms.len(), 1);
}

#[test]
fn duplicate_and_move_rooms() {
    let mut draft = ListingDraft { rooms: vec![priced_room("A", 1), priced_room("B", 2)], ..ListingDraft::default() };
    draft.duplicate_room(0);
    assert_eq!(draft.rooms.iter().map(|r| r.kind.as_str()).collect::<Vec<_>>(), vec!["A", "A", "B"]);
    draft.move_room(2, 0);
    assert_eq!(draft.rooms.iter().map(|r| r.kind.as_str()).collect::<Vec<_>>(), vec!["B", "A", "A"]);
    draft.move_room(0, 9);
    assert_eq!(draft.rooms[0].kind, "B");
}

#[test]
fn metro_station_editing() {
    let mut draft = ListingDraft::default();
    draft.add_metro();
    draft.update_metro(0, MetroStation { station_name: "Арбатская".to_owned(), walk_minutes: 5 });
    draft.add_metro();
    draft.remove_metro(1);
    draft.remove_metro(7);
    assert_eq!(draft.metro_stations, vec![MetroStation { station_name: "Арбатская".to_owned(), walk_minutes: 5 }]);
}

#[test]
fn toggle_feature_adds_then_removes() {
    let mut features = Vec::new();
    toggle_feature(&mut features, "Wi-Fi");
    toggle_feature(&mut features, "Сауна");
    toggle_feature(&mut features, "Wi-Fi");
    assert_eq!(features, vec!["Сауна".to_owned()]);
}

#[test]
fn submission_payload_uses_wire_names() {
    let mut draft = owner_done();
    draft.kind = LISTING_TYPES[1].to_owned();
    draft.rooms.push(priced_room("Студия", 2500));
    let payload = draft.submission_payload();
    assert_eq!(payload["type"], "Апартаменты/Квартира");
    assert_eq!(payload["owner_email"], "anna@mail.ru");
    assert_eq!(payload["rooms"][0]["type"], "Студия");
    assert_eq!(payload["rooms"][0]["min_hours"], 1);
    assert!(payload["lat"].is_null());
}
