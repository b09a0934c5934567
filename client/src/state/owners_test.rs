use super::*;

fn owner(id: i64, name: &str, email: &str, phone: Option<&str>) -> Owner {
    Owner {
        id,
        full_name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.map(str::to_owned),
        ..Owner::default()
    }
}

fn listing(id: i64, title: &str, city: &str, owner_id: Option<i64>) -> Listing {
    Listing { id, title: title.to_owned(), city: city.to_owned(), owner_id, ..Listing::default() }
}

#[test]
fn bonus_amount_parsing() {
    assert_eq!(parse_bonus_amount("500"), Ok(500));
    assert_eq!(parse_bonus_amount(" 99,6 "), Ok(100));
    assert!(parse_bonus_amount("").is_err());
    assert!(parse_bonus_amount("-5").is_err());
    assert!(parse_bonus_amount("0.2").is_err());
    assert!(parse_bonus_amount("abc").is_err());
}

#[test]
fn presets_are_valid_amounts() {
    for preset in BONUS_PRESETS {
        assert_eq!(parse_bonus_amount(&preset.to_string()), Ok(preset));
    }
}

#[test]
fn owner_search_covers_contact_fields() {
    let owners = vec![
        owner(1, "Иван Петров", "ivan@mail.ru", Some("+7 900 111")),
        owner(2, "Мария", "maria@yandex.ru", None),
    ];
    assert_eq!(search_owners(&owners, "ПЕТРОВ").len(), 1);
    assert_eq!(search_owners(&owners, "yandex")[0].id, 2);
    assert_eq!(search_owners(&owners, "900")[0].id, 1);
    assert_eq!(search_owners(&owners, "").len(), 2);
}

#[test]
fn owner_form_requires_password_only_on_create() {
    let form = OwnerForm {
        email: "a@b.ru".to_owned(),
        login: "79001112233".to_owned(),
        full_name: "Иван".to_owned(),
        ..OwnerForm::default()
    };
    assert_eq!(form.validate(true), Err("Укажите пароль"));
    assert_eq!(form.validate(false), Ok(()));
    assert_eq!(OwnerForm::default().validate(false), Err("Укажите ФИО"));
}

#[test]
fn owner_form_payload_omits_blank_password() {
    let form = OwnerForm::from_owner(&owner(4, "Иван", "a@b.ru", Some("+7")));
    let body = form.payload(Some(4));
    assert_eq!(body["id"], 4);
    assert_eq!(body["phone"], "+7");
    assert!(body.get("password").is_none());
}

#[test]
fn assign_filters_by_query_and_city() {
    let mut assign = AssignState::new(
        1,
        vec![listing(1, "Арбат", "Москва", None), listing(2, "Невский", "Санкт-Петербург", None), listing(3, "Тверская", "Москва", Some(9))],
    );
    assign.city = "Москва".to_owned();
    assert_eq!(assign.filtered().len(), 2);
    assign.query = "невск".to_owned();
    assert!(assign.filtered().is_empty());
}

#[test]
fn toggle_all_selects_only_unowned() {
    let mut assign = AssignState::new(1, vec![listing(1, "A", "Москва", None), listing(2, "B", "Москва", Some(5)), listing(3, "C", "Казань", None)]);
    assign.toggle_all();
    assert_eq!(assign.selected.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert!(assign.all_selected());
    assign.toggle_all();
    assert!(assign.selected.is_empty());
    assign.toggle(2);
    assign.toggle(1);
    assign.toggle(2);
    assert_eq!(assign.selected.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn city_counts_cover_all_listings() {
    let assign = AssignState::new(1, vec![listing(1, "A", "Москва", None), listing(2, "B", "Москва", Some(5))]);
    assert_eq!(assign.city_counts().get("Москва"), Some(&2));
}
