use super::*;

#[test]
fn phone_normalization() {
    assert_eq!(format_phone("8 (900) 123-45-67"), "+79001234567");
    assert_eq!(format_phone("79001234567"), "+79001234567");
    assert_eq!(format_phone("9001234567"), "+79001234567");
    assert_eq!(format_phone("+"), "+");
}

#[test]
fn superadmin_gets_every_permission() {
    let employee = Employee { role: Role::Superadmin, ..Employee::default() };
    let set = effective_permissions(&employee);
    assert!(Permission::ALL.iter().all(|p| set.contains(*p)));

    let mut limited = PermissionSet::default();
    limited.insert(Permission::Owners);
    let employee = Employee { permissions: limited, ..Employee::default() };
    assert_eq!(effective_permissions(&employee), limited);
}

#[test]
fn new_form_defaults_to_listings_permission() {
    let form = EmployeeForm::default();
    assert!(form.permissions.contains(Permission::Listings));
    assert!(!form.permissions.contains(Permission::Owners));
    assert!(form.is_active);
}

#[test]
fn login_input_follows_login_type() {
    let mut form = EmployeeForm::default();
    form.set_login("8900");
    assert_eq!(form.login, "+7900");
    form.login_type = LoginType::Email;
    form.set_login("staff@site.ru");
    assert_eq!(form.login, "staff@site.ru");
}

#[test]
fn validation_requires_password_on_create() {
    let form = EmployeeForm {
        name: "Ольга".to_owned(),
        email: "o@site.ru".to_owned(),
        login: "+79000000000".to_owned(),
        ..EmployeeForm::default()
    };
    assert_eq!(form.validate(true), Err("Укажите пароль"));
    assert_eq!(form.validate(false), Ok(()));
    assert_eq!(EmployeeForm::default().validate(true), Err("Укажите имя сотрудника"));
}

#[test]
fn payload_serializes_permission_map() {
    let mut form = EmployeeForm { name: " Ольга ".to_owned(), ..EmployeeForm::default() };
    form.permissions.toggle(Permission::Owners);
    let body = form.payload();
    assert_eq!(body["name"], "Ольга");
    assert_eq!(body["role"], "employee");
    assert_eq!(body["permissions"]["owners"], true);
    assert_eq!(body["permissions"]["listings"], true);
    assert!(body.get("password").is_none());
}

#[test]
fn edit_form_detects_email_login() {
    let employee = Employee { login: Some("a@b.ru".to_owned()), is_active: false, ..Employee::default() };
    let form = EmployeeForm::from_employee(&employee);
    assert_eq!(form.login_type, LoginType::Email);
    assert!(!form.is_active);
}
