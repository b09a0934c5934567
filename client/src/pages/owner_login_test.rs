use super::*;

fn creds(login: &str, password: &str, full_name: &str) -> OwnerCredentials {
    OwnerCredentials {
        login: login.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
        phone: String::new(),
    }
}

#[test]
fn login_needs_login_and_password() {
    assert_eq!(creds("  ", "secret", "").validate(false), Err("Введите логин и пароль"));
    assert_eq!(creds("anna", "", "").validate(false), Err("Введите логин и пароль"));
    assert_eq!(creds("anna", "secret", "").validate(false), Ok(()));
}

#[test]
fn registration_also_needs_a_name() {
    assert_eq!(creds("anna@mail.ru", "secret", " ").validate(true), Err("Укажите ваше имя"));
    assert_eq!(creds("anna@mail.ru", "secret", "Анна").validate(true), Ok(()));
}
