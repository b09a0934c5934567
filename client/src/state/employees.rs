//! Employee management tab state.
//!
//! DESIGN
//! ======
//! Permissions travel as `PermissionSet` bitsets; the remote map form only
//! appears at the serde boundary. A superadmin implicitly holds every
//! permission regardless of the stored set.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use serde_json::{Value, json};

use crate::net::types::{Employee, Permission, PermissionSet, Role};

/// Permissions a superadmin can grant from the form.
pub const GRANTABLE: [Permission; 3] = [Permission::Owners, Permission::Listings, Permission::Settings];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginType {
    #[default]
    Phone,
    Email,
}

/// Normalize a Russian phone number to `+7…` digits.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if let Some(rest) = digits.strip_prefix('8') {
        format!("+7{rest}")
    } else if digits.starts_with('7') {
        format!("+{digits}")
    } else if digits.is_empty() {
        raw.to_owned()
    } else {
        format!("+7{digits}")
    }
}

/// Permissions that actually apply to an employee.
#[must_use]
pub fn effective_permissions(employee: &Employee) -> PermissionSet {
    if employee.role == Role::Superadmin {
        let mut all = PermissionSet::default();
        for p in Permission::ALL {
            all.insert(p);
        }
        return all;
    }
    employee.permissions
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub login: String,
    pub password: String,
    pub login_type: LoginType,
    pub role: Role,
    pub permissions: PermissionSet,
    pub is_active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        let mut permissions = PermissionSet::default();
        permissions.insert(Permission::Listings);
        Self {
            name: String::new(),
            email: String::new(),
            login: String::new(),
            password: String::new(),
            login_type: LoginType::Phone,
            role: Role::Employee,
            permissions,
            is_active: true,
        }
    }
}

impl EmployeeForm {
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let login = employee.login.clone().unwrap_or_default();
        let login_type = if login.contains('@') { LoginType::Email } else { LoginType::Phone };
        Self {
            name: employee.full_name.clone(),
            email: employee.email.clone(),
            login,
            password: String::new(),
            login_type,
            role: employee.role,
            permissions: employee.permissions,
            is_active: employee.is_active,
        }
    }

    /// Apply typed login text, normalizing phone numbers.
    pub fn set_login(&mut self, raw: &str) {
        self.login = match self.login_type {
            LoginType::Phone => format_phone(raw),
            LoginType::Email => raw.to_owned(),
        };
    }

    /// # Errors
    ///
    /// Returns the first missing-field message.
    pub fn validate(&self, creating: bool) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Укажите имя сотрудника");
        }
        if self.email.trim().is_empty() {
            return Err("Укажите email");
        }
        if self.login.trim().is_empty() {
            return Err("Укажите логин");
        }
        if creating && self.password.is_empty() {
            return Err("Укажите пароль");
        }
        Ok(())
    }

    #[must_use]
    pub fn payload(&self) -> Value {
        let mut body = json!({
            "name": self.name.trim(),
            "email": self.email.trim(),
            "login": self.login.trim(),
            "role": self.role,
            "permissions": self.permissions,
            "is_active": self.is_active,
        });
        if !self.password.is_empty() {
            if let Some(map) = body.as_object_mut() {
                map.insert("password".to_owned(), json!(self.password));
            }
        }
        body
    }
}
