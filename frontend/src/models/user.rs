use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Same spelling as the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    Email,
    Google,
}

impl LoginMethod {
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "email",
            LoginMethod::Google => "Google",
        }
    }
}

/// The signed-in account. Field names follow the camelCase layout the
/// browser app persists under `config::SESSION_STORAGE_KEY`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub signup_date: String,
    pub login_method: LoginMethod,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First letter of the name, used for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@sangrakshak.com".to_string(),
            role: Role::Admin,
            signup_date: "2024-01-15".to_string(),
            login_method: LoginMethod::Email,
        }
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["signupDate"], "2024-01-15");
        assert_eq!(json["loginMethod"], "email");
        assert_eq!(json["role"], "admin");
        assert!(json.get("signup_date").is_none());
    }

    #[test]
    fn test_parses_persisted_record() {
        let raw = r#"{"id":"42","name":"ravi","email":"ravi@x.com","role":"user","signupDate":"2025-03-01","loginMethod":"google"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.login_method, LoginMethod::Google);
        assert!(!user.is_admin());
        assert_eq!(user.initial(), "R");
    }

    #[test]
    fn test_labels_match_persisted_names() {
        assert_eq!(Role::default(), Role::User);
        for role in [Role::Admin, Role::User] {
            assert_eq!(serde_json::to_value(role).unwrap(), role.as_str());
        }
        assert_eq!(LoginMethod::Email.label(), "email");
        assert_eq!(LoginMethod::Google.label(), "Google");
    }

    #[test]
    fn test_initial_of_empty_name() {
        let mut user = sample();
        user.name.clear();
        assert_eq!(user.initial(), "?");
    }
}
