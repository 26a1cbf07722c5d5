use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;
use web_sys::window;

use crate::models::user::{LoginMethod, Role, User};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("persisted user is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the signed-in user is mirrored between page loads.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// `window.localStorage` under a single key.
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Mock accounts accepted by `login`, all sharing one password.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedAccounts {
    pub users: Vec<User>,
    pub password: String,
}

impl SeedAccounts {
    pub fn new(users: Vec<User>, password: &str) -> Self {
        Self {
            users,
            password: password.to_string(),
        }
    }

    pub fn demo() -> Self {
        let seed = |id: &str, name: &str, email: &str, role: Role, date: &str| User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            signup_date: date.to_string(),
            login_method: LoginMethod::Email,
        };
        Self::new(
            vec![
                seed("1", "Admin User", "admin@sangrakshak.com", Role::Admin, "2024-01-15"),
                seed("2", "Rahul Verma", "rahul@example.com", Role::User, "2024-02-20"),
                seed("3", "Simran Kaur", "simran@example.com", Role::User, "2024-03-10"),
            ],
            "password123",
        )
    }

    fn find(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

/// Owns the current user and keeps the store in sync with it.
pub struct SessionService {
    seed: SeedAccounts,
    store: Box<dyn SessionStore>,
    current: Option<User>,
}

impl SessionService {
    /// Builds the service and hydrates any previously persisted user.
    pub fn restore(seed: SeedAccounts, store: Box<dyn SessionStore>) -> Self {
        let mut service = Self {
            seed,
            store,
            current: None,
        };
        service.current = service.hydrate();
        service
    }

    fn hydrate(&self) -> Option<User> {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read persisted session: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<User>(&raw).map_err(StorageError::from) {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                Some(user)
            }
            Err(e) => {
                warn!("Discarding persisted session: {}", e);
                if let Err(e) = self.store.clear() {
                    warn!("Could not clear persisted session: {}", e);
                }
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn seed(&self) -> &SeedAccounts {
        &self.seed
    }

    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let user = match self.seed.find(email) {
            Some(user) if password == self.seed.password => user.clone(),
            _ => {
                info!("Login rejected");
                return false;
            }
        };
        info!("Login succeeded for {}", user.email);
        self.set_current(user);
        true
    }

    pub fn signup(&mut self, name: &str, email: &str, _password: &str, role: Option<Role>) -> bool {
        self.signup_at(name, email, role, Utc::now())
    }

    pub(crate) fn signup_at(
        &mut self,
        name: &str,
        email: &str,
        role: Option<Role>,
        now: DateTime<Utc>,
    ) -> bool {
        let user = User {
            id: now.timestamp_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.unwrap_or_default(),
            signup_date: now.format("%Y-%m-%d").to_string(),
            login_method: LoginMethod::Email,
        };
        info!("Signed up {}", user.email);
        self.set_current(user);
        true
    }

    pub fn login_with_google(&mut self) -> bool {
        self.login_with_google_at(Utc::now())
    }

    pub(crate) fn login_with_google_at(&mut self, now: DateTime<Utc>) -> bool {
        let user = User {
            id: format!("google-{}", now.timestamp_millis()),
            name: "Google User".to_string(),
            email: "user@gmail.com".to_string(),
            role: Role::User,
            signup_date: now.format("%Y-%m-%d").to_string(),
            login_method: LoginMethod::Google,
        };
        info!("Google sign-in completed");
        self.set_current(user);
        true
    }

    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.store.clear() {
            warn!("Could not clear persisted session: {}", e);
        }
        info!("Logged out");
    }

    fn set_current(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.store.save(&raw) {
                    warn!("Could not persist session: {}", e);
                }
            }
            Err(e) => warn!("Could not serialize session: {}", e),
        }
        self.current = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-process store. Clones share the same slot, which lets a second
    /// service observe what the first one persisted.
    #[derive(Clone, Default)]
    struct MemoryStore {
        slot: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self::default()
        }

        fn raw(&self) -> Option<String> {
            self.slot.borrow().clone()
        }
    }

    impl SessionStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.slot.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }

    fn service() -> (SessionService, MemoryStore) {
        let store = MemoryStore::new();
        let service = SessionService::restore(SeedAccounts::demo(), Box::new(store.clone()));
        (service, store)
    }

    /// Always refuses writes, like a browser with storage disabled.
    struct FailingStore;

    impl SessionStore for FailingStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn save(&self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("QuotaExceededError".to_string()))
        }
        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_login_with_seed_password() {
        let (mut service, store) = service();
        assert!(service.login("admin@sangrakshak.com", "password123"));

        let user = service.current_user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.role, Role::Admin);
        assert!(store.raw().unwrap().contains("admin@sangrakshak.com"));
    }

    #[test]
    fn test_login_wrong_password() {
        let (mut service, store) = service();
        assert!(!service.login("admin@sangrakshak.com", "wrong"));
        assert!(service.current_user().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_login_unknown_email() {
        let (mut service, _) = service();
        assert!(!service.login("nobody@sangrakshak.com", "password123"));
        assert!(service.current_user().is_none());
    }

    #[test]
    fn test_failed_login_keeps_existing_user() {
        let (mut service, _) = service();
        assert!(service.login("rahul@example.com", "password123"));
        assert!(!service.login("admin@sangrakshak.com", "nope"));
        assert_eq!(service.current_user().unwrap().email, "rahul@example.com");
    }

    #[test]
    fn test_custom_seed_accounts() {
        let seed = SeedAccounts::new(SeedAccounts::demo().users[1..].to_vec(), "hunter2");
        let mut service = SessionService::restore(seed, Box::new(MemoryStore::new()));
        assert!(!service.login("admin@sangrakshak.com", "hunter2"));
        assert!(!service.login("rahul@example.com", "password123"));
        assert!(service.login("rahul@example.com", "hunter2"));
    }

    #[test]
    fn test_signup_defaults_to_user_role() {
        let (mut service, _) = service();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 9, 30, 0).unwrap();
        assert!(service.signup_at("Alice", "alice@x.com", None, now));

        let user = service.current_user().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.signup_date, "2025-06-03");
        assert_eq!(user.id, now.timestamp_millis().to_string());
        assert_eq!(user.login_method, LoginMethod::Email);
    }

    #[test]
    fn test_signup_uses_today() {
        let (mut service, _) = service();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert!(service.signup("Alice", "alice@x.com", "anything", None));
        assert_eq!(service.current_user().unwrap().signup_date, today);
    }

    #[test]
    fn test_signup_with_explicit_role() {
        let (mut service, _) = service();
        assert!(service.signup("Root", "root@x.com", "pw", Some(Role::Admin)));
        assert!(service.current_user().unwrap().is_admin());
    }

    #[test]
    fn test_google_login() {
        let (mut service, store) = service();
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert!(service.login_with_google_at(now));

        let user = service.current_user().unwrap();
        assert_eq!(user.name, "Google User");
        assert_eq!(user.login_method, LoginMethod::Google);
        assert!(user.id.starts_with("google-"));
        assert!(store.raw().is_some());
    }

    #[test]
    fn test_logout_clears_store() {
        let (mut service, store) = service();
        service.login("admin@sangrakshak.com", "password123");
        service.logout();
        assert!(service.current_user().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_restore_round_trips_user() {
        let (mut service, store) = service();
        let now = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();
        service.signup_at("Harleen", "harleen@x.com", Some(Role::Admin), now);
        let before = service.current_user().cloned().unwrap();

        let reloaded = SessionService::restore(SeedAccounts::demo(), Box::new(store));
        assert_eq!(reloaded.current_user(), Some(&before));
    }

    #[test]
    fn test_restore_discards_corrupt_value() {
        let store = MemoryStore::new();
        store.save("{not json").unwrap();
        let service = SessionService::restore(SeedAccounts::demo(), Box::new(store.clone()));
        assert!(service.current_user().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_storage_failure_does_not_block_login() {
        let mut service = SessionService::restore(SeedAccounts::demo(), Box::new(FailingStore));
        assert!(service.current_user().is_none());
        assert!(service.login("simran@example.com", "password123"));
        assert_eq!(service.current_user().unwrap().name, "Simran Kaur");
        service.logout();
        assert!(service.current_user().is_none());
    }
}
