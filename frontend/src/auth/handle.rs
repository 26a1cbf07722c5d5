use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use yew::Callback;

use crate::auth::session::SessionService;
use crate::config::SessionConfig;
use crate::models::user::{Role, User};

/// The session as seen by pages. `App` owns the service and the rendered
/// user, and passes this handle down as a prop.
#[derive(Clone)]
pub struct Session {
    service: Rc<RefCell<SessionService>>,
    config: SessionConfig,
    user: Option<User>,
    on_change: Callback<Option<User>>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
            && self.config == other.config
            && Rc::ptr_eq(&self.service, &other.service)
    }
}

impl Session {
    pub fn new(
        service: Rc<RefCell<SessionService>>,
        config: SessionConfig,
        user: Option<User>,
        on_change: Callback<Option<User>>,
    ) -> Self {
        Self {
            service,
            config,
            user,
            on_change,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn seed_users(&self) -> Vec<User> {
        self.service.borrow().seed().users.clone()
    }

    pub async fn login(&self, email: String, password: String) -> bool {
        TimeoutFuture::new(self.config.login_delay_ms).await;
        let ok = self.service.borrow_mut().login(&email, &password);
        self.publish();
        ok
    }

    pub async fn signup(&self, name: String, email: String, password: String, role: Option<Role>) -> bool {
        TimeoutFuture::new(self.config.signup_delay_ms).await;
        let ok = self.service.borrow_mut().signup(&name, &email, &password, role);
        self.publish();
        ok
    }

    pub async fn login_with_google(&self) -> bool {
        TimeoutFuture::new(self.config.oauth_delay_ms).await;
        let ok = self.service.borrow_mut().login_with_google();
        self.publish();
        ok
    }

    pub fn logout(&self) {
        self.service.borrow_mut().logout();
        self.publish();
    }

    fn publish(&self) {
        let user = self.service.borrow().current_user().cloned();
        self.on_change.emit(user);
    }
}
