use log::info;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod i18n;
mod models {
    pub mod content;
    pub mod user;
}
mod components {
    pub mod faq;
    pub mod features;
    pub mod hero;
    pub mod sidebar;
    pub mod testimonials;
    pub mod threat_graph;
    pub mod trial_modal;
    pub mod video_showcase;
}
mod pages {
    pub mod dashboard;
    pub mod landing;
}
mod auth {
    pub mod guard;
    pub mod handle;
    pub mod session;
    pub mod signup;
}
mod admin {
    pub mod dashboard;
}

use admin::dashboard::AdminDashboard;
use auth::{
    guard::redirect_for,
    handle::Session,
    session::{BrowserStore, SeedAccounts, SessionService},
    signup::login::Login,
    signup::register::Register,
};
use config::SessionConfig;
use i18n::{Language, Localizer};
use models::user::User;
use pages::{
    dashboard::{Dashboard, Tools},
    landing::Landing,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/tools")]
    Tools,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, session: &Session, localizer: &Localizer) -> Html {
    if let Some(target) = redirect_for(&route, session.user()) {
        info!("Redirecting {:?} to {:?}", route, target);
        return html! { <Redirect<Route> to={target} /> };
    }

    let session = session.clone();
    let localizer = localizer.clone();
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {localizer} /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login {session} {localizer} /> }
        }
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <Register {session} {localizer} /> }
        }
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard {session} {localizer} /> }
        }
        Route::Tools => {
            info!("Rendering Tools page");
            html! { <Tools {session} {localizer} /> }
        }
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminDashboard {session} {localizer} /> }
        }
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{localizer.t("notfound.title")}</h1>
                <Link<Route> to={Route::Home} classes="nav-link">{localizer.t("nav.home")}</Link<Route>>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub session: Session,
    pub localizer: Localizer,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { session, localizer } = props;
    let t = |key: &str| localizer.t(key);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let handle_logout = {
        let session = session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            session.logout();
        })
    };

    let on_language = {
        let localizer = localizer.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            localizer.set_language(&select.value());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"🛡️ Sangrakshak"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{t("nav.home")}</Link<Route>>
                    </div>
                    if !session.is_logged_in() {
                        <>
                            <a href="/#features" class="nav-link">{t("nav.features")}</a>
                            <a href="/#testimonials" class="nav-link">{t("nav.testimonials")}</a>
                            <a href="/#faq" class="nav-link">{t("nav.faq")}</a>
                        </>
                    }
                    <select class="language-select" onchange={on_language} title={t("nav.language")}>
                        { for Language::ALL.iter().map(|language| html! {
                            <option
                                value={language.code()}
                                selected={*language == localizer.language()}
                            >
                                {language.native_name()}
                            </option>
                        })}
                    </select>
                    {
                        if let Some(user) = session.user() {
                            html! {
                                <>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Dashboard} classes="nav-link">
                                            {t("nav.dashboard")}
                                        </Link<Route>>
                                    </div>
                                    <span class="nav-avatar" title={user.email.clone()}>{user.initial()}</span>
                                    <button onclick={handle_logout} class="nav-logout-button">
                                        {t("nav.logout")}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={Route::Login} classes="nav-login-button">
                                            {t("nav.login")}
                                        </Link<Route>>
                                    </div>
                                    <div onclick={close_menu}>
                                        <Link<Route> to={Route::Signup} classes="nav-signup-button">
                                            {t("nav.signup")}
                                        </Link<Route>>
                                    </div>
                                </>
                            }
                        }
                    }
                </div>
            </div>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
body {
    margin: 0;
    background: #020617;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 74px;
    background: rgba(2, 6, 23, 0.9);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid rgba(74, 222, 128, 0.1);
    z-index: 50;
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.5rem;
}
.nav-logo {
    color: #fff;
    font-size: 1.4rem;
    font-weight: 700;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.25rem;
}
.nav-link {
    color: #cbd5e1;
    text-decoration: none;
}
.nav-login-button, .nav-signup-button, .nav-logout-button {
    padding: 0.5rem 1.25rem;
    border-radius: 999px;
    text-decoration: none;
    font-size: 0.95rem;
    cursor: pointer;
}
.nav-login-button, .nav-logout-button {
    color: #4ade80;
    border: 1px solid rgba(74, 222, 128, 0.4);
    background: none;
}
.nav-signup-button {
    background: #4ade80;
    color: #0f172a;
}
.nav-avatar {
    width: 34px;
    height: 34px;
    border-radius: 50%;
    background: #16a34a;
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 600;
}
.language-select {
    background: #0f172a;
    color: #e2e8f0;
    border: 1px solid #334155;
    border-radius: 8px;
    padding: 0.35rem 0.5rem;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
.not-found {
    padding-top: 160px;
    text-align: center;
    color: #e2e8f0;
}
@media (max-width: 900px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 74px;
        left: 0;
        right: 0;
        background: #020617;
        padding: 1.5rem;
    }
}
"#;

#[function_component]
fn App() -> Html {
    let session_config = SessionConfig::default();
    let service = use_mut_ref(|| {
        SessionService::restore(
            SeedAccounts::demo(),
            Box::new(BrowserStore::new(config::SESSION_STORAGE_KEY)),
        )
    });
    let user = {
        let service = service.clone();
        use_state(move || service.borrow().current_user().cloned())
    };
    let language = use_state(Language::default);

    let session = {
        let user_setter = user.setter();
        Session::new(
            service,
            session_config,
            (*user).clone(),
            Callback::from(move |next: Option<User>| user_setter.set(next)),
        )
    };
    let localizer = {
        let language_setter = language.setter();
        Localizer::new(
            *language,
            Callback::from(move |next: Language| language_setter.set(next)),
        )
    };

    let render = {
        let session = session.clone();
        let localizer = localizer.clone();
        Callback::from(move |route: Route| switch(route, &session, &localizer))
    };

    html! {
        <BrowserRouter>
            <Nav session={session} localizer={localizer} />
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
