pub mod login {
    use gloo_console::log;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::HtmlInputElement;
    use yew::prelude::*;
    use yew_router::prelude::*;

    use super::{google_button, AUTH_CSS};
    use crate::auth::handle::Session;
    use crate::i18n::Localizer;
    use crate::Route;

    #[derive(Properties, PartialEq)]
    pub struct LoginProps {
        pub session: Session,
        pub localizer: Localizer,
    }

    #[function_component]
    pub fn Login(props: &LoginProps) -> Html {
        let t = |key: &str| props.localizer.t(key);
        let email = use_state(String::new);
        let password = use_state(String::new);
        let error = use_state(|| None::<String>);
        let is_loading = use_state(|| false);

        let onsubmit = {
            let session = props.session.clone();
            let email = email.clone();
            let password = password.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let invalid = t("auth.invalid");
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if *is_loading {
                    return;
                }
                is_loading.set(true);
                error.set(None);

                let session = session.clone();
                let email = (*email).clone();
                let password = (*password).clone();
                let error = error.clone();
                let is_loading = is_loading.clone();
                let invalid = invalid.clone();
                spawn_local(async move {
                    log!("Submitting login for", email.clone());
                    // On success the route guard moves the page along.
                    if !session.login(email, password).await {
                        error.set(Some(invalid));
                    }
                    is_loading.set(false);
                });
            })
        };

        let on_google = {
            let session = props.session.clone();
            let is_loading = is_loading.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if *is_loading {
                    return;
                }
                is_loading.set(true);
                let session = session.clone();
                let is_loading = is_loading.clone();
                spawn_local(async move {
                    session.login_with_google().await;
                    is_loading.set(false);
                });
            })
        };

        html! {
            <div class="auth-page">
                <div class="auth-container">
                    <h1>{t("auth.login_title")}</h1>
                    <form {onsubmit}>
                        <label>{t("auth.email")}</label>
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                            required=true
                        />
                        <label>{t("auth.password")}</label>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                            required=true
                        />
                        if let Some(message) = (*error).as_ref() {
                            <div class="error-message">{message}</div>
                        }
                        <button type="submit" class="auth-submit" disabled={*is_loading}>
                            {if *is_loading { t("auth.loading") } else { t("auth.submit_login") }}
                        </button>
                    </form>
                    {google_button(t("auth.google"), *is_loading, on_google)}
                    <p class="auth-switch">
                        <Link<Route> to={Route::Signup}>{t("auth.no_account")}</Link<Route>>
                    </p>
                </div>
                <style>{AUTH_CSS}</style>
            </div>
        }
    }
}

pub mod register {
    use gloo_console::log;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::HtmlInputElement;
    use yew::prelude::*;
    use yew_router::prelude::*;

    use super::{google_button, AUTH_CSS};
    use crate::auth::handle::Session;
    use crate::i18n::Localizer;
    use crate::Route;

    #[derive(Properties, PartialEq)]
    pub struct RegisterProps {
        pub session: Session,
        pub localizer: Localizer,
    }

    #[function_component]
    pub fn Register(props: &RegisterProps) -> Html {
        let t = |key: &str| props.localizer.t(key);
        let name = use_state(String::new);
        let email = use_state(String::new);
        let password = use_state(String::new);
        let is_loading = use_state(|| false);

        let onsubmit = {
            let session = props.session.clone();
            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let is_loading = is_loading.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if *is_loading {
                    return;
                }
                is_loading.set(true);

                let session = session.clone();
                let name = (*name).clone();
                let email = (*email).clone();
                let password = (*password).clone();
                let is_loading = is_loading.clone();
                spawn_local(async move {
                    log!("Creating account for", email.clone());
                    session.signup(name, email, password, None).await;
                    is_loading.set(false);
                });
            })
        };

        let on_google = {
            let session = props.session.clone();
            let is_loading = is_loading.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if *is_loading {
                    return;
                }
                is_loading.set(true);
                let session = session.clone();
                let is_loading = is_loading.clone();
                spawn_local(async move {
                    session.login_with_google().await;
                    is_loading.set(false);
                });
            })
        };

        let field = |label: String, kind: &'static str, state: UseStateHandle<String>| {
            let oninput = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    state.set(input.value());
                })
            };
            html! {
                <>
                    <label>{label}</label>
                    <input type={kind} value={(*state).clone()} {oninput} required=true />
                </>
            }
        };

        html! {
            <div class="auth-page">
                <div class="auth-container">
                    <h1>{t("auth.signup_title")}</h1>
                    <form {onsubmit}>
                        {field(t("auth.name"), "text", name.clone())}
                        {field(t("auth.email"), "email", email.clone())}
                        {field(t("auth.password"), "password", password.clone())}
                        <button type="submit" class="auth-submit" disabled={*is_loading}>
                            {if *is_loading { t("auth.loading") } else { t("auth.submit_signup") }}
                        </button>
                    </form>
                    {google_button(t("auth.google"), *is_loading, on_google)}
                    <p class="auth-switch">
                        <Link<Route> to={Route::Login}>{t("auth.have_account")}</Link<Route>>
                    </p>
                </div>
                <style>{AUTH_CSS}</style>
            </div>
        }
    }
}

use yew::prelude::*;

fn google_button(label: String, disabled: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="google-button" {onclick} {disabled}>
            <span class="google-mark">{"G"}</span>
            {label}
        </button>
    }
}

const AUTH_CSS: &str = r#"
.auth-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
}
.auth-container {
    background: rgba(15, 23, 42, 0.8);
    border: 1px solid rgba(74, 222, 128, 0.15);
    border-radius: 16px;
    padding: 3rem;
    width: 100%;
    max-width: 440px;
    backdrop-filter: blur(10px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
    color: #e2e8f0;
}
.auth-container h1 {
    font-size: 2rem;
    margin-bottom: 1.5rem;
    text-align: center;
    background: linear-gradient(45deg, #fff, #4ade80);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.auth-container form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.auth-container input {
    padding: 0.75rem;
    border-radius: 8px;
    border: 1px solid #334155;
    background: #0f172a;
    color: #fff;
    margin-bottom: 0.75rem;
}
.auth-submit, .google-button {
    padding: 0.85rem;
    border-radius: 8px;
    border: none;
    font-weight: 600;
    cursor: pointer;
    width: 100%;
}
.auth-submit {
    background: linear-gradient(45deg, #16a34a, #4ade80);
    color: #0f172a;
}
.google-button {
    margin-top: 1rem;
    background: #fff;
    color: #1e293b;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
}
.auth-submit:disabled, .google-button:disabled {
    opacity: 0.6;
    cursor: wait;
}
.error-message {
    color: #f87171;
    margin-bottom: 0.75rem;
}
.auth-switch {
    text-align: center;
    margin-top: 1.5rem;
}
.auth-switch a {
    color: #4ade80;
}
"#;
