use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::Localizer;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TrialModalProps {
    pub localizer: Localizer,
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(TrialModal)]
pub fn trial_modal(props: &TrialModalProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let t = |key: &str| props.localizer.t(key);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={keep_open}>
                <h2>{t("trial.title")}</h2>
                <p>{t("trial.body")}</p>
                <div class="modal-actions">
                    <Link<Route> to={Route::Signup} classes="hero-cta">
                        {t("trial.start")}
                    </Link<Route>>
                    <button class="modal-close" onclick={close}>{t("trial.close")}</button>
                </div>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(2, 6, 23, 0.7);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                }
                .modal {
                    background: #0f172a;
                    border: 1px solid rgba(74, 222, 128, 0.3);
                    border-radius: 16px;
                    padding: 2.5rem;
                    max-width: 460px;
                    width: 90%;
                    color: #e2e8f0;
                }
                .modal-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                    align-items: center;
                }
                .modal-close {
                    background: none;
                    border: none;
                    color: #94a3b8;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
