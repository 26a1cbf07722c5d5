use yew::prelude::*;

use crate::i18n::Localizer;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub localizer: Localizer,
    pub on_start_trial: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let t = |key: &str| props.localizer.t(key);
    let start_trial = {
        let on_start_trial = props.on_start_trial.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_start_trial.emit(());
        })
    };

    html! {
        <section class="hero">
            <div class="hero-background"></div>
            <h1>{t("hero.title")}</h1>
            <p class="hero-subtitle">{t("hero.subtitle")}</p>
            <div class="hero-actions">
                <button class="hero-cta" onclick={start_trial}>{t("hero.cta_primary")}</button>
                <a class="hero-secondary" href="#videos">{t("hero.cta_secondary")}</a>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 30% 20%, rgba(74, 222, 128, 0.18), transparent 60%),
                                radial-gradient(circle at 70% 80%, rgba(59, 130, 246, 0.18), transparent 60%);
                    z-index: -1;
                    pointer-events: none;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    max-width: 900px;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #4ade80);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #94a3b8;
                    max-width: 640px;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .hero-cta {
                    background: linear-gradient(45deg, #16a34a, #4ade80);
                    color: #0f172a;
                    border: none;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-secondary {
                    color: #4ade80;
                    padding: 1rem 2rem;
                    border: 1px solid rgba(74, 222, 128, 0.4);
                    border-radius: 999px;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
