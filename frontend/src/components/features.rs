use yew::prelude::*;

use crate::catalog::FEATURES;
use crate::i18n::Localizer;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub localizer: Localizer,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    html! {
        <section id="features" class="features">
            <h2>{props.localizer.t("features.title")}</h2>
            <p>{props.localizer.t("features.subtitle")}</p>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-item">
                        <span class="feature-icon">{feature.icon}</span>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                })}
            </div>
            <style>
                {r#"
                .features {
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .features h2 {
                    font-size: 2.5rem;
                    color: #fff;
                }
                .features > p {
                    color: #94a3b8;
                    margin-bottom: 3rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .feature-item {
                    background: rgba(15, 23, 42, 0.75);
                    border: 1px solid rgba(74, 222, 128, 0.12);
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: left;
                    transition: transform 0.2s ease;
                }
                .feature-item:hover {
                    transform: translateY(-4px);
                }
                .feature-icon {
                    font-size: 2rem;
                }
                .feature-item h3 {
                    color: #fff;
                    margin: 1rem 0 0.5rem;
                }
                .feature-item p {
                    color: #94a3b8;
                }
                "#}
            </style>
        </section>
    }
}
