use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::testimonials::Testimonials;
use crate::components::trial_modal::TrialModal;
use crate::components::video_showcase::VideoShowcase;
use crate::i18n::Localizer;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub localizer: Localizer,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let trial_open = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_trial = {
        let trial_open = trial_open.clone();
        Callback::from(move |_: ()| trial_open.set(true))
    };
    let close_trial = {
        let trial_open = trial_open.clone();
        Callback::from(move |_: ()| trial_open.set(false))
    };

    let localizer = props.localizer.clone();
    html! {
        <div class="landing-page">
            <Hero localizer={localizer.clone()} on_start_trial={open_trial} />
            <Features localizer={localizer.clone()} />
            <VideoShowcase localizer={localizer.clone()} />
            <Testimonials localizer={localizer.clone()} />
            <Faq localizer={localizer.clone()} />
            <footer class="site-footer">
                <p>{format!("© {} Sangrakshak. {}", chrono::Utc::now().format("%Y"), localizer.t("footer.rights"))}</p>
            </footer>
            <TrialModal localizer={localizer} visible={*trial_open} on_close={close_trial} />
            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    color: #e2e8f0;
                }
                .site-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #64748b;
                    border-top: 1px solid rgba(148, 163, 184, 0.1);
                }
                "#}
            </style>
        </div>
    }
}
