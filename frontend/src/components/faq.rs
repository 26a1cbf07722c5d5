use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::FAQS;
use crate::i18n::Localizer;

/// Accordion step: clicking the open item closes it, any other item
/// replaces it.
pub fn toggle_item(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub localizer: Localizer,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <h2>{props.localizer.t("faq.title")}</h2>
            { for FAQS.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(toggle_item(*open, index)))
                };
                html! {
                    <FaqItem
                        key={index}
                        question={entry.question}
                        answer={entry.answer}
                        is_open={*open == Some(index)}
                        {on_toggle}
                    />
                }
            })}
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .faq-section h2 {
                    font-size: 2.5rem;
                    text-align: center;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #4ade80);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .faq-item {
                    background: rgba(15, 23, 42, 0.75);
                    border: 1px solid rgba(74, 222, 128, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-item.open {
                    border-color: rgba(74, 222, 128, 0.4);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_closed_item() {
        assert_eq!(toggle_item(None, 2), Some(2));
    }

    #[test]
    fn test_toggle_closes_open_item() {
        assert_eq!(toggle_item(Some(2), 2), None);
    }

    #[test]
    fn test_toggle_switches_item() {
        assert_eq!(toggle_item(Some(0), 3), Some(3));
    }
}
