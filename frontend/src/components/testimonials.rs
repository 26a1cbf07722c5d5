use yew::prelude::*;
use yew_hooks::use_interval;

use crate::catalog::TESTIMONIALS;
use crate::i18n::Localizer;

const AUTOPLAY_MS: u32 = 6000;

/// Next carousel position, wrapping at both ends.
pub fn step(len: usize, current: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub localizer: Localizer,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let current = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    {
        let current = current.clone();
        use_interval(move || current.set(step(len, *current, true)), AUTOPLAY_MS);
    }

    let prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(step(len, *current, false)))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(step(len, *current, true)))
    };

    let shown = TESTIMONIALS.get(*current);

    html! {
        <section id="testimonials" class="testimonials">
            <h2>{props.localizer.t("testimonials.title")}</h2>
            <div class="carousel">
                <button class="carousel-arrow" onclick={prev}>{"‹"}</button>
                {
                    if let Some(t) = shown {
                        html! {
                            <div class="testimonial-card">
                                <p class="quote">{format!("“{}”", t.quote)}</p>
                                <div class="stars">{stars(t.rating)}</div>
                                <div class="author">
                                    <strong>{t.name}</strong>
                                    <span>{format!("{}, {}", t.role, t.location)}</span>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="carousel-arrow" onclick={next}>{"›"}</button>
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|index| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(index))
                    };
                    html! {
                        <button
                            class={classes!("dot", (*current == index).then(|| "active"))}
                            {onclick}
                        />
                    }
                })}
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .testimonials h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                    color: #fff;
                }
                .carousel {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    max-width: 760px;
                    margin: 0 auto;
                }
                .carousel-arrow {
                    background: rgba(74, 222, 128, 0.1);
                    border: 1px solid rgba(74, 222, 128, 0.3);
                    color: #4ade80;
                    border-radius: 50%;
                    width: 44px;
                    height: 44px;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .testimonial-card {
                    flex: 1;
                    background: rgba(15, 23, 42, 0.8);
                    border-radius: 16px;
                    padding: 2rem;
                    animation: fadeIn 0.5s ease-in-out;
                }
                .testimonial-card .quote {
                    font-size: 1.2rem;
                    color: #e2e8f0;
                    font-style: italic;
                }
                .testimonial-card .stars {
                    color: #facc15;
                    margin: 1rem 0;
                }
                .testimonial-card .author {
                    display: flex;
                    flex-direction: column;
                    color: #94a3b8;
                }
                .carousel-dots {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #334155;
                    cursor: pointer;
                }
                .dot.active {
                    background: #4ade80;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
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
    fn test_step_wraps_forward() {
        assert_eq!(step(4, 3, true), 0);
        assert_eq!(step(4, 1, true), 2);
    }

    #[test]
    fn test_step_wraps_backward() {
        assert_eq!(step(4, 0, false), 3);
        assert_eq!(step(4, 2, false), 1);
    }

    #[test]
    fn test_step_empty() {
        assert_eq!(step(0, 0, true), 0);
        assert_eq!(step(0, 0, false), 0);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
