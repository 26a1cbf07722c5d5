use yew::prelude::*;

use crate::catalog::VIDEOS;
use crate::i18n::Localizer;

#[derive(Properties, PartialEq)]
pub struct VideoShowcaseProps {
    pub localizer: Localizer,
}

#[function_component(VideoShowcase)]
pub fn video_showcase(props: &VideoShowcaseProps) -> Html {
    let selected = use_state(|| 0usize);
    let Some(video) = VIDEOS.get(*selected) else {
        return html! {};
    };

    html! {
        <section id="videos" class="video-showcase">
            <h2>{props.localizer.t("video.title")}</h2>
            <p class="video-subtitle">{props.localizer.t("video.subtitle")}</p>
            <div class="video-layout">
                <div class="video-player">
                    <iframe
                        src={video.embed_url}
                        title={video.title}
                        allow="accelerometer; encrypted-media; picture-in-picture"
                        allowfullscreen=true
                    />
                    <h3>{video.title}</h3>
                    <p>{video.description}</p>
                </div>
                <ul class="video-list">
                    { for VIDEOS.iter().enumerate().map(|(index, item)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(index))
                        };
                        html! {
                            <li class={classes!((*selected == index).then(|| "active"))} {onclick}>
                                <span class="video-title">{item.title}</span>
                                <span class="video-duration">{item.duration}</span>
                            </li>
                        }
                    })}
                </ul>
            </div>
            <style>
                {r#"
                .video-showcase {
                    padding: 4rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .video-showcase h2 {
                    font-size: 2.5rem;
                    text-align: center;
                    color: #fff;
                }
                .video-subtitle {
                    text-align: center;
                    color: #94a3b8;
                    margin-bottom: 2rem;
                }
                .video-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 1.5rem;
                }
                .video-player iframe {
                    width: 100%;
                    aspect-ratio: 16/9;
                    border: none;
                    border-radius: 12px;
                }
                .video-player h3 {
                    color: #fff;
                }
                .video-player p {
                    color: #94a3b8;
                }
                .video-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .video-list li {
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem;
                    border-radius: 10px;
                    color: #cbd5e1;
                    cursor: pointer;
                }
                .video-list li.active {
                    background: rgba(74, 222, 128, 0.12);
                    color: #4ade80;
                }
                @media (max-width: 768px) {
                    .video-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
