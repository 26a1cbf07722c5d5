use yew::prelude::*;

use crate::auth::handle::Session;
use crate::catalog::{ACTIVITY, FRAUD_TOPICS, PROGRESS, THREATS, WEEKLY_THREATS};
use crate::components::faq::toggle_item;
use crate::components::sidebar::DashboardLayout;
use crate::components::threat_graph::ThreatGraph;
use crate::i18n::Localizer;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: Session,
    pub localizer: Localizer,
}

#[function_component]
pub fn Dashboard(props: &DashboardProps) -> Html {
    let t = |key: &str| props.localizer.t(key);
    let name = props.session.user().map(|u| u.name.clone()).unwrap_or_default();

    html! {
        <DashboardLayout session={props.session.clone()} localizer={props.localizer.clone()} active={Route::Dashboard}>
            <h1 class="dashboard-title">{format!("{}, {}", t("dashboard.welcome"), name)}</h1>
            <div class="dashboard-grid">
                <section class="panel wide">
                    <ThreatGraph caption={t("dashboard.chart")} data={WEEKLY_THREATS} />
                </section>
                <section class="panel">
                    <h2>{t("dashboard.threats")}</h2>
                    <ul class="threat-list">
                        { for THREATS.iter().map(|threat| html! {
                            <li>
                                <div class="threat-head">
                                    <strong>{threat.title}</strong>
                                    <span class={threat.severity.badge_class()}>{threat.severity.label()}</span>
                                </div>
                                <p>{threat.description}</p>
                                <small>{format!("{} · {}", threat.source, threat.detected)}</small>
                            </li>
                        })}
                    </ul>
                </section>
                <section class="panel">
                    <h2>{t("dashboard.progress")}</h2>
                    { for PROGRESS.iter().map(|record| html! {
                        <div class="progress-row">
                            <div class="progress-label">
                                <span>{record.module}</span>
                                <span>{format!("{}%", record.percent())}</span>
                            </div>
                            <div class="progress-track">
                                <div class="progress-fill" style={format!("width: {}%;", record.percent())}></div>
                            </div>
                        </div>
                    })}
                </section>
                <section class="panel">
                    <h2>{t("dashboard.activity")}</h2>
                    <ul class="activity-list">
                        { for ACTIVITY.iter().map(|activity| html! {
                            <li>
                                <strong>{activity.title}</strong>
                                <span>{activity.detail}</span>
                                <small>{activity.time}</small>
                            </li>
                        })}
                    </ul>
                </section>
            </div>
            <style>
                {DASHBOARD_CSS}
            </style>
        </DashboardLayout>
    }
}

#[function_component]
pub fn Tools(props: &DashboardProps) -> Html {
    let t = |key: &str| props.localizer.t(key);
    let expanded = use_state(|| None::<usize>);

    html! {
        <DashboardLayout session={props.session.clone()} localizer={props.localizer.clone()} active={Route::Tools}>
            <h1 class="dashboard-title">{t("dashboard.tools_title")}</h1>
            <p class="dashboard-subtitle">{t("dashboard.tools_subtitle")}</p>
            <div class="topic-grid">
                { for FRAUD_TOPICS.iter().enumerate().map(|(index, topic)| {
                    let is_open = *expanded == Some(index);
                    let onclick = {
                        let expanded = expanded.clone();
                        Callback::from(move |_: MouseEvent| expanded.set(toggle_item(*expanded, index)))
                    };
                    html! {
                        <div class={classes!("panel", "topic-card", is_open.then(|| "open"))} {onclick} key={index}>
                            <div class="threat-head">
                                <h3>{topic.title}</h3>
                                <span class="badge medium">{topic.badge}</span>
                            </div>
                            <p>{topic.description}</p>
                            if is_open {
                                <ul class="topic-tips">
                                    { for topic.tips.iter().map(|tip| html! { <li>{*tip}</li> }) }
                                </ul>
                            }
                        </div>
                    }
                })}
            </div>
            <style>
                {DASHBOARD_CSS}
            </style>
        </DashboardLayout>
    }
}

pub const DASHBOARD_CSS: &str = r#"
.dashboard-title {
    color: #fff;
    font-size: 2rem;
    margin-bottom: 0.5rem;
}
.dashboard-subtitle {
    color: #94a3b8;
    margin-bottom: 2rem;
}
.dashboard-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 1.5rem;
}
.panel {
    background: rgba(15, 23, 42, 0.8);
    border: 1px solid rgba(74, 222, 128, 0.1);
    border-radius: 16px;
    padding: 1.5rem;
    color: #e2e8f0;
}
.panel.wide {
    grid-column: 1 / -1;
}
.panel h2 {
    font-size: 1.2rem;
    margin-bottom: 1rem;
}
.threat-list, .activity-list, .topic-tips {
    list-style: none;
    padding: 0;
    margin: 0;
}
.threat-list li, .activity-list li {
    padding: 0.75rem 0;
    border-bottom: 1px solid rgba(148, 163, 184, 0.1);
}
.activity-list li {
    display: flex;
    flex-direction: column;
}
.threat-head {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
}
.badge {
    font-size: 0.75rem;
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
}
.badge.critical { background: rgba(239, 68, 68, 0.2); color: #f87171; }
.badge.high { background: rgba(249, 115, 22, 0.2); color: #fb923c; }
.badge.medium { background: rgba(234, 179, 8, 0.2); color: #facc15; }
.badge.low { background: rgba(34, 197, 94, 0.2); color: #4ade80; }
.progress-row {
    margin-bottom: 1rem;
}
.progress-label {
    display: flex;
    justify-content: space-between;
    font-size: 0.9rem;
}
.progress-track {
    height: 8px;
    background: #1e293b;
    border-radius: 999px;
    margin-top: 0.4rem;
}
.progress-fill {
    height: 100%;
    background: linear-gradient(90deg, #16a34a, #4ade80);
    border-radius: 999px;
}
.topic-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 1.5rem;
}
.topic-card {
    cursor: pointer;
}
.topic-card.open {
    border-color: rgba(74, 222, 128, 0.4);
}
.topic-tips li {
    padding: 0.4rem 0;
    color: #cbd5e1;
}
.topic-tips li::before {
    content: "✔ ";
    color: #4ade80;
}
"#;
