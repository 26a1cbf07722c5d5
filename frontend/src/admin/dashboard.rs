use yew::prelude::*;

use crate::auth::handle::Session;
use crate::catalog::{FRAUD_TOPICS, THREATS};
use crate::components::sidebar::DashboardLayout;
use crate::i18n::Localizer;
use crate::models::content::Severity;
use crate::pages::dashboard::DASHBOARD_CSS;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AdminProps {
    pub session: Session,
    pub localizer: Localizer,
}

#[function_component]
pub fn AdminDashboard(props: &AdminProps) -> Html {
    let t = |key: &str| props.localizer.t(key);
    let users = props.session.seed_users();
    let selected_user_id = use_state(|| None::<String>);
    let critical = THREATS
        .iter()
        .filter(|threat| threat.severity == Severity::Critical)
        .count();

    html! {
        <DashboardLayout session={props.session.clone()} localizer={props.localizer.clone()} active={Route::Admin}>
            <h1 class="dashboard-title">{t("admin.title")}</h1>
            <div class="dashboard-grid">
                <section class="panel stat">
                    <span class="stat-value">{users.len()}</span>
                    <span class="stat-label">{t("admin.users")}</span>
                </section>
                <section class="panel stat">
                    <span class="stat-value">{THREATS.len()}</span>
                    <span class="stat-label">{format!("{} ({} critical)", t("dashboard.threats"), critical)}</span>
                </section>
                <section class="panel stat">
                    <span class="stat-value">{FRAUD_TOPICS.len()}</span>
                    <span class="stat-label">{t("sidebar.tools")}</span>
                </section>
                <section class="panel wide">
                    <h2>{t("admin.users")}</h2>
                    <table class="users-table">
                        <thead>
                            <tr>
                                <th>{"ID"}</th>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Role"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| {
                                let is_selected = selected_user_id.as_deref() == Some(user.id.as_str());
                                let onclick = {
                                    let selected_user_id = selected_user_id.clone();
                                    let id = user.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if selected_user_id.as_deref() == Some(id.as_str()) {
                                            selected_user_id.set(None);
                                        } else {
                                            selected_user_id.set(Some(id.clone()));
                                        }
                                    })
                                };
                                html! {
                                    <>
                                        <tr {onclick} class={classes!("user-row", is_selected.then(|| "selected"))}>
                                            <td>{&user.id}</td>
                                            <td>{&user.name}</td>
                                            <td>{&user.email}</td>
                                            <td>{user.role.as_str()}</td>
                                        </tr>
                                        if is_selected {
                                            <tr class="details-row">
                                                <td colspan="4">
                                                    {format!(
                                                        "Joined {} via {}",
                                                        user.signup_date,
                                                        user.login_method.label()
                                                    )}
                                                </td>
                                            </tr>
                                        }
                                    </>
                                }
                            })}
                        </tbody>
                    </table>
                </section>
            </div>
            <style>
                {DASHBOARD_CSS}
                {r#"
                .stat {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #4ade80;
                }
                .stat-label {
                    color: #94a3b8;
                }
                .users-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .users-table th, .users-table td {
                    text-align: left;
                    padding: 0.75rem;
                    border-bottom: 1px solid rgba(148, 163, 184, 0.1);
                }
                .user-row {
                    cursor: pointer;
                }
                .user-row.selected {
                    background: rgba(74, 222, 128, 0.08);
                }
                .details-row td {
                    color: #94a3b8;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </DashboardLayout>
    }
}
