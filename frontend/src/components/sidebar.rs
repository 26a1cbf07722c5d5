use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::handle::Session;
use crate::i18n::Localizer;
use crate::Route;

pub const OPEN_WIDTH: u32 = 256;
pub const COLLAPSED_WIDTH: u32 = 80;

pub fn sidebar_width(open: bool) -> u32 {
    if open {
        OPEN_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

/// Inline style for the main region so it starts where the sidebar ends.
pub fn main_style(open: bool) -> String {
    format!("margin-left: {}px; transition: margin-left 0.3s ease;", sidebar_width(open))
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub session: Session,
    pub localizer: Localizer,
    pub active: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let open = use_state(|| true);
    let t = |key: &str| props.localizer.t(key);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };

    let is_admin = props.session.user().map_or(false, |u| u.is_admin());
    let item = |route: Route, icon: &'static str, label: String| {
        let active = props.active == route;
        html! {
            <Link<Route> to={route} classes={classes!("sidebar-link", active.then(|| "active"))}>
                <span class="sidebar-icon">{icon}</span>
                if *open {
                    <span class="sidebar-label">{label}</span>
                }
            </Link<Route>>
        }
    };

    html! {
        <div class="dashboard-shell">
            <aside
                class={classes!("sidebar", (!*open).then(|| "collapsed"))}
                style={format!("width: {}px;", sidebar_width(*open))}
            >
                <button class="sidebar-toggle" onclick={toggle} title={t("sidebar.collapse")}>
                    {if *open { "«" } else { "»" }}
                </button>
                <nav class="sidebar-nav">
                    {item(Route::Dashboard, "📊", t("sidebar.overview"))}
                    {item(Route::Tools, "🧰", t("sidebar.tools"))}
                    if is_admin {
                        {item(Route::Admin, "🔐", t("sidebar.admin"))}
                    }
                </nav>
            </aside>
            <main class="dashboard-main" style={main_style(*open)}>
                { for props.children.iter() }
            </main>
            <style>
                {r#"
                .dashboard-shell {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .sidebar {
                    position: fixed;
                    top: 74px;
                    left: 0;
                    bottom: 0;
                    background: rgba(15, 23, 42, 0.95);
                    border-right: 1px solid rgba(74, 222, 128, 0.1);
                    transition: width 0.3s ease;
                    overflow: hidden;
                    z-index: 20;
                }
                .sidebar-toggle {
                    width: 100%;
                    background: none;
                    border: none;
                    color: #94a3b8;
                    padding: 1rem;
                    font-size: 1.2rem;
                    cursor: pointer;
                    text-align: right;
                }
                .sidebar.collapsed .sidebar-toggle {
                    text-align: center;
                }
                .sidebar-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 0 0.75rem;
                }
                .sidebar-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    border-radius: 10px;
                    color: #cbd5e1;
                    text-decoration: none;
                    white-space: nowrap;
                }
                .sidebar-link.active {
                    background: rgba(74, 222, 128, 0.12);
                    color: #4ade80;
                }
                .dashboard-main {
                    padding: 2rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_widths() {
        assert_eq!(sidebar_width(true), 256);
        assert_eq!(sidebar_width(false), 80);
    }

    #[test]
    fn test_main_region_follows_sidebar() {
        assert!(main_style(true).starts_with("margin-left: 256px;"));
        assert!(main_style(false).starts_with("margin-left: 80px;"));
    }
}
