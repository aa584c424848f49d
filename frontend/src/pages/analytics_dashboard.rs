use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::analytics::{use_analytics_snapshot, ProviderHandle};
use crate::components::bottom_nav::{BottomNav, NavDestination};
use crate::components::category_progress::CategoryProgress;
use crate::components::chart::Chart;
use crate::components::contributor_row::ContributorRow;
use crate::components::kpi_card::KpiCard;
use crate::theme::Theme;
use crate::view_model::DashboardView;

#[derive(Properties, PartialEq)]
pub struct AnalyticsDashboardScreenProps {
    /// Source of snapshots; subscribed once when the screen mounts
    pub provider: ProviderHandle,
    pub on_nav_press: Callback<NavDestination>,
    #[prop_or_default]
    pub theme: Rc<Theme>,
}

/// Admin analytics overview: KPI cards, weekly trend, category breakdown and
/// the contributor leaderboard, all derived from the latest snapshot.
#[function_component(AnalyticsDashboardScreen)]
pub fn analytics_dashboard_screen(props: &AnalyticsDashboardScreenProps) -> Html {
    let snapshot = use_analytics_snapshot(&props.provider);
    let theme = props.theme.clone();
    let view = DashboardView::from_snapshot(&snapshot, &theme);

    debug!(
        "Rendering analytics dashboard: {} categories, {} contributors",
        view.categories.len(),
        view.contributors.len()
    );

    html! {
        <div
            class="analytics-dashboard min-h-screen flex flex-col"
            style={format!("background-color: {}; color: {};", theme.background, theme.text)}
        >
            <header class="flex items-center justify-between px-4 pt-6 pb-4">
                <h1 class="text-2xl font-bold tracking-tight">{"Analytics"}</h1>
                <div
                    class="period-badge flex items-center gap-1 rounded-full px-3 py-1 bg-white/5"
                    style={format!("color: {};", theme.text_muted)}
                >
                    <span class="material-icons text-xs">{"calendar_today"}</span>
                    <span class="text-xs font-medium">{"Last 30 Days"}</span>
                    <span class="material-icons text-base">{"arrow_drop_down"}</span>
                </div>
            </header>

            <main class="flex-1 overflow-y-auto px-4 pb-28 space-y-4">
                // KPI grid
                <section class="kpi-grid grid grid-cols-2 gap-3">
                    { for view.kpis.iter().map(|card| html! {
                        <KpiCard key={card.label} card={card.clone()} />
                    }) }
                </section>

                // Weekly trend
                <section class="section-card rounded-xl p-4 bg-white/5 border border-white/10">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h2 class="text-base font-bold">{"Incident Trends"}</h2>
                            <p class="text-xs" style={format!("color: {};", theme.text_muted)}>
                                {"Weekly Volume"}
                            </p>
                        </div>
                    </div>
                    <Chart
                        data_points={view.trend.clone()}
                        viewport={theme.chart}
                        color={AttrValue::from(theme.primary.clone())}
                    />
                    <div class="x-axis flex justify-between mt-2">
                        { for view.axis_labels.iter().map(|day| html! {
                            <span key={*day} class="text-[10px]" style={format!("color: {};", theme.text_muted)}>
                                {*day}
                            </span>
                        }) }
                    </div>
                </section>

                // Categories
                <section class="section-card rounded-xl p-4 bg-white/5 border border-white/10">
                    <h2 class="text-base font-bold mb-4">{"Incidents by Category"}</h2>
                    <div class="category-list space-y-4">
                        if let Some(message) = view.categories_placeholder() {
                            <p class="empty-state text-sm text-center" style={format!("color: {};", theme.text_muted)}>
                                {message}
                            </p>
                        } else {
                            { for view.categories.iter().enumerate().map(|(i, row)| html! {
                                <CategoryProgress
                                    key={format!("{}-{}", i, row.label)}
                                    label={row.label.clone()}
                                    count={row.count}
                                    percentage={row.fill_percent}
                                    color={row.color.clone()}
                                />
                            }) }
                        }
                    </div>
                </section>

                // Leaderboard
                <section class="section-card rounded-xl p-4 bg-white/5 border border-white/10">
                    <div class="flex items-center justify-between mb-2">
                        <h2 class="text-base font-bold">{"Top Contributors"}</h2>
                        <button type="button" class="text-xs font-semibold" style={format!("color: {};", theme.primary)}>
                            {"View All"}
                        </button>
                    </div>
                    <div class="divide-y divide-white/5">
                        { for view.contributors.iter().enumerate().map(|(i, row)| html! {
                            <ContributorRow
                                key={format!("{}-{}", i, row.id)}
                                row={row.clone()}
                                accent={theme.primary.clone()}
                                rank_badge={theme.rank_badge.clone()}
                            />
                        }) }
                    </div>
                    if let Some(message) = view.contributors_placeholder() {
                        <p class="empty-state text-sm text-center" style={format!("color: {};", theme.text_muted)}>
                            {message}
                        </p>
                    }
                </section>
            </main>

            <BottomNav
                active={NavDestination::Analytics}
                on_nav_press={props.on_nav_press.clone()}
                theme={theme.clone()}
            />
        </div>
    }
}
