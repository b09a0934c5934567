//! Statistics tab: views, contact clicks and CTR for one listing.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Listing;
use crate::state::listing_stats::{StatsPeriod, StatsState, bar_percent, chronological, peak_day};
use crate::state::ui::UiState;
use crate::util::{format, remote::spawn_remote};

fn choose(ui: RwSignal<UiState>, stats: RwSignal<StatsState>, listing_id: i64, period: StatsPeriod) {
    let mut changed = false;
    stats.update(|s| changed = s.select(listing_id, period));
    if !changed {
        return;
    }
    stats.update(|s| s.loading = true);
    spawn_remote(
        ui,
        None,
        "Не удалось загрузить статистику",
        async move {
            let result = api::listing_stats(listing_id, period.days()).await;
            stats.update(|s| s.loading = false);
            result
        },
        move |data| {
            stats.update(|s| {
                if s.listing_id == Some(listing_id) && s.period == period {
                    s.stats = Some(data);
                }
            });
        },
    );
}

#[component]
pub fn StatisticsTab(listings: Vec<Listing>, stats: RwSignal<StatsState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let initial = stats.with_untracked(|s| s.listing_id).or_else(|| listings.first().map(|l| l.id));
    if let Some(listing_id) = initial {
        choose(ui, stats, listing_id, stats.with_untracked(|s| s.period));
    }

    let picker = listings
        .into_iter()
        .map(|l| {
            let id = l.id;
            view! {
                <button
                    class="chip"
                    class=("chip--active", move || stats.with(|s| s.listing_id == Some(id)))
                    on:click=move |_| choose(ui, stats, id, stats.with_untracked(|s| s.period))
                >
                    {l.title}
                </button>
            }
        })
        .collect_view();

    let periods = StatsPeriod::ALL
        .into_iter()
        .map(|period| {
            view! {
                <button
                    class="segmented__item"
                    class=("segmented__item--active", move || stats.with(|s| s.period == period))
                    on:click=move |_| {
                        if let Some(id) = stats.with_untracked(|s| s.listing_id) {
                            choose(ui, stats, id, period);
                        }
                    }
                >
                    {period.label()}
                </button>
            }
        })
        .collect_view();

    let report = move || {
        stats.with(|s| s.stats.clone()).map(|data| {
            let days = chronological(&data);
            let busiest = days.iter().map(|d| d.views).max().unwrap_or(0);
            let peak = peak_day(&data);
            let summary = data.summary;
            let bars = days
                .into_iter()
                .map(|d| {
                    let style = format!("height: {}%", bar_percent(d.views, busiest));
                    let title = format!("{}: {}", format::date(&d.date), d.views);
                    view! { <div class="stats-chart__bar" style=style title=title></div> }
                })
                .collect_view();
            view! {
                <div class="stats-tiles">
                    <div class="stat-tile">
                        <strong>{summary.total_views.to_string()}</strong>
                        <span>"Просмотров"</span>
                    </div>
                    <div class="stat-tile">
                        <strong>{summary.total_clicks.to_string()}</strong>
                        <span>"Кликов"</span>
                    </div>
                    <div class="stat-tile">
                        <strong>{summary.phone_clicks.to_string()}</strong>
                        <span>"Звонков"</span>
                    </div>
                    <div class="stat-tile">
                        <strong>{summary.telegram_clicks.to_string()}</strong>
                        <span>"Telegram"</span>
                    </div>
                    <div class="stat-tile stat-tile--accent">
                        <strong>{format!("{:.2}%", summary.ctr)}</strong>
                        <span>"Конверсия (CTR)"</span>
                    </div>
                </div>
                {peak.map(|d| view! { <p class="muted">{format!("Пик просмотров: {} ({})", format::date(&d.date), d.views)}</p> })}
                <div class="stats-chart">{bars}</div>
            }
        })
    };

    view! {
        <section class="owner-stats">
            <div class="chips">{picker}</div>
            <div class="segmented">{periods}</div>
            <Show
                when=move || !stats.with(|s| s.loading)
                fallback=|| view! { <p class="page-status">"Загрузка статистики..."</p> }
            >
                {report}
            </Show>
        </section>
    }
}
