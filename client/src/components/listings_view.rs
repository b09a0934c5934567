//! Catalog results: grid or map, with pagination.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::map_view::{MapPoint, MapView};
use crate::state::catalog::{CatalogState, CatalogView};
use crate::util::browser;

#[component]
pub fn ListingsView(catalog: RwSignal<CatalogState>) -> impl IntoView {
    let view_mode = move || catalog.with(|c| c.view);
    let found = move || catalog.with(|c| c.filtered().len());

    let points = Memo::new(move |_| {
        catalog.with(|c| {
            c.filtered()
                .into_iter()
                .filter_map(|l| {
                    l.coordinates().map(|(lat, lng)| MapPoint {
                        lat,
                        lng,
                        title: l.title.clone(),
                        href: Some(format!("/listing/{}", l.id)),
                    })
                })
                .collect::<Vec<_>>()
        })
    });

    let go_to = move |page: usize| {
        catalog.update(|c| c.go_to_page(page));
        browser::scroll_to_top();
    };

    view! {
        <section class="listings-view">
            <div class="listings-view__toolbar">
                <span class="listings-view__count">{move || format!("Найдено: {}", found())}</span>
                <div class="segmented">
                    <button
                        class="segmented__item"
                        class=("segmented__item--active", move || view_mode() == CatalogView::Grid)
                        on:click=move |_| catalog.update(|c| c.view = CatalogView::Grid)
                    >
                        "Список"
                    </button>
                    <button
                        class="segmented__item"
                        class=("segmented__item--active", move || view_mode() == CatalogView::Map)
                        on:click=move |_| catalog.update(|c| c.view = CatalogView::Map)
                    >
                        "Карта"
                    </button>
                </div>
            </div>

            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="listings-view__status">"Загрузка..."</p> }
            >
                <Show
                    when=move || { found() > 0 }
                    fallback=|| view! { <p class="listings-view__status">"Ничего не найдено"</p> }
                >
                    {move || match view_mode() {
                        CatalogView::Grid => view! {
                            <div class="listings-grid">
                                {catalog
                                    .with(|c| c.page_items().into_iter().cloned().collect::<Vec<_>>())
                                    .into_iter()
                                    .map(|listing| view! { <ListingCard listing=listing/> })
                                    .collect_view()}
                            </div>
                            <Pagination catalog=catalog on_select=Callback::new(go_to)/>
                        }
                            .into_any(),
                        CatalogView::Map => view! { <MapView points=Signal::derive(move || points.get())/> }.into_any(),
                    }}
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn Pagination(catalog: RwSignal<CatalogState>, on_select: Callback<usize>) -> impl IntoView {
    let pages = move || catalog.with(CatalogState::page_count);
    let current = move || catalog.with(CatalogState::current_page);

    view! {
        <Show when=move || { pages() > 1 }>
            <nav class="pagination">
                <button
                    class="pagination__item"
                    disabled=move || current() == 0
                    on:click=move |_| on_select.run(current().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    (0..pages())
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination__item"
                                    class=("pagination__item--active", move || current() == page)
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page + 1}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__item"
                    disabled=move || { current() + 1 >= pages() }
                    on:click=move |_| on_select.run(current() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
