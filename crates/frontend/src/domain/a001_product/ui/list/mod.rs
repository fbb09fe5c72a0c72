pub mod columns;
pub mod state;

use contracts::domain::a001_product::Product;
use contracts::enums::{ProductCategory, ProductStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::columns::{FILTER_CATEGORY, FILTER_STATUS, PRICE_DIGITS};
use self::state::create_state;
use crate::layout::notification_service::use_notifications;
use crate::shared::bulk_action::{BulkAction, BulkKind};
use crate::shared::components::table::{
    format_currency, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::{
    CategorySelect, ConfirmDialog, FilterPanel, PageHeader, PaginationControls,
};
use crate::shared::config::use_settings;
use crate::shared::data::mock;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_actions::{bulk_dialog_open, confirm_bulk, export_selection, request_bulk};
use crate::shared::list_utils::SearchInput;
use crate::shared::repository::{InMemoryRepository, Repository};
use crate::shared::viewport::use_viewport;

const SKELETON_ROWS: usize = 6;

fn status_badge_class(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Active => "badge badge--success",
        ProductStatus::Draft => "badge badge--neutral",
        ProductStatus::OutOfStock => "badge badge--warning",
    }
}

fn category_options() -> Vec<(&'static str, &'static str)> {
    ProductCategory::all()
        .into_iter()
        .map(|c| (c.code(), c.display_name()))
        .collect()
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    ProductStatus::all()
        .into_iter()
        .map(|s| (s.code(), s.display_name()))
        .collect()
}

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let settings = use_settings();
    let notifications = use_notifications();
    let viewport = use_viewport();

    let repository = RwSignal::new(InMemoryRepository::new(mock::products()));
    let bulk = RwSignal::new(BulkAction::new(BulkKind::Delete));
    let dialog_open = bulk_dialog_open(bulk);
    let is_filter_expanded = RwSignal::new(false);

    // Имитация задержки загрузки
    let loading_delay = settings.with_untracked(|s| s.loading_delay_ms);
    spawn_local(async move {
        TimeoutFuture::new(loading_delay).await;
        state.try_update(|s| s.is_loaded = true);
    });

    let page_size = Memo::new(move |_| settings.with(|s| s.page_sizes.for_viewport(viewport.get())));
    let list_view = Memo::new(move |_| {
        let size = page_size.get();
        repository.with(|repo| state.with(|s| s.view(repo.items(), size)))
    });

    // Номер страницы приводится к допустимому после фильтрации
    Effect::new(move |_| {
        let clamped = list_view.with(|v| v.page);
        if state.with_untracked(|s| s.page) != clamped {
            state.update(|s| s.page = clamped);
        }
    });

    let selection = Signal::derive(move || state.with(|s| s.selection.clone()));
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));
    let visible_ids = Signal::derive(move || {
        list_view.with(|v| v.page_items.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
    });
    let current_sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let is_loaded = Signal::derive(move || state.with(|s| s.is_loaded));
    let in_flight = Signal::derive(move || bulk.with(|b| b.is_in_flight()));

    let on_search = Callback::new(move |query: String| state.update(|s| s.set_search(query)));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let on_page_change = Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)));
    let on_toggle_all = Callback::new(move |checked: bool| {
        let ids = visible_ids.get_untracked();
        state.update(|s| s.selection.toggle_all(ids, checked));
    });
    let on_toggle_row = Callback::new(move |(id, checked): (String, bool)| {
        state.update(|s| s.selection.set(&id, checked));
    });

    let on_delete = move |_| request_bulk(bulk, state, notifications);
    let on_export = move |_| export_selection(repository, state, notifications);
    let on_confirm = Callback::new(move |_| {
        let delay = settings.with_untracked(|s| s.bulk_action_delay_ms);
        confirm_bulk(
            bulk,
            state,
            repository,
            |repo: &mut InMemoryRepository<Product>, ids: &[String]| repo.remove_many(ids),
            "products",
            delay,
            notifications,
        );
    });
    let on_cancel = Callback::new(move |_| bulk.update(|b| b.dismiss()));

    view! {
        <div class="page" data-page-id="a001_product--list">
            <PageHeader
                title="Products"
                subtitle="Catalog items, stock and pricing".to_string()
                count=Signal::derive(move || list_view.with(|v| v.total_count))
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=on_export
                    disabled=Signal::derive(move || selected_count.get() == 0)
                >
                    {icon("download")}
                    {move || format!("Export ({})", selected_count.get())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_delete
                    disabled=Signal::derive(move || selected_count.get() == 0 || in_flight.get())
                >
                    {icon("trash")}
                    {move || format!("Delete ({})", selected_count.get())}
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || list_view.with(|v| v.page))
                            total_pages=Signal::derive(move || list_view.with(|v| v.total_pages))
                            total_count=Signal::derive(move || list_view.with(|v| v.total_count))
                            page_size=page_size
                            on_page_change=on_page_change
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                                on_change=on_search
                                debounce_ms=Signal::derive(move || settings.with(|s| s.search_debounce_ms))
                                placeholder="Search by name, SKU or category..."
                            />
                            <CategorySelect
                                label="Category"
                                options=category_options()
                                value=Signal::derive(move || state.with(|s| s.filter_value(FILTER_CATEGORY)))
                                on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_CATEGORY, v)))
                            />
                            <CategorySelect
                                label="Status"
                                options=status_options()
                                value=Signal::derive(move || state.with(|s| s.filter_value(FILTER_STATUS)))
                                on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_STATUS, v)))
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update(|s| s.reset_filters())
                            >
                                {icon("refresh")}
                                "Reset"
                            </Button>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 860px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    visible_ids=visible_ids
                                    selection=selection
                                    on_change=on_toggle_all
                                />
                                <SortableHeaderCell label="Name" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=220.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"SKU"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Category"</TableHeaderCell>
                                <SortableHeaderCell label="Price" sort_field="price" current_sort=current_sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Stock" sort_field="stock" current_sort=current_sort on_sort=on_sort align="right" min_width=80.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <Show
                                when=move || is_loaded.get()
                                fallback=|| (0..SKELETON_ROWS).map(|_| view! {
                                    <TableRow class="table__row--skeleton">
                                        <TableCell attr:colspan="8">
                                            <div class="skeleton skeleton--line"></div>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()
                            >
                                <Show
                                    when=move || list_view.with(|v| v.total_count > 0)
                                    fallback=|| view! {
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                <div class="table__empty">"No products match the current filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                >
                                    <For
                                        each=move || list_view.with(|v| v.page_items.clone())
                                        key=|p| p.id.clone()
                                        children=move |p: Product| {
                                            view! {
                                                <TableRow>
                                                    <TableCellCheckbox
                                                        item_id=p.id.clone()
                                                        selection=selection
                                                        on_change=on_toggle_row
                                                    />
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{p.name.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{p.sku.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{p.category.display_name()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <TableCellLayout>{format_currency(p.price, PRICE_DIGITS)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <TableCellLayout>{p.stock}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class=status_badge_class(p.status)>{p.status.display_name()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{format_date(&p.created_at)}</TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </Show>
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>

            <ConfirmDialog
                open=dialog_open
                title=Signal::derive(move || format!("Delete {} products?", bulk.with(|b| b.pending_count())))
                message=Signal::derive(|| "Selected products will be removed from the catalog.".to_string())
                confirm_label=Signal::derive(|| "Delete".to_string())
                busy=in_flight
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </div>
    }
}
