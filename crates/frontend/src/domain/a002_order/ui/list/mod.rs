pub mod columns;
pub mod state;

use contracts::domain::a002_order::Order;
use contracts::enums::OrderStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::columns::{cancel_orders, FILTER_STATUS, TOTAL_DIGITS};
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
use crate::shared::repository::InMemoryRepository;
use crate::shared::viewport::use_viewport;

const SKELETON_ROWS: usize = 6;

fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Processing => "badge badge--primary",
        OrderStatus::Shipped => "badge badge--info",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--danger",
    }
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s.code(), s.display_name()))
        .collect()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let settings = use_settings();
    let notifications = use_notifications();
    let viewport = use_viewport();

    let repository = RwSignal::new(InMemoryRepository::new(mock::orders()));
    let bulk = RwSignal::new(BulkAction::new(BulkKind::Cancel));
    let dialog_open = bulk_dialog_open(bulk);
    let is_filter_expanded = RwSignal::new(true);

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

    Effect::new(move |_| {
        let clamped = list_view.with(|v| v.page);
        if state.with_untracked(|s| s.page) != clamped {
            state.update(|s| s.page = clamped);
        }
    });

    let selection = Signal::derive(move || state.with(|s| s.selection.clone()));
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));
    let visible_ids = Signal::derive(move || {
        list_view.with(|v| v.page_items.iter().map(|o| o.id.clone()).collect::<Vec<_>>())
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

    let on_cancel_orders = move |_| request_bulk(bulk, state, notifications);
    let on_export = move |_| export_selection(repository, state, notifications);
    let on_confirm = Callback::new(move |_| {
        let delay = settings.with_untracked(|s| s.bulk_action_delay_ms);
        confirm_bulk(
            bulk,
            state,
            repository,
            |repo: &mut InMemoryRepository<Order>, ids: &[String]| cancel_orders(repo, ids),
            "orders",
            delay,
            notifications,
        );
    });
    let on_dismiss = Callback::new(move |_| bulk.update(|b| b.dismiss()));

    view! {
        <div class="page" data-page-id="a002_order--list">
            <PageHeader
                title="Orders"
                subtitle="Customer orders and fulfilment status".to_string()
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
                    on_click=on_cancel_orders
                    disabled=Signal::derive(move || selected_count.get() == 0 || in_flight.get())
                >
                    {icon("ban")}
                    {move || format!("Cancel ({})", selected_count.get())}
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
                                placeholder="Search by order number, customer or email..."
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
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    visible_ids=visible_ids
                                    selection=selection
                                    on_change=on_toggle_all
                                />
                                <SortableHeaderCell label="Order" sort_field="order_number" current_sort=current_sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer_name" current_sort=current_sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Total" sort_field="total" current_sort=current_sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Items" sort_field="items" current_sort=current_sort on_sort=on_sort align="right" min_width=70.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Date" sort_field="created_at" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <Show
                                when=move || is_loaded.get()
                                fallback=|| (0..SKELETON_ROWS).map(|_| view! {
                                    <TableRow class="table__row--skeleton">
                                        <TableCell attr:colspan="7">
                                            <div class="skeleton skeleton--line"></div>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()
                            >
                                <Show
                                    when=move || list_view.with(|v| v.total_count > 0)
                                    fallback=|| view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <div class="table__empty">"No orders match the current filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                >
                                    <For
                                        each=move || list_view.with(|v| v.page_items.clone())
                                        key=|o| (o.id.clone(), o.status)
                                        children=move |o: Order| {
                                            view! {
                                                <TableRow>
                                                    <TableCellCheckbox
                                                        item_id=o.id.clone()
                                                        selection=selection
                                                        on_change=on_toggle_row
                                                    />
                                                    <TableCell>
                                                        <TableCellLayout>{o.order_number.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <div class="table__cell-stack">
                                                                <span>{o.customer_name.clone()}</span>
                                                                <span class="table__cell-secondary">{o.customer_email.clone()}</span>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <TableCellLayout>{format_currency(o.total, TOTAL_DIGITS)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table__cell--right">
                                                        <TableCellLayout>{o.items}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class=status_badge_class(o.status)>{o.status.display_name()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{format_date(&o.created_at)}</TableCellLayout>
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
                title=Signal::derive(move || format!("Cancel {} orders?", bulk.with(|b| b.pending_count())))
                message=Signal::derive(|| "Delivered orders are skipped. The others are marked as cancelled.".to_string())
                confirm_label=Signal::derive(|| "Cancel orders".to_string())
                busy=in_flight
                on_confirm=on_confirm
                on_cancel=on_dismiss
            />
        </div>
    }
}
