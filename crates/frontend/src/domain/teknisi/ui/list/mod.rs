pub mod state;

use contracts::domain::teknisi::aggregate::Teknisi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use self::state::create_state;
use crate::domain::teknisi::api;
use crate::domain::teknisi::ui::details::StatusBadge;
use crate::layout::Shell;
use crate::shared::components::pagination_controls::{range_label, PaginationControls};
use crate::shared::export::export_to_pdf;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput, SortSelect};
use crate::system::auth::guard::{use_deferred_navigate, LOGIN_PATH};
use crate::system::auth::session::{guarded_fetch, GuardOutcome, Session};

const DELETE_CONFIRM: &str = "Apakah Anda yakin ingin menghapus teknisi ini?";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn TeknisiList() -> impl IntoView {
    let state = create_state();
    let go = use_deferred_navigate();

    let fetch = move || {
        state.update(|s| s.is_loading = true);
        spawn_local(async move {
            let session = Session::browser();
            match guarded_fetch(&session, api::fetch_all).await {
                GuardOutcome::Loaded(records) => {
                    log::debug!("Loaded {} teknisi", records.len());
                    state.update(|s| s.set_records(records));
                }
                GuardOutcome::RedirectToLogin => go.set(Some(LOGIN_PATH.to_string())),
                GuardOutcome::Failed(e) => state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(e.user_message("Gagal mengambil data teknisi"));
                }),
            }
        });
    };

    let handle_delete = move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        spawn_local(async move {
            let session = Session::browser();
            let outcome = guarded_fetch(&session, |token| async move {
                api::delete(&token, &id).await
            })
            .await;
            match outcome {
                GuardOutcome::Loaded(_) => fetch(),
                GuardOutcome::RedirectToLogin => go.set(Some(LOGIN_PATH.to_string())),
                GuardOutcome::Failed(e) => {
                    state.update(|s| s.error = Some(e.user_message("Gagal menghapus teknisi")))
                }
            }
        });
    };

    let handle_export = move |_| {
        let (visible, subtitle) = state.with_untracked(|s| (s.visible(), s.export_subtitle()));
        if let Err(e) = export_to_pdf::<Teknisi>(&visible, "Data Teknisi", &subtitle) {
            log::warn!("PDF export failed: {}", e);
            state.update(|s| s.error = Some(e));
        }
    };

    fetch();

    view! {
        <Shell title="Dashboard">
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Data Teknisi"</h1>
                    </div>
                    <div class="header__actions">
                        <A href="/teknisi/tambah" attr:class="button button--primary">
                            {icon("plus")}
                            "Tambah Teknisi"
                        </A>
                        <button
                            class="button button--secondary"
                            on:click=handle_export
                            disabled=move || state.with(|s| s.records.is_empty())
                        >
                            {icon("file-text")}
                            "Export PDF"
                        </button>
                    </div>
                </div>

                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.query.search.clone()))
                        on_change=Callback::new(move |v: String| state.update(|s| s.set_search(v)))
                    />
                    <SortSelect
                        value=Signal::derive(move || state.with(|s| s.query.sort))
                        on_change=Callback::new(move |key| state.update(|s| s.set_sort(key)))
                    />
                </div>

                {move || {
                    let (is_loading, is_loaded) = state.with(|s| (s.is_loading, s.is_loaded));
                    if is_loading && !is_loaded {
                        return view! { <div class="page-loading">"Memuat data..."</div> }.into_any();
                    }

                    let (page, search) = state.with(|s| (s.page(), s.query.search.clone()));
                    if page.is_empty() {
                        let text = if search.is_empty() {
                            "Belum ada data teknisi"
                        } else {
                            "Tidak ada teknisi yang cocok dengan pencarian"
                        };
                        return view! { <div class="empty-state">{text}</div> }.into_any();
                    }

                    let label = range_label(page.first_ordinal, page.last_ordinal, page.total);
                    let current_page = page.page;
                    let total_pages = page.total_pages;
                    let first = page.first_ordinal;

                    let rows = page.items.into_iter().enumerate().map(|(i, t)| {
                        let id = t.id.to_string();
                        let detail_href = format!("/teknisi/{}", id);
                        let edit_href = format!("/teknisi/edit/{}", id);
                        view! {
                            <tr>
                                <td>{first + i}</td>
                                <td>{highlight_matches(&t.nama, &search)}</td>
                                <td>{highlight_matches(&t.jurusan, &search)}</td>
                                <td><StatusBadge status=t.status().to_string() /></td>
                                <td class="table__actions">
                                    <A href=detail_href attr:class="action-link" attr:title="Detail">
                                        {icon("eye")}
                                    </A>
                                    <A href=edit_href attr:class="action-link action-link--warning" attr:title="Edit">
                                        {icon("edit")}
                                    </A>
                                    <button
                                        class="action-link action-link--danger"
                                        title="Hapus"
                                        on:click=move |_| handle_delete(id.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view();

                    view! {
                        <div class="table-wrapper">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"No"</th>
                                        <th>"Nama"</th>
                                        <th>"Jurusan"</th>
                                        <th>"Status"</th>
                                        <th>"Aksi"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                        <div class="table-footer">
                            <span class="table-footer__info">{label}</span>
                            <PaginationControls
                                current_page=Signal::derive(move || current_page)
                                total_pages=Signal::derive(move || total_pages)
                                on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                            />
                        </div>
                    }.into_any()
                }}
            </div>
        </Shell>
    }
}
