//! Карточка техника только для чтения

use contracts::domain::teknisi::aggregate::{Teknisi, DEFAULT_STATUS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::teknisi::api;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::system::auth::guard::{use_deferred_navigate, LOGIN_PATH};
use crate::system::auth::session::{guarded_fetch, GuardOutcome, Session};

/// Бейдж статуса: "active" зелёный, остальное серое
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = if status.eq_ignore_ascii_case(DEFAULT_STATUS) {
        "badge badge--success"
    } else {
        "badge badge--neutral"
    };
    view! { <span class=class>{status}</span> }
}

fn field_row(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="details-row">
            <span class="details-row__label">{label}</span>
            <span class="details-row__value">{value.unwrap_or_else(|| "-".to_string())}</span>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TeknisiDetails() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let go = use_deferred_navigate();

    let (teknisi, set_teknisi) = signal::<Option<Teknisi>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    spawn_local(async move {
        let session = Session::browser();
        match guarded_fetch(&session, |token| api::fetch_by_id(token, id)).await {
            GuardOutcome::Loaded(t) => set_teknisi.set(Some(t)),
            GuardOutcome::RedirectToLogin => go.set(Some(LOGIN_PATH.to_string())),
            GuardOutcome::Failed(e) => set_error.set(Some(e.user_message("Gagal memuat data teknisi"))),
        }
        set_is_loading.set(false);
    });

    view! {
        <Shell title="Detail Teknisi">
            <div class="page details-container">
                <div class="header">
                    <h1 class="header__title">"Detail Teknisi"</h1>
                    <div class="header__actions">
                        <A href="/teknisi/tampil" attr:class="button button--secondary">
                            {icon("arrow-left")}
                            "Kembali"
                        </A>
                    </div>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || {
                    if is_loading.get() {
                        return view! { <div class="page-loading">"Memuat data..."</div> }.into_any();
                    }
                    match teknisi.get() {
                        Some(t) => {
                            let edit_href = format!("/teknisi/edit/{}", t.id);
                            view! {
                                <div class="details-card">
                                    <div class="details-card__header">
                                        <h2>{t.nama.clone()}</h2>
                                        <StatusBadge status=t.status().to_string() />
                                    </div>
                                    {field_row("ID", Some(t.id.to_string()))}
                                    {field_row("Nama", Some(t.nama.clone()))}
                                    {field_row("Jurusan", Some(t.jurusan.clone()))}
                                    {field_row("Email", t.email.clone())}
                                    {field_row("Telepon", t.telepon.clone())}
                                    <div class="details-card__actions">
                                        <A href=edit_href attr:class="button button--primary">
                                            {icon("edit")}
                                            "Edit"
                                        </A>
                                    </div>
                                </div>
                            }.into_any()
                        }
                        None => view! { <div class="empty-state">"Data teknisi tidak ditemukan"</div> }.into_any(),
                    }
                }}
            </div>
        </Shell>
    }
}
