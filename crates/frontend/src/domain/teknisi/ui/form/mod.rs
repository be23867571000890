//! Teknisi form UI
//!
//! - view_model.rs: state, loading and save commands
//! - mod.rs: Leptos components (create and edit pages share one form)

mod view_model;

pub use view_model::TeknisiFormViewModel;

use contracts::domain::teknisi::aggregate::DEFAULT_STATUS;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::system::auth::guard::use_deferred_navigate;

#[component]
#[allow(non_snake_case)]
fn TeknisiForm(id: Option<String>) -> impl IntoView {
    let go = use_deferred_navigate();
    let vm = TeknisiFormViewModel::new(id, go);
    vm.load_if_needed();

    view! {
        <Shell title=vm.title()>
            <div class="page details-container">
                <div class="header">
                    <h1 class="header__title">{vm.title()}</h1>
                    <div class="header__actions">
                        <A href="/teknisi/tampil" attr:class="button button--secondary">
                            {icon("arrow-left")}
                            "Kembali"
                        </A>
                    </div>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !vm.is_loading.get()
                    fallback=|| view! { <div class="page-loading">"Memuat data..."</div> }
                >
                    <form
                        class="details-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            vm.save_command();
                        }
                    >
                        <div class="form-group">
                            <label for="nama">"Nama"</label>
                            <input
                                type="text"
                                id="nama"
                                placeholder="Nama"
                                prop:value=move || vm.form.with(|f| f.nama.clone())
                                on:input=move |ev| vm.form.update(|f| f.nama = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="jurusan">"Jurusan"</label>
                            <input
                                type="text"
                                id="jurusan"
                                placeholder="Jurusan"
                                prop:value=move || vm.form.with(|f| f.jurusan.clone())
                                on:input=move |ev| vm.form.update(|f| f.jurusan = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="Email (opsional)"
                                prop:value=move || vm.form.with(|f| f.email.clone().unwrap_or_default())
                                on:input=move |ev| vm.form.update(|f| f.email = Some(event_target_value(&ev)))
                            />
                        </div>

                        <div class="form-group">
                            <label for="telepon">"Telepon"</label>
                            <input
                                type="tel"
                                id="telepon"
                                placeholder="Telepon (opsional)"
                                prop:value=move || vm.form.with(|f| f.telepon.clone().unwrap_or_default())
                                on:input=move |ev| vm.form.update(|f| f.telepon = Some(event_target_value(&ev)))
                            />
                        </div>

                        <div class="form-group">
                            <label for="status">"Status"</label>
                            <select
                                id="status"
                                prop:value=move || vm.form.with(|f| f.status.clone().unwrap_or_else(|| DEFAULT_STATUS.to_string()))
                                on:change=move |ev| vm.form.update(|f| f.status = Some(event_target_value(&ev)))
                            >
                                <option value="active">"active"</option>
                                <option value="inactive">"inactive"</option>
                            </select>
                        </div>

                        <div class="details-actions">
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || vm.is_saving.get()
                            >
                                {move || if vm.is_saving.get() {
                                    "Menyimpan..."
                                } else if vm.is_edit_mode() {
                                    "Update"
                                } else {
                                    "Simpan"
                                }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </Shell>
    }
}

/// `/teknisi/tambah`
#[component]
#[allow(non_snake_case)]
pub fn TeknisiCreate() -> impl IntoView {
    view! { <TeknisiForm id=None /> }
}

/// `/teknisi/edit/:id`
#[component]
#[allow(non_snake_case)]
pub fn TeknisiEdit() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));
    view! { <TeknisiForm id=id /> }
}
