use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/teknisi/tampil";

/// Отложенная навигация: запись пути в сигнал, переход выполняет эффект.
///
/// Сигнал `Copy`, поэтому его можно захватывать в обработчики и `spawn_local`.
pub fn use_deferred_navigate() -> WriteSignal<Option<String>> {
    let navigate = use_navigate();
    let (target, set_target) = signal(None::<String>);
    Effect::new(move |_| {
        if let Some(path) = target.get() {
            navigate(&path, Default::default());
        }
    });
    set_target
}

/// Удаляет токен и отправляет на страницу входа
pub fn logout(go: WriteSignal<Option<String>>) {
    Session::browser().clear();
    log::info!("Logged out");
    go.set(Some(LOGIN_PATH.to_string()));
}

/// Component that requires a stored session token.
/// Without a token nothing is rendered and the user is sent to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let has_token = Session::browser().is_authenticated();
    let go = use_deferred_navigate();

    if !has_token {
        go.set(Some(LOGIN_PATH.to_string()));
    }

    view! {
        <Show
            when=move || has_token
            fallback=|| view! { <div class="page-loading">"Mengalihkan ke halaman login..."</div> }
        >
            {children()}
        </Show>
    }
}
