use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::api;
use crate::system::auth::guard::{use_deferred_navigate, HOME_PATH};
use crate::system::auth::session::Session;

const LOGIN_FAILED: &str = "Login gagal. Periksa kembali username dan password Anda.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let go = use_deferred_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        set_error_message.set(None);

        if let Err(msg) = request.validate() {
            set_error_message.set(Some(msg));
            return;
        }

        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    Session::browser().save_token(&response.token);
                    log::info!("Logged in as {}", request.username);
                    set_is_loading.set(false);
                    go.set(Some(HOME_PATH.to_string()));
                }
                Err(e) => {
                    log::warn!("Login rejected: {:?}", e);
                    set_error_message.set(Some(e.user_message(LOGIN_FAILED)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-toolbar">
                <ThemeToggle />
            </div>
            <div class="login-box">
                <h1>"Sistem Data Teknisi"</h1>
                <h2>"Masuk ke akun Anda"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Masukkan username Anda"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="Masukkan password Anda"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                                title=move || if show_password.get() { "Sembunyikan password" } else { "Tampilkan password" }
                            >
                                {icon("eye")}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Memproses..." } else { "Login" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Belum punya akun? " <A href="/register">"Daftar di sini"</A></p>
                </div>
            </div>
        </div>
    }
}
