use contracts::system::auth::RegisterForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::api_utils::ApiError;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::api;
use crate::system::auth::guard::{use_deferred_navigate, LOGIN_PATH};

const REGISTER_FAILED: &str = "Registrasi gagal. Silakan coba lagi dengan username yang berbeda.";
const SERVER_UNREACHABLE: &str = "Tidak dapat terhubung ke server. Periksa koneksi internet Anda.";

fn register_error_message(e: &ApiError) -> String {
    match e {
        ApiError::Network(_) => SERVER_UNREACHABLE.to_string(),
        other => other.user_message(REGISTER_FAILED),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let go = use_deferred_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let current = form.get_untracked();
        if let Err(msg) = current.validate() {
            set_error_message.set(Some(msg));
            return;
        }
        let request = current.to_request();

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    log::info!("Registered {}", request.username);
                    set_is_loading.set(false);
                    go.set(Some(LOGIN_PATH.to_string()));
                }
                Err(e) => {
                    log::error!("Registration error: {:?}", e);
                    set_error_message.set(Some(register_error_message(&e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let text_input = move |id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str,
                           get: fn(&RegisterForm) -> String,
                           set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=input_type
                    id=id
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-toolbar">
                <ThemeToggle />
            </div>
            <div class="login-box">
                <h1>"Sistem Data Teknisi"</h1>
                <h2>"Buat akun baru"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {text_input("username", "Username", "text", "Masukkan username Anda",
                        |f| f.username.clone(), |f, v| f.username = v)}
                    {text_input("full_name", "Nama Lengkap", "text", "Masukkan nama lengkap Anda",
                        |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_input("email", "Email", "email", "Masukkan email Anda",
                        |f| f.email.clone(), |f, v| f.email = v)}
                    {text_input("password", "Password", "password", "Masukkan password Anda (min. 6 karakter)",
                        |f| f.password.clone(), |f, v| f.password = v)}
                    {text_input("confirm_password", "Konfirmasi Password", "password", "Konfirmasi password Anda",
                        |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Memproses..." } else { "Daftar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Sudah punya akun? " <A href="/login">"Login di sini"</A></p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_error_messages() {
        assert_eq!(
            register_error_message(&ApiError::Network("TypeError: Failed to fetch".into())),
            SERVER_UNREACHABLE
        );
        assert_eq!(
            register_error_message(&ApiError::Rejected { status: 409, message: None }),
            REGISTER_FAILED
        );
        assert_eq!(
            register_error_message(&ApiError::Rejected {
                status: 400,
                message: Some("Username sudah digunakan".into())
            }),
            "Username sudah digunakan"
        );
    }
}
