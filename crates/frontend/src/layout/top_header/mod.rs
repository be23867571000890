//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Page title
//! - Theme toggle
//! - Logout

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::guard::{logout, use_deferred_navigate};
use leptos::prelude::*;

#[component]
pub fn TopHeader(title: &'static str) -> impl IntoView {
    let ctx = use_global_context();
    let go = use_deferred_navigate();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    aria-label="Toggle Sidebar"
                    title=move || if is_sidebar_visible() { "Sembunyikan menu" } else { "Tampilkan menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                </div>

                <button class="top-header__icon-btn" on:click=move |_| logout(go) title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
