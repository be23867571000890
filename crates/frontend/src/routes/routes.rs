use crate::domain::teknisi::ui::details::TeknisiDetails;
use crate::domain::teknisi::ui::form::{TeknisiCreate, TeknisiEdit};
use crate::domain::teknisi::ui::list::TeknisiList;
use crate::system::auth::guard::{RequireSession, HOME_PATH};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"404"</h1>
                <h2>"Halaman tidak ditemukan"</h2>
                <A href=HOME_PATH>"Kembali ke Dashboard"</A>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route
                    path=path!("/teknisi/tampil")
                    view=|| view! { <RequireSession><TeknisiList /></RequireSession> }
                />
                <Route
                    path=path!("/teknisi/tambah")
                    view=|| view! { <RequireSession><TeknisiCreate /></RequireSession> }
                />
                <Route
                    path=path!("/teknisi/edit/:id")
                    view=|| view! { <RequireSession><TeknisiEdit /></RequireSession> }
                />
                <Route
                    path=path!("/teknisi/:id")
                    view=|| view! { <RequireSession><TeknisiDetails /></RequireSession> }
                />
            </Routes>
        </Router>
    }
}
