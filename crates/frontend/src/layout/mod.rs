pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell for authenticated pages.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader title=title />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
