use crate::shared::icons::icon;
use leptos::prelude::*;

/// Текст "Menampilkan x–y dari z"; для пустого списка пустая строка
pub fn range_label(first: usize, last: usize, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    format!("Menampilkan {}–{} dari {}", first, last, total)
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 for an empty list)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Halaman pertama"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Berikutnya"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=is_last
                title="Halaman terakhir"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(9, 12, 12), "Menampilkan 9–12 dari 12");
        assert_eq!(range_label(0, 0, 0), "");
    }
}
