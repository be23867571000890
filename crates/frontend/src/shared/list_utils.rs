/// Утилиты для списков: подсветка совпадений, поле поиска, выбор сортировки
use contracts::shared::listing::SortKey;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Задержка применения поискового запроса, мс
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Разбивает текст на части: (фрагмент, совпал ли он с фильтром).
/// Регистр не учитывается, исходный текст не меняется.
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Сдвиг байтов после lowercase ломает срезы: подсветку не делаем
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((&text[last_pos..actual_pos], false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((&text[actual_pos..match_end], true));
        last_pos = match_end;
    }

    if last_pos < text.len() || parts.is_empty() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari nama atau jurusan...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().is_empty()
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Hapus">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Выпадающий список порядка сортировки
#[component]
pub fn SortSelect(
    #[prop(into)] value: Signal<SortKey>,
    #[prop(into)] on_change: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            on:change=move |ev| on_change.run(SortKey::parse(&event_target_value(&ev)).unwrap_or_default())
            prop:value=move || value.get().as_str()
        >
            {SortKey::all().into_iter().map(|key| {
                view! {
                    <option value=key.as_str() selected=move || value.get() == key>
                        {key.display_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_case_insensitive() {
        assert_eq!(
            split_matches("Budi Santoso", "bud"),
            vec![("Bud", true), ("i Santoso", false)]
        );
        assert_eq!(
            split_matches("anna", "n"),
            vec![("a", false), ("n", true), ("n", true), ("a", false)]
        );
    }

    #[test]
    fn test_split_matches_without_filter() {
        assert_eq!(split_matches("TKJ", ""), vec![("TKJ", false)]);
        assert_eq!(split_matches("TKJ", "xyz"), vec![("TKJ", false)]);
        assert_eq!(split_matches("", "a"), vec![("", false)]);
    }

    #[test]
    fn test_split_matches_keeps_spaces_in_filter() {
        assert_eq!(
            split_matches("Budi Santoso", "i s"),
            vec![("Bud", false), ("i S", true), ("antoso", false)]
        );
        assert_eq!(split_matches("Budi", " budi"), vec![("Budi", false)]);
    }
}
