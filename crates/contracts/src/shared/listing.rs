//! Поиск, сортировка и постраничный вывод списка, загруженного целиком.
//!
//! Чистые функции без I/O: одинаково работают во frontend (WASM) и в тестах.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра).
    /// Пустой запрос соответствует всему.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering;
}

/// Запись, которую можно показывать в списке
pub trait Listable: Searchable + Sortable + Clone {}

impl<T: Searchable + Sortable + Clone> Listable for T {}

/// Ключ сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// По убыванию id (id служит признаком "свежести")
    #[default]
    Newest,
    /// По имени, по возрастанию
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Terbaru",
            SortKey::Name => "Nama (A-Z)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortKey::Newest),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }

    pub fn all() -> [SortKey; 2] {
        [SortKey::Newest, SortKey::Name]
    }
}

/// Настройки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}

/// Состояние, которым управляет пользователь: строка поиска, сортировка, страница (с 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Новый поисковый запрос всегда возвращает на первую страницу
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// Одна страница отфильтрованного и отсортированного списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// Сколько записей прошло фильтр
    pub total: usize,
    /// 0, если записей нет
    pub total_pages: usize,
    /// Фактическая страница после ограничения диапазоном
    pub page: usize,
    /// Порядковый номер первой записи на странице (с 1), 0 для пустой страницы
    pub first_ordinal: usize,
    pub last_ordinal: usize,
}

impl<T> ListingPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

}

/// Фильтрует и сортирует список. Сортировка стабильная: при равенстве
/// ключей сохраняется исходный порядок.
pub fn filter_and_sort<T: Listable>(items: &[T], search: &str, sort: SortKey) -> Vec<T> {
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| item.matches_filter(search))
        .cloned()
        .collect();
    // slice::sort_by стабильна
    filtered.sort_by(|a, b| a.compare_by(b, sort));
    filtered
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total.div_ceil(size)
}

/// Строит страницу списка по запросу пользователя.
///
/// Страница ограничивается диапазоном `[1, total_pages]` (1 для пустого списка),
/// поэтому срез никогда не выходит за границы.
pub fn build_page<T: Listable>(items: &[T], query: &ListingQuery, page_size: usize) -> ListingPage<T> {
    let size = page_size.max(1);
    let sorted = filter_and_sort(items, &query.search, query.sort);
    let total = sorted.len();
    let pages = total_pages(total, size);
    let page = query.page.clamp(1, pages.max(1));

    let start = ((page - 1) * size).min(total);
    let end = (start + size).min(total);
    let items: Vec<T> = sorted[start..end].to_vec();

    let (first_ordinal, last_ordinal) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    ListingPage {
        items,
        total,
        total_pages: pages,
        page,
        first_ordinal,
        last_ordinal,
    }
}

/// Сравнение строк "как в браузере": сначала без учёта регистра и
/// диакритики, затем по исходной строке.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
        .collect()
}

fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}
