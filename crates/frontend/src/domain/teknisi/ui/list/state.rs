use contracts::domain::teknisi::aggregate::Teknisi;
use contracts::shared::listing::{build_page, filter_and_sort, ListingConfig, ListingPage, ListingQuery, SortKey};
use leptos::prelude::*;

use crate::shared::export::PrintExportable;

#[derive(Clone, Debug, Default)]
pub struct TeknisiListState {
    /// Все записи, загруженные с сервера
    pub records: Vec<Teknisi>,
    pub query: ListingQuery,
    pub config: ListingConfig,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl TeknisiListState {
    /// Текущая страница с учётом поиска и сортировки
    pub fn page(&self) -> ListingPage<Teknisi> {
        build_page(&self.records, &self.query, self.config.page_size)
    }

    /// Весь отфильтрованный и отсортированный набор (для экспорта)
    pub fn visible(&self) -> Vec<Teknisi> {
        filter_and_sort(&self.records, &self.query.search, self.query.sort)
    }

    pub fn set_records(&mut self, records: Vec<Teknisi>) {
        self.records = records;
        self.is_loaded = true;
        self.is_loading = false;
        self.error = None;
        // Страница могла исчезнуть после удаления
        let page = self.page().page;
        self.query.set_page(page);
    }

    pub fn set_search(&mut self, search: String) {
        self.query.set_search(search);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.set_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    /// Подзаголовок печатного документа
    pub fn export_subtitle(&self) -> String {
        let mut parts = vec![format!("Urutan: {}", self.query.sort.display_name())];
        if !self.query.search.is_empty() {
            parts.push(format!("Pencarian: \"{}\"", self.query.search));
        }
        parts.push(format!("Total: {}", self.visible().len()));
        parts.join(" | ")
    }
}

pub fn create_state() -> RwSignal<TeknisiListState> {
    RwSignal::new(TeknisiListState::default())
}

impl PrintExportable for Teknisi {
    fn headers() -> Vec<&'static str> {
        vec!["Nama", "Jurusan", "Status"]
    }

    fn to_print_row(&self) -> Vec<String> {
        vec![self.nama.clone(), self.jurusan.clone(), self.status().to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::teknisi::aggregate::TeknisiId;

    fn teknisi(id: u64, nama: &str, jurusan: &str) -> Teknisi {
        Teknisi {
            id: TeknisiId(id),
            nama: nama.to_string(),
            jurusan: jurusan.to_string(),
            status: None,
            email: None,
            telepon: None,
            extra: Default::default(),
        }
    }

    fn twelve() -> Vec<Teknisi> {
        (1..=12)
            .map(|i| teknisi(i, &format!("Teknisi {:02}", i), if i % 2 == 0 { "TKJ" } else { "RPL" }))
            .collect()
    }

    #[test]
    fn test_page_and_export_set() {
        let mut state = TeknisiListState::default();
        state.set_records(twelve());
        state.set_page(2);

        let page = state.page();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].id, TeknisiId(4));
        assert_eq!((page.first_ordinal, page.last_ordinal, page.total), (9, 12, 12));

        // Экспорт берёт весь набор, а не только страницу
        assert_eq!(state.visible().len(), 12);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = TeknisiListState::default();
        state.set_records(twelve());
        state.set_page(2);
        state.set_search("tkj".to_string());

        assert_eq!(state.query.page, 1);
        let page = state.page();
        assert_eq!(page.total, 6);
        assert!(page.items.iter().all(|t| t.jurusan == "TKJ"));
        assert!(state.export_subtitle().contains("Pencarian: \"tkj\""));
    }

    #[test]
    fn test_reload_clamps_page() {
        let mut state = TeknisiListState::default();
        state.set_records(twelve());
        state.set_page(2);

        let mut fewer = twelve();
        fewer.truncate(8);
        state.set_records(fewer);

        assert_eq!(state.query.page, 1);
        assert_eq!(state.page().items.len(), 8);
    }

    #[test]
    fn test_print_row() {
        let t = teknisi(1, "Budi", "TKJ");
        assert_eq!(t.to_print_row(), vec!["Budi", "TKJ", "active"]);
        assert_eq!(Teknisi::headers().len(), 3);
    }
}
