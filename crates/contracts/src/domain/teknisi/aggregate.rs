use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::shared::listing::{locale_compare, Searchable, SortKey, Sortable};

/// Статус по умолчанию, если upstream его не прислал
pub const DEFAULT_STATUS: &str = "active";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор техника, назначается внешним сервером.
///
/// На проводе это целое число; числовая строка тоже принимается,
/// всё остальное отклоняется при десериализации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeknisiId(pub u64);

impl TeknisiId {
    pub fn parse(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map(TeknisiId)
            .map_err(|_| format!("Invalid teknisi id: {}", s))
    }
}

impl fmt::Display for TeknisiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for TeknisiId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(TeknisiId(n)),
            RawId::Text(s) => TeknisiId::parse(&s).map_err(D::Error::custom),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Техник (teknisi), как его отдаёт внешний REST backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teknisi {
    pub id: TeknisiId,
    pub nama: String,
    pub jurusan: String,

    /// Пустой или null статус считается отсутствующим, см. [`Teknisi::status`]
    #[serde(
        default,
        deserialize_with = "deserialize_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telepon: Option<String>,

    /// Поля, о которых мы не знаем, сохраняются как есть
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn deserialize_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

impl Teknisi {
    /// Статус для отображения, "active" если upstream его не прислал
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}

impl Searchable for Teknisi {
    fn matches_filter(&self, filter: &str) -> bool {
        // Термин сравнивается как есть, пробелы тоже значимы
        let needle = filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.nama.to_lowercase().contains(&needle) || self.jurusan.to_lowercase().contains(&needle)
    }
}

impl Sortable for Teknisi {
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Newest => other.id.cmp(&self.id),
            SortKey::Name => locale_compare(&self.nama, &other.nama),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса на создание / изменение техника
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeknisiDto {
    pub nama: String,
    pub jurusan: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telepon: Option<String>,
}

impl TeknisiDto {
    /// Валидация перед отправкой на сервер
    pub fn validate(&self) -> Result<(), String> {
        if self.nama.trim().is_empty() {
            return Err("Nama teknisi wajib diisi".into());
        }
        if self.jurusan.trim().is_empty() {
            return Err("Jurusan wajib diisi".into());
        }
        Ok(())
    }

    /// Для создания: пустые опциональные поля не отправляем
    pub fn normalized(self) -> Self {
        let mut dto = self.trimmed();
        dto.email = dto.email.filter(|s| !s.is_empty());
        dto.telepon = dto.telepon.filter(|s| !s.is_empty());
        dto
    }

    /// Для изменения: очищенное поле уходит как "", иначе upstream
    /// оставит старое значение. Нетронутые (None) поля не отправляем.
    pub fn normalized_for_update(self) -> Self {
        self.trimmed()
    }

    fn trimmed(mut self) -> Self {
        self.nama = self.nama.trim().to_string();
        self.jurusan = self.jurusan.trim().to_string();
        self.status = self
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.email = self.email.map(|s| s.trim().to_string());
        self.telepon = self.telepon.map(|s| s.trim().to_string());
        self
    }
}

impl From<&Teknisi> for TeknisiDto {
    fn from(t: &Teknisi) -> Self {
        Self {
            nama: t.nama.clone(),
            jurusan: t.jurusan.clone(),
            status: t.status.clone(),
            email: t.email.clone(),
            telepon: t.telepon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_active() {
        let t: Teknisi = serde_json::from_value(json!({"id": 1, "nama": "A", "jurusan": "B"})).unwrap();
        assert_eq!(t.status, None);
        assert_eq!(t.status(), "active");

        let t: Teknisi =
            serde_json::from_value(json!({"id": 2, "nama": "A", "jurusan": "B", "status": null}))
                .unwrap();
        assert_eq!(t.status(), "active");
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"id": 2, "nama": "A", "jurusan": "B"})
        );
    }

    fn record(id: u64, nama: &str, jurusan: &str) -> Teknisi {
        serde_json::from_value(json!({"id": id, "nama": nama, "jurusan": jurusan})).unwrap()
    }

    #[test]
    fn test_search_term_is_matched_with_spaces() {
        use crate::shared::listing::{build_page, ListingQuery};

        let items = vec![record(1, "andi", "TKJ"), record(2, "Budi Santoso", "RPL")];
        let names = |term: &str| {
            let mut query = ListingQuery::default();
            query.set_search(term);
            build_page(&items, &query, 8)
                .items
                .into_iter()
                .map(|t| t.nama)
                .collect::<Vec<_>>()
        };

        assert_eq!(names(""), vec!["Budi Santoso", "andi"]);
        assert_eq!(names(" "), vec!["Budi Santoso"]);
        assert!(names(" andi").is_empty());
        assert!(names("andi ").is_empty());
        assert_eq!(names("budi s"), vec!["Budi Santoso"]);
    }

    #[test]
    fn test_numeric_string_id_is_accepted() {
        let t: Teknisi =
            serde_json::from_value(json!({"id": "42", "nama": "A", "jurusan": "B"})).unwrap();
        assert_eq!(t.id, TeknisiId(42));
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        assert!(serde_json::from_value::<Teknisi>(json!({"id": 1, "nama": "A"})).is_err());
        assert!(serde_json::from_value::<Teknisi>(json!({"nama": "A", "jurusan": "B"})).is_err());
        assert!(
            serde_json::from_value::<Teknisi>(json!({"id": "abc", "nama": "A", "jurusan": "B"}))
                .is_err()
        );
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({"id": 7, "nama": "Budi", "jurusan": "TKJ", "status": "cuti", "angkatan": 2021});
        let t: Teknisi = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(t.extra.get("angkatan"), Some(&json!(2021)));
        assert_eq!(serde_json::to_value(&t).unwrap(), raw);
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = TeknisiDto {
            nama: "  ".into(),
            jurusan: "TKJ".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.nama = "Budi".into();
        assert!(dto.validate().is_ok());
        dto.jurusan = String::new();
        assert_eq!(dto.validate().unwrap_err(), "Jurusan wajib diisi");
    }

    #[test]
    fn test_dto_normalized_drops_blank_optionals() {
        let dto = TeknisiDto {
            nama: " Budi ".into(),
            jurusan: "TKJ".into(),
            status: Some("".into()),
            email: Some("budi@example.com".into()),
            telepon: Some("  ".into()),
        }
        .normalized();
        assert_eq!(dto.nama, "Budi");
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"nama": "Budi", "jurusan": "TKJ", "email": "budi@example.com"})
        );
    }

    #[test]
    fn test_edit_dto_does_not_invent_status() {
        let t = record(3, "Budi", "TKJ");
        let dto = TeknisiDto::from(&t).normalized_for_update();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"nama": "Budi", "jurusan": "TKJ"})
        );

        let t: Teknisi =
            serde_json::from_value(json!({"id": 4, "nama": "Sari", "jurusan": "RPL", "status": "cuti"}))
                .unwrap();
        assert_eq!(TeknisiDto::from(&t).status.as_deref(), Some("cuti"));
    }

    #[test]
    fn test_edit_sends_cleared_optionals_as_empty() {
        let t: Teknisi = serde_json::from_value(json!({
            "id": 5,
            "nama": "Budi",
            "jurusan": "TKJ",
            "email": "budi@example.com",
            "telepon": "0812"
        }))
        .unwrap();
        let mut dto = TeknisiDto::from(&t);
        dto.email = Some(String::new());
        dto.telepon = Some("  ".into());

        assert_eq!(
            serde_json::to_value(dto.clone().normalized_for_update()).unwrap(),
            json!({"nama": "Budi", "jurusan": "TKJ", "email": "", "telepon": ""})
        );
        // при создании пустые поля просто не отправляются
        assert_eq!(
            serde_json::to_value(dto.normalized()).unwrap(),
            json!({"nama": "Budi", "jurusan": "TKJ"})
        );
    }
}
