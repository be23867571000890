use std::future::Future;

use super::storage::{BrowserStorage, KeyValueStorage};
use crate::shared::api_utils::ApiError;

/// Ключ local storage с токеном сессии
pub const TOKEN_KEY: &str = "token";

/// Сессия пользователя: один токен на профиль браузера
pub struct Session<S: KeyValueStorage> {
    storage: S,
}

impl Session<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn save_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Результат загрузки данных защищённой страницы
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome<T> {
    Loaded(T),
    /// Токена нет или сервер ответил 401: на страницу входа
    RedirectToLogin,
    /// Прочие ошибки; токен при этом сохраняется
    Failed(ApiError),
}

/// Загружает данные защищённой страницы.
///
/// Без токена `fetch` не вызывается. На 401 токен удаляется.
pub async fn guarded_fetch<S, T, F, Fut>(session: &Session<S>, fetch: F) -> GuardOutcome<T>
where
    S: KeyValueStorage,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(token) = session.token() else {
        return GuardOutcome::RedirectToLogin;
    };

    match fetch(token).await {
        Ok(value) => GuardOutcome::Loaded(value),
        Err(ApiError::Unauthorized) => {
            log::warn!("Session rejected by server, clearing token");
            session.clear();
            GuardOutcome::RedirectToLogin
        }
        Err(e) => GuardOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_no_token_redirects_without_fetch() {
        let session = Session::new(MemoryStorage::default());
        let called = Cell::new(false);

        let outcome = block_on(guarded_fetch(&session, |_token| {
            called.set(true);
            async { Ok::<_, ApiError>(vec![1, 2, 3]) }
        }));

        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
        assert!(!called.get());
    }

    #[test]
    fn test_token_is_passed_to_fetch() {
        let session = Session::new(MemoryStorage::with(TOKEN_KEY, "abc"));

        let outcome = block_on(guarded_fetch(&session, |token| async move {
            Ok::<_, ApiError>(format!("Bearer {}", token))
        }));

        assert_eq!(outcome, GuardOutcome::Loaded("Bearer abc".to_string()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_unauthorized_clears_token_and_redirects() {
        let session = Session::new(MemoryStorage::with(TOKEN_KEY, "expired"));

        let outcome = block_on(guarded_fetch(&session, |_token| async {
            Err::<(), _>(ApiError::Unauthorized)
        }));

        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
        assert_eq!(session.token(), None);
        assert_eq!(session.storage().get(TOKEN_KEY), None);
    }

    #[test]
    fn test_network_error_keeps_token() {
        let session = Session::new(MemoryStorage::with(TOKEN_KEY, "abc"));

        let outcome = block_on(guarded_fetch(&session, |_token| async {
            Err::<(), _>(ApiError::Network("Failed to fetch".into()))
        }));

        assert_eq!(
            outcome,
            GuardOutcome::Failed(ApiError::Network("Failed to fetch".into()))
        );
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_rejected_keeps_token() {
        let session = Session::new(MemoryStorage::with(TOKEN_KEY, "abc"));

        let outcome = block_on(guarded_fetch(&session, |_token| async {
            Err::<(), _>(ApiError::Rejected {
                status: 500,
                message: None,
            })
        }));

        assert!(matches!(outcome, GuardOutcome::Failed(_)));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let session = Session::new(MemoryStorage::with(TOKEN_KEY, "  "));
        assert!(!session.is_authenticated());

        session.save_token("fresh");
        assert_eq!(session.token().as_deref(), Some("fresh"));
        session.clear();
        assert!(!session.is_authenticated());
    }
}
