use std::sync::Arc;

use crate::shared::upstream::Upstream;

/// Общее состояние обработчиков: только клиент upstream, без изменяемых данных
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}
