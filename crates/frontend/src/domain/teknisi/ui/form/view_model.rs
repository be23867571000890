use contracts::domain::teknisi::aggregate::TeknisiDto;
use leptos::prelude::*;

use crate::domain::teknisi::api;
use crate::shared::api_utils::ApiError;
use crate::system::auth::guard::{HOME_PATH, LOGIN_PATH};
use crate::system::auth::session::{guarded_fetch, GuardOutcome, Session};

/// ViewModel for the teknisi create/edit form
#[derive(Clone, Copy)]
pub struct TeknisiFormViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<TeknisiDto>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    go: WriteSignal<Option<String>>,
}

impl TeknisiFormViewModel {
    pub fn new(id: Option<String>, go: WriteSignal<Option<String>>) -> Self {
        Self {
            is_loading: RwSignal::new(id.is_some()),
            id: StoredValue::new(id),
            form: RwSignal::new(TeknisiDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            go,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(|id| id.is_some())
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Teknisi"
        } else {
            "Tambah Teknisi"
        }
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self) {
        let Some(id) = self.id.get_value() else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let session = Session::browser();
            match guarded_fetch(&session, |token| api::fetch_by_id(token, id)).await {
                GuardOutcome::Loaded(t) => vm.form.set(TeknisiDto::from(&t)),
                GuardOutcome::RedirectToLogin => vm.redirect_to_login(),
                GuardOutcome::Failed(e) => vm
                    .error
                    .set(Some(e.user_message("Gagal memuat data teknisi"))),
            }
            vm.is_loading.set(false);
        });
    }

    /// Validate and send the form; on success go back to the list
    pub fn save_command(&self) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        let id = self.id.get_value();
        let dto = if id.is_some() {
            current.normalized_for_update()
        } else {
            current.normalized()
        };

        self.error.set(None);
        self.is_saving.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let session = Session::browser();
            let outcome = guarded_fetch(&session, |token| async move {
                match id {
                    Some(id) => api::update(&token, &id, &dto).await,
                    None => api::create(&token, &dto).await,
                }
            })
            .await;

            vm.is_saving.set(false);
            match outcome {
                GuardOutcome::Loaded(_) => {
                    log::info!("Teknisi saved");
                    vm.go.set(Some(HOME_PATH.to_string()));
                }
                GuardOutcome::RedirectToLogin => vm.redirect_to_login(),
                GuardOutcome::Failed(e) => vm.error.set(Some(vm.save_error_message(&e))),
            }
        });
    }

    fn save_error_message(&self, e: &ApiError) -> String {
        if self.is_edit_mode() {
            e.user_message("Gagal mengupdate teknisi")
        } else {
            e.user_message("Gagal menambahkan teknisi")
        }
    }

    fn redirect_to_login(&self) {
        self.go.set(Some(LOGIN_PATH.to_string()));
    }
}
