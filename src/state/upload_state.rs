// ============================================================================
// UPLOAD STATE - UploadSession reactiva (lo que lee la vista)
// ============================================================================

use crate::models::stats::ParkingStats;
use crate::models::upload::{UploadPhase, UploadSession};
use crate::state::reactivity::ReactiveState;

/// Estado de subida compartido entre ViewModel y vistas
pub struct UploadState<F> {
    session: ReactiveState<UploadSession<F>>,
}

impl<F> UploadState<F> {
    pub fn new() -> Self {
        Self {
            session: ReactiveState::new(UploadSession::new()),
        }
    }

    /// Mutar la sesión y notificar a los subscribers
    pub fn update<R>(&self, updater: impl FnOnce(&mut UploadSession<F>) -> R) -> R {
        self.session.update(updater)
    }

    pub fn with<R>(&self, reader: impl FnOnce(&UploadSession<F>) -> R) -> R {
        self.session.with(reader)
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.session.subscribe(callback);
    }

    pub fn is_loading(&self) -> bool {
        self.with(|s| s.is_loading())
    }

    pub fn is_closed(&self) -> bool {
        self.with(|s| s.is_closed())
    }

    pub fn get_error_message(&self) -> Option<String> {
        self.with(|s| s.error_message().map(str::to_string))
    }

    pub fn get_result_url(&self) -> Option<String> {
        self.with(|s| s.result_url().map(str::to_string))
    }

    pub fn get_stats(&self) -> Option<ParkingStats> {
        self.with(|s| s.stats().copied())
    }

    pub fn get_phase(&self) -> UploadPhase {
        self.with(|s| s.phase())
    }

    pub fn get_selected_file(&self) -> Option<F>
    where
        F: Clone,
    {
        self.with(|s| s.selected_file().cloned())
    }
}

impl<F> Clone for UploadState<F> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self::new()
    }
}
