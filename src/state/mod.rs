// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod upload_state;

pub use reactivity::*;
pub use upload_state::*;
