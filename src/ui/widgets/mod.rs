pub mod modal;
pub mod stat_card;
pub mod toast;

pub use modal::{centered_rect, render_confirm, render_form, FormRow};
pub use stat_card::{StatCard, Trend};
pub use toast::{ToastKind, Toasts};
