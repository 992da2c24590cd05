//! Форма LOG MATERIALS
//!
//! - view_model.rs: состояние формы, имитация скана, запись в работу
//! - view.rs: модальное окно

mod view;
mod view_model;

pub use view::MaterialDetails;
pub use view_model::MaterialDetailsViewModel;
