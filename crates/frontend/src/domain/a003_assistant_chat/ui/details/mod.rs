//! Терминал AI FIELD TECH
//!
//! - model.rs: запрос к relay на backend
//! - view_model.rs: транскрипт и отправка
//! - view.rs: экран терминала

mod model;
mod view;
mod view_model;

pub use view::AssistantChatDetails;
pub use view_model::AssistantChatViewModel;
