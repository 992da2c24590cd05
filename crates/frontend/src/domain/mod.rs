pub mod a001_job;
pub mod a002_material;
pub mod a003_assistant_chat;
