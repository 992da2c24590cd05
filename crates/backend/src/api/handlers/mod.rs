pub mod a003_assistant_chat;
