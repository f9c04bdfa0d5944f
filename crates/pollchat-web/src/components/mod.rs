pub mod chat_feed;
pub mod chat_form;
