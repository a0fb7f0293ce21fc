pub mod app;
pub mod settings_modal;
pub mod status_bar;
pub mod swipe_card;
