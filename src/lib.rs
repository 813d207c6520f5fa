pub mod app_state;
pub mod carousel;
pub mod config;
pub mod data;
pub mod form;
pub mod images;
pub mod logger;
pub mod models;
pub mod scroll_spy;
pub mod timer;
pub mod ui_helpers;

pub mod cards;
pub mod hero;
pub mod modals;
pub mod nav;
