pub mod aggregate;
pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_fetcher;
pub mod date_utils;
pub mod form_wizard;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod page_frame;
pub mod page_standard;
pub mod status_presentation;
