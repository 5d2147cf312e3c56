pub mod app;
pub mod components;
pub mod domain;
pub mod logging;
pub mod theme;
