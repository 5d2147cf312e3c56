pub mod map;
pub mod terminal;
pub mod ui;
