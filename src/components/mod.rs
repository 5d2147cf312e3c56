pub mod feature_detail;
pub mod feature_list;
pub mod footer;
pub mod header;
pub mod modals;
pub mod tactical_map;
pub mod terminal_panel;
