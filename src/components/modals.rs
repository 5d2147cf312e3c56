pub mod error;
pub mod help;
pub mod helpers;
mod manager;

pub use manager::ModalManager;
