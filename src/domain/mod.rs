pub mod command;
pub mod geo;
pub mod interpreter;
pub mod selection;
