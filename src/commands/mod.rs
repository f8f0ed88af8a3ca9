pub mod evaluate;
pub mod interactive;
pub mod library;
pub mod output;
pub mod reset;
