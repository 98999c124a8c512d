pub mod application;
pub mod content;
pub mod domain;
pub mod ports;
pub mod utils;
