pub mod basis;
pub mod canvas;
pub mod check;
pub mod config;
pub mod generate;
pub mod icon;
pub mod logger;
