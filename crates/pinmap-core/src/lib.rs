pub mod annotation;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod io;
pub mod mask;
pub mod ocr;
pub mod view;
