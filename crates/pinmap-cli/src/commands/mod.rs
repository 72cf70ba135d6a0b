pub mod auto_scale;
pub mod bible;
pub mod catalog;
pub mod config;
pub mod info;
pub mod list;
pub mod scale;
pub mod tree;
