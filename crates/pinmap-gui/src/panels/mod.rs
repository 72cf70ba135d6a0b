pub mod device_dialog;
pub mod menu_bar;
pub mod overlay;
pub mod status;
pub mod viewport;
