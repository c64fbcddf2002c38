pub mod rofi;

pub use rofi::RofiPresenter;
