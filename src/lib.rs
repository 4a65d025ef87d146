pub mod gui;
pub mod logging;
pub mod process;
pub mod scripts;
pub mod settings;
