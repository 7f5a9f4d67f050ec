pub mod controls;
pub mod keyboard;
pub mod touch;
