pub mod clock;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod navbar;
pub mod reveal;
pub mod rotating_text;
pub mod schedule;
pub mod showcase;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
