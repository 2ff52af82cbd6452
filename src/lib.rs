pub mod engine;
pub mod ludo;
pub mod misc;
