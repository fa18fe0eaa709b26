pub mod app;
pub mod scale;
pub mod theme;
