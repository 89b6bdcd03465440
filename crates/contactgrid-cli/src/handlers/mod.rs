pub mod config;
pub mod normalize;
pub mod render;
pub mod view;
