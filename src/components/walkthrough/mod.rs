mod component;
mod controls;
mod render;
mod scene;
mod state;

pub use component::Walkthrough;
