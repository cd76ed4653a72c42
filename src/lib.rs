pub mod assets;
pub mod audio;
pub mod bullet;
pub mod character;
pub mod collision;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sprite;
pub mod world;
