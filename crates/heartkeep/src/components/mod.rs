pub mod animation;
pub mod body;
pub mod sprite;
