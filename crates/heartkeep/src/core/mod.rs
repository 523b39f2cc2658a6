pub mod room;
pub mod scene;
pub mod tilemap;
