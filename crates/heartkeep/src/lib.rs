pub mod api;
pub mod core;
pub mod components;
pub mod entities;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{HeartConfig, PlayerConfig, WorldConfig};
pub use api::error::{EngineError, Result};
pub use api::types::{EntityId, EntityKind, HurtOutcome, RoomId, WorldEvent};
pub use api::world::World;
pub use assets::library::{sheets, AnimationLibrary};
pub use assets::manifest::AssetManifest;
pub use components::animation::{AnimationState, SpriteSheet};
pub use components::body::Body;
pub use components::sprite::AtlasId;
pub use core::room::{FlatRoom, Room};
pub use core::scene::Scene;
pub use core::tilemap::TileRoom;
pub use entities::heart::Heart;
pub use entities::player::{Player, PlayerStatus};
pub use entities::Entity;
pub use input::actions::{Action, ActionQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
