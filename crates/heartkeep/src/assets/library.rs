use std::collections::HashMap;
use std::rc::Rc;

use crate::api::error::{EngineError, Result};
use crate::assets::manifest::AssetManifest;
use crate::components::animation::{AnimationState, SpriteSheet};
use crate::components::sprite::AtlasId;

/// Sheet paths the built-in entities look up.
pub mod sheets {
    pub const PLAYER_STAND: &str = "gfx/player_stand.png";
    pub const PLAYER_WALK: &str = "gfx/player_walk.png";
    pub const PLAYER_JUMP: &str = "gfx/player_jump.png";
    pub const PLAYER_BLOCK: &str = "gfx/player_block.png";
    pub const PLAYER_DEATH: &str = "gfx/player_death.png";
    pub const PLAYER_RUN_ATTACK: &str = "gfx/player_run_attack.png";
    pub const PLAYER_JUMP_ATTACK: &str = "gfx/player_jump_attack.png";
    pub const PLAYER_STAND_ATTACK: &str = "gfx/player_stand_attack.png";
    pub const HEART: &str = "gfx/misc/heart.png";
}

/// (path, atlas, row, frames, ticks per frame, looping)
const BUILTIN_SHEETS: &[(&str, u32, f32, u32, u32, bool)] = &[
    (sheets::PLAYER_STAND, 0, 0.0, 1, 1, true),
    (sheets::PLAYER_WALK, 0, 1.0, 8, 4, true),
    (sheets::PLAYER_JUMP, 0, 2.0, 6, 4, true),
    (sheets::PLAYER_BLOCK, 0, 3.0, 1, 1, true),
    (sheets::PLAYER_DEATH, 0, 4.0, 6, 6, false),
    (sheets::PLAYER_RUN_ATTACK, 0, 5.0, 5, 4, true),
    (sheets::PLAYER_JUMP_ATTACK, 0, 6.0, 5, 4, true),
    (sheets::PLAYER_STAND_ATTACK, 0, 7.0, 5, 4, true),
    (sheets::HEART, 1, 0.0, 4, 8, true),
];

/// Cache of read-only sprite sheets keyed by path.
/// Entities never hold the cache's sheets mutably; they instantiate their own
/// [`AnimationState`] cursors from it.
pub struct AnimationLibrary {
    sheets: HashMap<String, Rc<SpriteSheet>>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    /// Library with every sheet the built-in entities need.
    pub fn builtin() -> Self {
        let mut lib = Self::new();
        for &(path, atlas, row, frames, ticks, looping) in BUILTIN_SHEETS {
            lib.insert(
                path,
                SpriteSheet::horizontal_strip(AtlasId(atlas), row, 0.0, frames, ticks).with_looping(looping),
            );
        }
        lib
    }

    /// Build a library from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut lib = Self::new();
        for (path, desc) in &manifest.animations {
            let sheet = SpriteSheet::horizontal_strip(
                AtlasId(desc.atlas),
                desc.row as f32,
                desc.start_col as f32,
                desc.frames,
                desc.ticks_per_frame,
            )
            .with_looping(desc.looping);
            lib.insert(path.clone(), sheet);
        }
        log::debug!("animation library: {} sheets from manifest", lib.len());
        lib
    }

    /// Register or replace a sheet.
    pub fn insert(&mut self, path: impl Into<String>, sheet: SpriteSheet) {
        self.sheets.insert(path.into(), Rc::new(sheet));
    }

    /// Look up a shared sheet by path. Returns None if not found.
    pub fn get(&self, path: &str) -> Option<Rc<SpriteSheet>> {
        self.sheets.get(path).cloned()
    }

    /// Create a fresh playback cursor for the named sheet.
    pub fn instantiate(&self, path: &str) -> Result<AnimationState> {
        let sheet = self
            .get(path)
            .ok_or_else(|| EngineError::UnknownSheet(path.to_string()))?;
        if sheet.frame_count() == 0 {
            return Err(EngineError::EmptySheet(path.to_string()));
        }
        Ok(AnimationState::new(sheet))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_entity_sheet() {
        let lib = AnimationLibrary::builtin();
        for &(path, ..) in BUILTIN_SHEETS {
            assert!(lib.instantiate(path).is_ok(), "missing {path}");
        }
    }

    #[test]
    fn loads_from_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "misc", "cols": 8, "rows": 2, "path": "misc.png" }
            ],
            "animations": {
                "gfx/misc/heart.png": { "atlas": 0, "row": 1, "start_col": 2, "frames": 3 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let lib = AnimationLibrary::from_manifest(&manifest);

        let heart = lib.get(sheets::HEART).expect("heart should exist");
        assert_eq!(heart.frame_count(), 3);
        assert_eq!(heart.frames[0], (2.0, 1.0));
        assert_eq!(heart.ticks_per_frame, 4);
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        let lib = AnimationLibrary::new();
        assert!(matches!(
            lib.instantiate("gfx/nope.png"),
            Err(EngineError::UnknownSheet(_))
        ));
    }

    #[test]
    fn empty_sheet_is_an_error() {
        let mut lib = AnimationLibrary::new();
        lib.insert("empty", SpriteSheet::horizontal_strip(AtlasId(0), 0.0, 0.0, 0, 1));
        assert!(matches!(lib.instantiate("empty"), Err(EngineError::EmptySheet(_))));
    }

    #[test]
    fn instances_share_the_sheet_not_the_cursor() {
        let lib = AnimationLibrary::builtin();
        let mut a = lib.instantiate(sheets::PLAYER_WALK).unwrap();
        let b = lib.instantiate(sheets::PLAYER_WALK).unwrap();
        a.frame = 3;
        assert_eq!(b.frame, 0);
        assert_eq!(Rc::strong_count(&lib.get(sheets::PLAYER_WALK).unwrap()), 4);
    }
}
