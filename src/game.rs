use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animationplayer::AnimationPlayer;
use crate::components::directionalmover::DirectionalMover;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::clipstore::ClipStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

const WALKER_SHEET_PATH: &str = "./assets/textures/walker-sheet.png";
const CLIPS_PATH: &str = "./assets/clips.json";
const WALKER_FRAME: f32 = 64.0;

/// Set up the game world: load assets and spawn the player entity.
///
/// Runs once before the main loop. Asset failures here are fatal; nothing
/// else can run without the spritesheet and clip manifest.
pub fn setup(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    // Textures
    let walker_tex = rl
        .load_texture(thread, WALKER_SHEET_PATH)
        .expect("load assets/textures/walker-sheet.png");

    let mut tex_store = TextureStore::new();
    tex_store.insert("walker-sheet", walker_tex);
    world.insert_resource(tex_store);

    // Clips
    let clip_store = ClipStore::load_from_file(CLIPS_PATH).expect("load assets/clips.json");
    log::info!("Loaded {} clips from {}", clip_store.clips.len(), CLIPS_PATH);
    world.insert_resource(clip_store);

    // Player starts at the window center, facing down, not walking.
    let (spawn_x, spawn_y) = {
        let config = world.resource::<GameConfig>();
        let (w, h) = config.window_size();
        (w as f32 * 0.5, h as f32 * 0.5)
    };

    world.spawn((
        MapPosition::new(spawn_x, spawn_y),
        ZIndex(0),
        Sprite {
            tex_key: "walker-sheet".to_string(),
            width: WALKER_FRAME,
            height: WALKER_FRAME,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: WALKER_FRAME * 0.5,
                y: WALKER_FRAME * 0.5,
            },
        },
        AnimationPlayer::new("down"),
        DirectionalMover::default(),
    ));
}
