use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Exclusive render system: draws all sprites and the debug overlay.
///
/// Raylib's handle and thread are pulled out of the world for the duration of
/// the drawing scope and reinserted afterwards, since drawing borrows the
/// handle mutably while we keep querying the ECS world.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw sprites in screen space, back to front.
fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    // Query: (Sprite, Position, ZIndex)
    // We collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world).map(|(s, p, z)| (s.clone(), *p, *z)).collect()
    };

    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();

    for (sprite, pos, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Source rect selects a frame from the spritesheet
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };

            // Destination rect places the sprite so that MapPosition is the pivot
            let dest = Rectangle {
                x: pos.x,
                y: pos.y,
                width: sprite.width,
                height: sprite.height,
            };

            d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
        }
    }
}

/// Draw the debug overlay when enabled.
fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.resource::<DebugMode>().enabled {
        return;
    }

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::GREEN);

    let entity_count = world.iter_entities().count();
    let text = format!("Entities: {}", entity_count);
    d.draw_text(&text, 10, 30, 10, Color::GREEN);

    let time = *world.resource::<WorldTime>();
    let text = format!("Time: {:.1}s | Frame: {}", time.elapsed, time.frame_count);
    d.draw_text(&text, 10, 50, 10, Color::GREEN);

    let mut positions = world.query::<&MapPosition>();
    for position in positions.iter(world) {
        // Draw a small cross at the entity pivot
        d.draw_line(
            position.x as i32 - 5,
            position.y as i32,
            position.x as i32 + 5,
            position.y as i32,
            Color::GREEN,
        );
        d.draw_line(
            position.x as i32,
            position.y as i32 - 5,
            position.x as i32,
            position.y as i32 + 5,
            Color::GREEN,
        );
    }
}
