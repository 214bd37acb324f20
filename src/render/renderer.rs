use macroquad::prelude::*;

use crate::game::world::TILE_SIZE;
use crate::game::{Camera, Session, World};
use crate::geom;

use super::sprite::{bear_source_rect, Drawable, SpriteRef};

const TILE_FONT_SIZE: f32 = 60.0;
const STATUS_FONT_SIZE: f32 = 36.0;
const STATUS_POSITION: (f32, f32) = (10.0, 28.0);

pub struct Renderer {
    bear_sheet: Option<Texture2D>,
    berry_sprite: Option<Texture2D>,
    background: Color,
    tile_bright: Color,
    tile_dark: Color,
    tile_label: Color,
    bear_fallback: Color,
    berry_fallback: Color,
    status_color: Color,
}

impl Renderer {
    pub async fn new() -> Self {
        let bear_sheet = match load_texture("assets/bear.png").await {
            Ok(tex) => {
                tex.set_filter(FilterMode::Nearest);
                log::info!("Loaded bear sheet: {}x{}", tex.width(), tex.height());
                Some(tex)
            }
            Err(e) => {
                log::warn!("Failed to load bear sheet: {}. Using fallback colors.", e);
                None
            }
        };

        let berry_sprite = match load_texture("assets/berry.png").await {
            Ok(tex) => {
                tex.set_filter(FilterMode::Nearest);
                log::info!("Loaded berry sprite: {}x{}", tex.width(), tex.height());
                Some(tex)
            }
            Err(e) => {
                log::warn!("Failed to load berry sprite: {}. Using fallback colors.", e);
                None
            }
        };

        Self {
            bear_sheet,
            berry_sprite,
            background: Color::from_rgba(0, 0, 128, 255),
            tile_bright: Color::from_rgba(200, 128, 0, 255),
            tile_dark: Color::from_rgba(200, 64, 0, 255),
            tile_label: Color::from_rgba(255, 200, 200, 255),
            bear_fallback: Color::from_rgba(120, 80, 40, 255),
            berry_fallback: Color::from_rgba(200, 40, 120, 255),
            status_color: Color::from_rgba(0, 0, 0, 255),
        }
    }

    /// Draw one frame of session state. Pure read: backdrop, berries within
    /// the camera view, the bear, then the status line.
    pub fn render(&self, session: &Session) {
        clear_background(self.background);

        let camera = session.camera();
        self.render_backdrop(session.world(), camera);

        let view = camera.view_rect();
        for berry in session.berries() {
            if geom::overlaps(berry.world_rect(), view) {
                self.draw_entity(berry, camera);
            }
        }
        self.draw_entity(session.bear(), camera);

        self.render_status(session.status_text());
    }

    /// Numbered checkerboard backdrop, culled to the tiles the camera can
    /// actually see.
    fn render_backdrop(&self, world: &World, camera: &Camera) {
        let view = camera.view_rect();
        let first_col = (view.left() / TILE_SIZE).floor().max(0.0) as u32;
        let first_row = (view.top() / TILE_SIZE).floor().max(0.0) as u32;
        let last_col = ((view.right() / TILE_SIZE).ceil().max(0.0) as u32).min(world.columns());
        let last_row = ((view.bottom() / TILE_SIZE).ceil().max(0.0) as u32).min(world.rows());

        for y in first_row..last_row {
            for x in first_col..last_col {
                let tile = world.tile(x, y);
                let top_left = camera.to_view(vec2(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE));
                let color = if tile.bright {
                    self.tile_bright
                } else {
                    self.tile_dark
                };
                draw_rectangle(top_left.x, top_left.y, TILE_SIZE, TILE_SIZE, color);

                let label = tile.number.to_string();
                let dims = measure_text(&label, None, TILE_FONT_SIZE as u16, 1.0);
                draw_text(
                    &label,
                    top_left.x + (TILE_SIZE - dims.width) / 2.0,
                    top_left.y + (TILE_SIZE + dims.offset_y) / 2.0,
                    TILE_FONT_SIZE,
                    self.tile_label,
                );
            }
        }
    }

    fn draw_entity(&self, entity: &dyn Drawable, camera: &Camera) {
        let rect = entity.world_rect();
        let dest = camera.to_view(rect.point());
        match entity.sprite() {
            SpriteRef::Bear(costume) => {
                if let Some(sheet) = &self.bear_sheet {
                    draw_texture_ex(
                        sheet,
                        dest.x,
                        dest.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(rect.size()),
                            source: Some(bear_source_rect(costume)),
                            ..Default::default()
                        },
                    );
                } else {
                    draw_rectangle(dest.x, dest.y, rect.w, rect.h, self.bear_fallback);
                }
            }
            SpriteRef::Berry => {
                if let Some(tex) = &self.berry_sprite {
                    draw_texture_ex(
                        tex,
                        dest.x,
                        dest.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(rect.size()),
                            ..Default::default()
                        },
                    );
                } else {
                    draw_rectangle(dest.x, dest.y, rect.w, rect.h, self.berry_fallback);
                }
            }
        }
    }

    fn render_status(&self, text: &str) {
        draw_text(
            text,
            STATUS_POSITION.0,
            STATUS_POSITION.1,
            STATUS_FONT_SIZE,
            self.status_color,
        );
    }
}
