use macroquad::math::vec2;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::bear::{Bear, Direction};
use crate::game::berry::{self, Berry};
use crate::game::camera::Camera;
use crate::game::world::World;
use crate::geom;

/// One play-through: owns the bear, the active berry set, the world and the
/// camera, and advances all of them in a fixed order every tick.
///
/// Invariants held after every `update`:
/// * `remaining() == berries().len()`
/// * `score()` never decreases
/// * `is_running()` flips true -> false at most once and never back
pub struct Session {
    bear: Bear,
    berries: Vec<Berry>,
    world: World,
    camera: Camera,
    score: u32,
    remaining: usize,
    started_at: f64,
    elapsed: f64,
    running: bool,
    status: String,
}

impl Session {
    /// Start a session with berries scattered randomly over the world.
    pub fn new(config: &GameConfig, now: f64, rng: &mut impl Rng) -> Result<Self, GameError> {
        let world = World::new(config.world_columns, config.world_rows)?;
        let berries = berry::scatter(world.bounds(), config.berry_count, rng);
        Self::with_berries(config, berries, now)
    }

    /// Start a session over an explicit berry layout.
    pub fn with_berries(
        config: &GameConfig,
        berries: Vec<Berry>,
        now: f64,
    ) -> Result<Self, GameError> {
        let world = World::new(config.world_columns, config.world_rows)?;
        let spawn = vec2(config.spawn_x, config.spawn_y);
        let camera = Camera::new(
            spawn,
            vec2(config.window_width as f32, config.window_height as f32),
        )?;
        let remaining = berries.len();
        let mut session = Self {
            bear: Bear::new(spawn, now),
            berries,
            world,
            camera,
            score: 0,
            remaining,
            started_at: now,
            elapsed: 0.0,
            running: true,
            status: String::new(),
        };
        session.refresh_status();
        Ok(session)
    }

    /// Advance the simulation by one tick. The order is load-bearing: the
    /// camera follows the bear's post-clamp position, and collisions are
    /// resolved against the finalized bear rect.
    pub fn update(&mut self, now: f64) {
        self.bear.update(now);
        self.bear.clamp_to(self.world.bounds());
        self.camera.move_to(self.bear.position());
        self.camera.clamp(self.world.bounds());

        let collected = self.collect_overlapping();
        self.score += collected;
        self.remaining = self.berries.len();

        if self.running {
            self.elapsed = now - self.started_at;
            if self.remaining == 0 {
                // terminal state: timer and status freeze here permanently
                self.running = false;
                self.status =
                    format!("You collected all berries in {:.1} seconds", self.elapsed);
                log::info!("all berries collected in {:.1}s", self.elapsed);
            } else {
                self.refresh_status();
            }
        }
    }

    /// Two-phase collision pass: scan the active set for overlaps first,
    /// then drop the hits, so nothing is removed mid-iteration. Every berry
    /// overlapping the bear this tick is collected in this tick.
    fn collect_overlapping(&mut self) -> u32 {
        let bear_rect = self.bear.bounding_rect();
        let hit: Vec<usize> = self
            .berries
            .iter()
            .enumerate()
            .filter(|(_, b)| geom::overlaps(bear_rect, b.bounding_rect()))
            .map(|(i, _)| i)
            .collect();
        for &i in hit.iter().rev() {
            self.berries.remove(i);
        }
        hit.len() as u32
    }

    fn refresh_status(&mut self) {
        self.status = format!(
            "Collected: {}. Remaining: {}. Elapsed time: {:.1} s",
            self.score, self.remaining, self.elapsed
        );
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.bear.set_direction(direction);
    }

    pub fn set_walking(&mut self, walking: bool) {
        self.bear.set_walking(walking);
    }

    pub fn bear(&self) -> &Bear {
        &self.bear
    }

    pub fn berries(&self) -> &[Berry] {
        &self.berries
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }
}
