//! Powerup kinds and the live powerup collection
//!
//! A powerup spawns from a destroyed brick, falls, and is either lost off the
//! bottom of the screen or caught by the paddle. Caught powerups with a
//! duration stay in the collection until their countdown ends, so that the
//! last expiring instance of a kind is the one that reverts its effect.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::check_aabb;
use super::entity::{Entity, Sprite};
use super::state::Session;
use crate::WHITE;
use crate::tuning::Tuning;

/// Paddle tint while the sticky effect is live
pub const STICKY_TINT: Vec3 = Vec3::new(1.0, 0.5, 1.0);
/// Ball tint while the pass-through effect is live
pub const PASS_THROUGH_TINT: Vec3 = Vec3::new(1.0, 0.5, 0.5);

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Sticky,
    PassThrough,
    PadSizeIncrease,
    Confuse,
    Chaos,
}

impl PowerUpKind {
    /// Spawn roll order
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Speed,
        PowerUpKind::Sticky,
        PowerUpKind::PassThrough,
        PowerUpKind::PadSizeIncrease,
        PowerUpKind::Confuse,
        PowerUpKind::Chaos,
    ];

    /// Effect lifetime in seconds; 0 means the effect is applied once and
    /// never expires
    pub fn duration(&self) -> f32 {
        match self {
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => 0.0,
            PowerUpKind::Sticky => 20.0,
            PowerUpKind::PassThrough => 10.0,
            PowerUpKind::Confuse | PowerUpKind::Chaos => 15.0,
        }
    }

    /// One in `spawn_chance()` destroyed bricks drops this kind.
    /// Bad powerups are rolled more often.
    pub fn spawn_chance(&self) -> u32 {
        match self {
            PowerUpKind::Speed => 45,
            PowerUpKind::Sticky | PowerUpKind::PassThrough | PowerUpKind::PadSizeIncrease => 30,
            PowerUpKind::Confuse | PowerUpKind::Chaos => 15,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            PowerUpKind::Speed => Vec3::new(0.5, 0.5, 0.5),
            PowerUpKind::Sticky => Vec3::new(1.0, 0.5, 1.0),
            PowerUpKind::PassThrough => Vec3::new(0.5, 1.0, 0.5),
            PowerUpKind::PadSizeIncrease => Vec3::new(1.0, 0.6, 0.4),
            PowerUpKind::Confuse => Vec3::new(1.0, 0.3, 0.3),
            PowerUpKind::Chaos => Vec3::new(0.9, 0.25, 0.25),
        }
    }

    pub fn is_good(&self) -> bool {
        !matches!(self, PowerUpKind::Confuse | PowerUpKind::Chaos)
    }

    pub fn texture_name(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "powerup_speed",
            PowerUpKind::Sticky => "powerup_sticky",
            PowerUpKind::PassThrough => "powerup_passthrough",
            PowerUpKind::PadSizeIncrease => "powerup_increase",
            PowerUpKind::Confuse => "powerup_confuse",
            PowerUpKind::Chaos => "powerup_chaos",
        }
    }

    /// Turn the effect on
    pub fn apply(&self, session: &mut Session, tuning: &Tuning) {
        match self {
            PowerUpKind::Speed => {
                session.ball.body.velocity *= tuning.speed_factor;
            }
            PowerUpKind::Sticky => {
                session.ball.sticky = true;
                session.paddle.color = STICKY_TINT;
            }
            PowerUpKind::PassThrough => {
                session.ball.pass_through = true;
                session.ball.body.color = PASS_THROUGH_TINT;
            }
            PowerUpKind::PadSizeIncrease => {
                session.paddle.size.x += tuning.pad_growth;
            }
            // The two screen effects exclude each other: whichever is running
            // blocks the other from starting
            PowerUpKind::Confuse => {
                if !session.effects.chaos {
                    session.effects.confuse = true;
                }
            }
            PowerUpKind::Chaos => {
                if !session.effects.confuse {
                    session.effects.chaos = true;
                }
            }
        }
    }

    /// Turn the effect off. Instantaneous kinds have nothing to undo.
    pub fn revert(&self, session: &mut Session) {
        match self {
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => {}
            PowerUpKind::Sticky => {
                session.ball.sticky = false;
                session.paddle.color = WHITE;
            }
            PowerUpKind::PassThrough => {
                session.ball.pass_through = false;
                session.ball.body.color = WHITE;
            }
            PowerUpKind::Confuse => session.effects.confuse = false,
            PowerUpKind::Chaos => session.effects.chaos = false,
        }
    }
}

/// A falling or active powerup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub body: Entity,
    /// Seconds of effect remaining once activated
    pub duration: f32,
    /// Caught and still counting down
    pub activated: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, position: Vec2, tuning: &Tuning) -> Self {
        Self {
            kind,
            body: Entity::new(position, tuning.powerup_size, Sprite::PowerUp(kind))
                .with_color(kind.color())
                .with_velocity(tuning.powerup_velocity),
            duration: kind.duration(),
            activated: false,
        }
    }

    /// Still falling and catchable
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.body.destroyed
    }
}

/// The live powerup collection, in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUps {
    items: Vec<PowerUp>,
}

impl PowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PowerUp> {
        self.items.iter()
    }

    pub fn push(&mut self, powerup: PowerUp) {
        self.items.push(powerup);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Roll each kind independently and drop the winners at `position`.
    /// Returns how many spawned.
    pub fn spawn<R: Rng>(&mut self, position: Vec2, rng: &mut R, tuning: &Tuning) -> usize {
        let before = self.items.len();
        for kind in PowerUpKind::ALL {
            if should_spawn(rng, kind.spawn_chance()) {
                log::debug!("Spawned {:?} powerup at {}", kind, position);
                self.items.push(PowerUp::new(kind, position, tuning));
            }
        }
        self.items.len() - before
    }

    /// Whether any caught powerup of `kind` is still counting down
    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.items.iter().any(|p| p.activated && p.kind == kind)
    }

    /// Advance falling powerups and count down active ones.
    ///
    /// An expiring powerup reverts its effect only when no other powerup of the
    /// same kind is still active.
    pub fn tick(&mut self, dt: f32, session: &mut Session) {
        for i in 0..self.items.len() {
            let powerup = &mut self.items[i];
            powerup.body.position += powerup.body.velocity * dt;
            if !powerup.activated {
                continue;
            }

            powerup.duration -= dt;
            if powerup.duration <= 0.0 {
                powerup.activated = false;
                let kind = powerup.kind;
                if self.is_active(kind) {
                    log::debug!("{:?} expired, another instance still active", kind);
                } else {
                    log::debug!("{:?} expired", kind);
                    kind.revert(session);
                }
            }
        }
    }

    /// Resolve live powerups against the screen floor and the paddle.
    ///
    /// Powerups past `floor` are lost. Caught powerups are applied and
    /// destroyed; those with a duration become active. Returns the kinds caught.
    pub fn collect(
        &mut self,
        session: &mut Session,
        tuning: &Tuning,
        floor: f32,
    ) -> Vec<PowerUpKind> {
        let mut caught = Vec::new();
        for powerup in self.items.iter_mut().filter(|p| p.is_live()) {
            if powerup.body.position.y >= floor {
                powerup.body.destroyed = true;
                continue;
            }
            if check_aabb(&session.paddle, &powerup.body) {
                powerup.kind.apply(session, tuning);
                powerup.body.destroyed = true;
                powerup.activated = powerup.duration > 0.0;
                log::debug!("Caught {:?} powerup", powerup.kind);
                caught.push(powerup.kind);
            }
        }
        caught
    }

    /// Drop powerups that are gone and have no running effect.
    /// Survivors keep their relative order.
    pub fn prune(&mut self) {
        self.items.retain(|p| !p.body.destroyed || p.activated);
    }
}

fn should_spawn<R: Rng>(rng: &mut R, chance: u32) -> bool {
    rng.random_range(0..chance) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Effects, Session};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> Session {
        Session::new(800.0, 600.0, &Tuning::default())
    }

    fn caught(kind: PowerUpKind) -> PowerUp {
        let mut p = PowerUp::new(kind, Vec2::new(10.0, 10.0), &Tuning::default());
        p.body.destroyed = true;
        p.activated = p.duration > 0.0;
        p
    }

    #[test]
    fn test_kind_table() {
        assert_eq!(PowerUpKind::Speed.duration(), 0.0);
        assert_eq!(PowerUpKind::PadSizeIncrease.duration(), 0.0);
        assert_eq!(PowerUpKind::Sticky.duration(), 20.0);
        assert!(PowerUpKind::Confuse.spawn_chance() < PowerUpKind::Sticky.spawn_chance());
        assert!(!PowerUpKind::Chaos.is_good());
        assert!(PowerUpKind::PassThrough.is_good());
    }

    #[test]
    fn test_spawn_is_seeded() {
        let tuning = Tuning::default();
        let mut a = PowerUps::new();
        let mut b = PowerUps::new();
        let mut rng_a = Pcg32::seed_from_u64(7);
        let mut rng_b = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            a.spawn(Vec2::new(40.0, 20.0), &mut rng_a, &tuning);
            b.spawn(Vec2::new(40.0, 20.0), &mut rng_b, &tuning);
        }
        assert!(!a.is_empty());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.body.position, Vec2::new(40.0, 20.0));
            assert_eq!(x.body.size, tuning.powerup_size);
            assert!(!x.activated);
        }
    }

    #[test]
    fn test_apply_and_revert_sticky() {
        let tuning = Tuning::default();
        let mut s = session();
        PowerUpKind::Sticky.apply(&mut s, &tuning);
        assert!(s.ball.sticky);
        assert_eq!(s.paddle.color, STICKY_TINT);
        PowerUpKind::Sticky.revert(&mut s);
        assert!(!s.ball.sticky);
        assert_eq!(s.paddle.color, WHITE);
    }

    #[test]
    fn test_apply_speed_and_pad() {
        let tuning = Tuning::default();
        let mut s = session();
        let before = s.ball.body.velocity;
        PowerUpKind::Speed.apply(&mut s, &tuning);
        assert_eq!(s.ball.body.velocity, before * 1.2);
        PowerUpKind::PadSizeIncrease.apply(&mut s, &tuning);
        assert_eq!(s.paddle.size.x, tuning.player_size.x + 50.0);
    }

    #[test]
    fn test_confuse_and_chaos_exclude_each_other() {
        let tuning = Tuning::default();
        let mut s = session();
        PowerUpKind::Chaos.apply(&mut s, &tuning);
        PowerUpKind::Confuse.apply(&mut s, &tuning);
        assert!(s.effects.chaos);
        assert!(!s.effects.confuse);

        s.effects = Effects::default();
        PowerUpKind::Confuse.apply(&mut s, &tuning);
        PowerUpKind::Chaos.apply(&mut s, &tuning);
        assert!(s.effects.confuse);
        assert!(!s.effects.chaos);
    }

    #[test]
    fn test_two_sticky_expire_in_turn() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        let first = caught(PowerUpKind::Sticky);
        let mut second = caught(PowerUpKind::Sticky);
        second.duration = 30.0;
        PowerUpKind::Sticky.apply(&mut s, &tuning);
        PowerUpKind::Sticky.apply(&mut s, &tuning);
        powerups.push(first);
        powerups.push(second);

        powerups.tick(21.0, &mut s);
        powerups.prune();
        assert!(s.ball.sticky);
        assert_eq!(powerups.len(), 1);

        powerups.tick(10.0, &mut s);
        powerups.prune();
        assert!(!s.ball.sticky);
        assert!(powerups.is_empty());
    }

    #[test]
    fn test_simultaneous_expiry_reverts() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        PowerUpKind::PassThrough.apply(&mut s, &tuning);
        powerups.push(caught(PowerUpKind::PassThrough));
        powerups.push(caught(PowerUpKind::PassThrough));

        powerups.tick(10.0, &mut s);
        assert!(!s.ball.pass_through);
        assert_eq!(s.ball.body.color, WHITE);
    }

    #[test]
    fn test_zero_duration_never_activates() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        // Drop a speed powerup right onto the paddle
        let mut p = PowerUp::new(PowerUpKind::Speed, s.paddle.position, &tuning);
        p.body.velocity = Vec2::ZERO;
        powerups.push(p);

        let kinds = powerups.collect(&mut s, &tuning, 600.0);
        assert_eq!(kinds, vec![PowerUpKind::Speed]);
        assert!(!powerups.iter().any(|p| p.activated));

        powerups.prune();
        assert!(powerups.is_empty());
    }

    #[test]
    fn test_collect_activates_timed_powerup() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        powerups.push(PowerUp::new(PowerUpKind::Sticky, s.paddle.position, &tuning));

        powerups.collect(&mut s, &tuning, 600.0);
        powerups.prune();
        assert_eq!(powerups.len(), 1);
        assert!(powerups.is_active(PowerUpKind::Sticky));
        assert!(s.ball.sticky);
    }

    #[test]
    fn test_powerup_lost_past_floor() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        powerups.push(PowerUp::new(PowerUpKind::Chaos, Vec2::new(0.0, 600.0), &tuning));

        assert!(powerups.collect(&mut s, &tuning, 600.0).is_empty());
        assert!(!s.effects.chaos);
        powerups.prune();
        assert!(powerups.is_empty());
    }

    #[test]
    fn test_tick_moves_powerups_down() {
        let tuning = Tuning::default();
        let mut s = session();
        let mut powerups = PowerUps::new();
        powerups.push(PowerUp::new(PowerUpKind::Confuse, Vec2::new(5.0, 5.0), &tuning));
        powerups.tick(2.0, &mut s);
        let p = powerups.iter().next().unwrap();
        assert_eq!(p.body.position, Vec2::new(5.0, 305.0));
    }

    #[test]
    fn test_prune_keeps_order() {
        let tuning = Tuning::default();
        let mut powerups = PowerUps::new();
        powerups.push(PowerUp::new(PowerUpKind::Chaos, Vec2::ZERO, &tuning));
        powerups.push(caught(PowerUpKind::Speed));
        powerups.push(PowerUp::new(PowerUpKind::Sticky, Vec2::ZERO, &tuning));
        powerups.push(caught(PowerUpKind::Confuse));

        powerups.prune();
        let kinds: Vec<_> = powerups.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PowerUpKind::Chaos, PowerUpKind::Sticky, PowerUpKind::Confuse]
        );
    }
}
