//! Audio triggers
//!
//! The simulation queues [`GameEvent`]s; the host drains them after each tick
//! and hands them to [`dispatch`], which fires the matching clip.

use crate::sim::GameEvent;

/// Sound clips the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    /// Looping background track
    Music,
    /// Destructible brick breaks
    BrickBreak,
    /// Ball hits a solid brick
    SolidHit,
    /// Ball hits the paddle
    PaddleHit,
    /// Powerup caught
    PowerUp,
    /// Level cleared
    Victory,
}

impl Clip {
    /// Conventional asset path for the host's audio loader
    pub fn path(&self) -> &'static str {
        match self {
            Clip::Music => "resources/audio/breakout.mp3",
            Clip::BrickBreak => "resources/audio/bleep.mp3",
            Clip::SolidHit => "resources/audio/solid.wav",
            Clip::PaddleHit => "resources/audio/bleep.wav",
            Clip::PowerUp => "resources/audio/powerup.wav",
            Clip::Victory => "resources/audio/victory.wav",
        }
    }
}

/// Fire-and-forget playback
pub trait AudioTrigger {
    fn play(&mut self, clip: Clip, looping: bool);
}

/// Clip for an event, if it makes a sound
pub fn clip_for(event: &GameEvent) -> Option<Clip> {
    match event {
        GameEvent::BrickDestroyed => Some(Clip::BrickBreak),
        GameEvent::SolidHit => Some(Clip::SolidHit),
        GameEvent::PaddleHit => Some(Clip::PaddleHit),
        GameEvent::PowerUpCollected(_) => Some(Clip::PowerUp),
        GameEvent::LevelWon => Some(Clip::Victory),
        GameEvent::LifeLost | GameEvent::GameOver => None,
    }
}

/// Play the clip for every event, in order
pub fn dispatch<A, I>(events: I, audio: &mut A)
where
    A: AudioTrigger + ?Sized,
    I: IntoIterator<Item = GameEvent>,
{
    for event in events {
        if let Some(clip) = clip_for(&event) {
            audio.play(clip, false);
        }
    }
}

/// Start the looping background track
pub fn start_music<A: AudioTrigger + ?Sized>(audio: &mut A) {
    audio.play(Clip::Music, true);
}
