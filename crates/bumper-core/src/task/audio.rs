//! Audio task
//!
//! Plays a fixed tune forever. The tune can be paused from outside through the shared audio
//! [`TaskGate`]; a pause takes effect at the next note boundary and the buzzer stays silent while
//! paused.

use embassy_time::{Duration, Timer};

use crate::hal::Buzzer;
use crate::system::gate::TaskGate;

/// One step of the tune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Tone frequency, 0 for a rest
    pub frequency_hz: u32,
    /// How long the note lasts
    pub duration: Duration,
}

impl Note {
    /// A sounding note.
    pub const fn tone(frequency_hz: u32, millis: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(millis),
        }
    }

    /// A rest.
    pub const fn rest(millis: u64) -> Self {
        Self::tone(0, millis)
    }

    /// Returns `true` for a rest.
    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

const C4: u32 = 262;
const D4: u32 = 294;
const E4: u32 = 330;
const F4: u32 = 349;
const G4: u32 = 392;
const A4: u32 = 440;

const QUARTER: u64 = 300;
const HALF: u64 = 600;

/// Silence between two notes so repeated pitches stay distinct
pub const ARTICULATION: Duration = Duration::from_millis(30);

/// The tune
pub const SONG: [Note; 15] = [
    Note::tone(C4, QUARTER),
    Note::tone(C4, QUARTER),
    Note::tone(G4, QUARTER),
    Note::tone(G4, QUARTER),
    Note::tone(A4, QUARTER),
    Note::tone(A4, QUARTER),
    Note::tone(G4, HALF),
    Note::tone(F4, QUARTER),
    Note::tone(F4, QUARTER),
    Note::tone(E4, QUARTER),
    Note::tone(E4, QUARTER),
    Note::tone(D4, QUARTER),
    Note::tone(D4, QUARTER),
    Note::tone(C4, HALF),
    Note::rest(HALF),
];

/// Plays [`SONG`] in a loop, pausing whenever `gate` is suspended.
pub async fn audio<B: Buzzer>(gate: &TaskGate, buzzer: &mut B) {
    buzzer.silence();
    loop {
        for note in SONG.iter() {
            gate.checkpoint().await;
            if !note.is_rest() {
                buzzer.tone(note.frequency_hz);
            }
            Timer::after(note.duration).await;
            buzzer.silence();
            Timer::after(ARTICULATION).await;
        }
    }
}
