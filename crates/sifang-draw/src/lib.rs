//! Randomized dealer draw for sifang, a four-player score keeper.
//!
//! A draw picks one of the four seats uniformly at random, independent of any
//! prior draw. The presentation layer renders the pick as a spinning wheel;
//! the crucial ordering rule is that the winning seat is drawn *first* and
//! the cosmetic rotation is derived from it afterwards, so the animation can
//! never be a source of bias.

use rand::Rng;
use tracing::debug;

use sifang_types::{PlayerId, PLAYER_COUNT};

/// Wheel segment width in degrees. Seat index 0 occupies 0..90 on the wheel
/// face, seat 1 the next quadrant, and so on clockwise.
const SEGMENT_DEGREES: u32 = 360 / PLAYER_COUNT as u32;

/// Minimum cosmetic rotation: five full turns before settling.
const BASE_TURNS_DEGREES: u32 = 5 * 360;

/// Spin animation length the presentation layer should use, in milliseconds.
const SPIN_DURATION_MS: u32 = 3000;

/// The result of one dealer draw, reported atomically: the winner plus the
/// cosmetic animation parameters that land the wheel pointer on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinOutcome {
    /// The drawn dealer.
    pub winner: PlayerId,
    /// 0-based seat index of the winner (order-stable with seating).
    pub winning_index: usize,
    /// Total clockwise rotation for the wheel animation, in degrees.
    pub rotation_degrees: u32,
    /// Suggested animation duration, in milliseconds.
    pub duration_ms: u32,
}

/// Draw a dealer using the thread-local RNG.
pub fn spin() -> SpinOutcome {
    spin_with_rng(&mut rand::thread_rng())
}

/// Draw a dealer with an injected RNG (deterministic in tests).
///
/// The winning seat index comes from a single uniform draw over `[0, 4)`.
/// The rotation is then back-computed so that, after turning clockwise, the
/// fixed top pointer rests inside the winner's segment: with the wheel
/// rotated `r` degrees, the segment under the pointer is
/// `floor(((360 - r mod 360) mod 360) / 90)`.
pub fn spin_with_rng<R: Rng + ?Sized>(rng: &mut R) -> SpinOutcome {
    let winning_index = rng.gen_range(0..PLAYER_COUNT);

    // Land somewhere strictly inside the segment, not on its boundary.
    let jitter = rng.gen_range(1..SEGMENT_DEGREES);
    let pointer_angle = winning_index as u32 * SEGMENT_DEGREES + jitter;
    let resting = (360 - pointer_angle) % 360;
    let rotation_degrees = BASE_TURNS_DEGREES + resting;

    let winner = PlayerId::from_seat(winning_index)
        .expect("seat index drawn from 0..4");
    debug!(%winner, rotation_degrees, "dealer drawn");

    SpinOutcome {
        winner,
        winning_index,
        rotation_degrees,
        duration_ms: SPIN_DURATION_MS,
    }
}
