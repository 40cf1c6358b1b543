// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and animation constants.
//!
//! # Categories
//!
//! - **Terminal**: typewriter typing interval bounds
//! - **Transitions**: durations of the cosmetic card and modal animations
//! - **Tick**: frame interval used while something animates

// ==========================================================================
// Terminal Defaults
// ==========================================================================

/// Default delay between two typed characters (milliseconds).
pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 35;

/// Fastest allowed typing interval (milliseconds).
pub const MIN_TYPING_INTERVAL_MS: u64 = 10;

/// Slowest allowed typing interval (milliseconds).
pub const MAX_TYPING_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Cross-fade duration of an inline carousel image change (milliseconds).
pub const CARD_CROSSFADE_MS: u64 = 250;

/// Slide-in duration of a modal image change (milliseconds).
pub const MODAL_SLIDE_MS: u64 = 300;

/// Horizontal distance a modal image travels while sliding in (pixels).
pub const MODAL_SLIDE_DISTANCE: f32 = 80.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick interval while a transition runs (about 60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval while only toasts are waiting to expire.
pub const IDLE_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TYPING_INTERVAL_MS > 0);
    assert!(MAX_TYPING_INTERVAL_MS >= MIN_TYPING_INTERVAL_MS);
    assert!(DEFAULT_TYPING_INTERVAL_MS >= MIN_TYPING_INTERVAL_MS);
    assert!(DEFAULT_TYPING_INTERVAL_MS <= MAX_TYPING_INTERVAL_MS);

    assert!(CARD_CROSSFADE_MS > 0);
    assert!(MODAL_SLIDE_MS > 0);
    assert!(MODAL_SLIDE_DISTANCE > 0.0);

    assert!(ANIMATION_TICK_MS > 0);
    assert!(IDLE_TICK_MS >= ANIMATION_TICK_MS);
    // Every transition spans more than one animation tick.
    assert!(ANIMATION_TICK_MS < CARD_CROSSFADE_MS);
    assert!(ANIMATION_TICK_MS < MODAL_SLIDE_MS);
};
