/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Pointer-driven 3D tilt for pricing cards.
//!
//! Every pointer sample maps to one [`Tilt`] on its own. Nothing is
//! smoothed or remembered between samples; the CSS transition on the card
//! takes care of easing between transforms.

/// Pixels of pointer offset per degree of rotation.
pub const DAMPING: f64 = 30.0;

/// Perspective distance used by the card transform, in pixels.
pub const PERSPECTIVE_PX: u32 = 900;

/// Rotation angles, in degrees, applied to a card.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation around the Y axis, driven by horizontal pointer offset (`--mx`).
    pub horizontal: f64,
    /// Rotation around the X axis, driven by vertical pointer offset (`--my`).
    pub vertical: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Computes the tilt for a pointer at (`x`, `y`) relative to the top-left
    /// corner of a `width` x `height` card.
    ///
    /// The vertical axis is inverted so the card leans toward the pointer.
    /// Samples outside the card are not clamped.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            horizontal: (x - width / 2.0) / DAMPING,
            // a centred pointer must stay +0.0, never "-0deg"
            vertical: (height / 2.0 - y) / DAMPING,
        }
    }

    /// Inline style carrying the custom properties and the transform that reads them.
    pub fn style(&self) -> String {
        format!(
            "--mx: {}deg; --my: {}deg; transform: perspective({PERSPECTIVE_PX}px) rotateX(var(--my)) rotateY(var(--mx));",
            self.horizontal, self.vertical
        )
    }
}
