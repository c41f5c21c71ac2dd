//! Per-render state: palette, random source and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{ArtError, Result};
use crate::types::{Colour, Palette};

/// Shared flag used to abort a render that has run too long.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the render holding this flag to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything a render function may read besides its canvas.
///
/// Each render call owns its own context; nothing here is shared between
/// concurrent renders except the cancel flag handed out by the caller.
pub struct RenderContext<'a> {
    palette: &'a Palette,
    rng: StdRng,
    cancel: CancelFlag,
}

impl<'a> RenderContext<'a> {
    /// Create a context; `seed` makes the render reproducible.
    pub fn new(palette: &'a Palette, seed: Option<u64>, cancel: CancelFlag) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            palette,
            rng,
            cancel,
        }
    }

    /// The palette for this render.
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// The random source for this render.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// A uniformly chosen palette colour.
    pub fn pick(&mut self) -> Colour {
        self.palette
            .colours()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Colour::WHITE)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Bail out with `Cancelled` if the render has been cancelled.
    pub fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(ArtError::Cancelled);
        }
        Ok(())
    }
}
