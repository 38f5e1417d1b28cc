//! Scratch card state machine.

use crate::AlphaMask;
use veronese_error::ScratchError;

/// Revealed-fraction threshold that flips a card to revealed.
pub const REVEAL_THRESHOLD: f32 = 0.30;

/// Default brush radius in pixels.
const DEFAULT_RADIUS: f32 = 20.0;

/// Lifecycle of a scratch card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScratchState {
    /// Untouched, fully covered
    Covered,
    /// Pointer is down, surface being erased
    Scratching,
    /// Threshold crossed; terminal state
    Revealed,
}

/// A scratch card: an alpha mask plus the `Covered → Scratching → Revealed`
/// state machine driving it.
///
/// The reveal transition happens at most once, the first time the erased
/// fraction exceeds [`REVEAL_THRESHOLD`]. The surface stays erasable after
/// the reveal but the state never changes again.
pub struct ScratchCard {
    mask: AlphaMask,
    state: ScratchState,
    radius: f32,
    on_reveal: Option<Box<dyn FnMut() + Send>>,
}

impl std::fmt::Debug for ScratchCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchCard")
            .field("state", &self.state)
            .field("radius", &self.radius)
            .field("revealed_fraction", &self.mask.revealed_fraction())
            .finish()
    }
}

impl ScratchCard {
    /// Create a covered card with the default brush radius.
    ///
    /// # Errors
    ///
    /// Returns an error for zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ScratchError> {
        Ok(Self {
            mask: AlphaMask::new(width, height)?,
            state: ScratchState::Covered,
            radius: DEFAULT_RADIUS,
            on_reveal: None,
        })
    }

    /// Set the brush radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Register the reveal callback, fired exactly once on the transition to
    /// [`ScratchState::Revealed`].
    pub fn with_on_reveal(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_reveal = Some(Box::new(callback));
        self
    }

    /// Current state.
    pub fn state(&self) -> ScratchState {
        self.state
    }

    /// The cover layer.
    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    /// Fraction of the surface erased, in `[0, 1]`.
    pub fn revealed_fraction(&self) -> f32 {
        self.mask.revealed_fraction()
    }

    /// First pointer contact: `Covered → Scratching`.
    pub fn pointer_down(&mut self) {
        if self.state == ScratchState::Covered {
            tracing::debug!("Scratching started");
            self.state = ScratchState::Scratching;
        }
    }

    /// Pointer movement while in contact.
    ///
    /// Ignored while covered (no contact yet). Otherwise erases a brush
    /// circle, then re-samples the whole mask; crossing the threshold flips
    /// the card to revealed and fires the callback. Returns the state after
    /// the move.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> ScratchState {
        if self.state == ScratchState::Covered {
            return self.state;
        }

        self.mask.erase_circle(x, y, self.radius);

        if self.state == ScratchState::Scratching
            && self.mask.revealed_fraction() > REVEAL_THRESHOLD
        {
            tracing::debug!(fraction = self.mask.revealed_fraction(), "Card revealed");
            self.state = ScratchState::Revealed;
            if let Some(callback) = self.on_reveal.as_mut() {
                callback();
            }
        }

        self.state
    }
}
