//! Scratch-to-reveal engine.
//!
//! Models the scratch-card interaction: an opaque alpha mask is erased along
//! pointer movement, and once enough of the surface is transparent the card
//! transitions to revealed and fires a one-shot callback. Reveal state is
//! remembered per card id in a ledger with a 24-hour expiry.
//!
//! # Example
//!
//! ```
//! use veronese_scratch::{ScratchCard, ScratchState};
//!
//! let mut card = ScratchCard::new(10, 10).unwrap().with_radius(6.0);
//! card.pointer_down();
//! card.pointer_move(5.0, 5.0);
//! assert_eq!(card.state(), ScratchState::Revealed);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card;
mod ledger;
mod mask;

pub use card::{REVEAL_THRESHOLD, ScratchCard, ScratchState};
pub use ledger::{RevealEntry, RevealLedger, RevealLedgerConfig, RevealLedgerConfigBuilder};
pub use mask::AlphaMask;

pub use veronese_error::{ScratchError, ScratchErrorKind};
