//! Tests for the scratch card state machine and alpha mask.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use veronese_scratch::{AlphaMask, REVEAL_THRESHOLD, ScratchCard, ScratchState};

#[test]
fn test_mask_starts_fully_covered() {
    let mask = AlphaMask::new(20, 10).unwrap();
    assert_eq!(mask.revealed_fraction(), 0.0);
    assert_eq!(mask.transparent_pixels(), 0);
    assert_eq!(mask.alpha_at(0, 0).unwrap(), 255);
    assert_eq!(mask.alpha_at(19, 9).unwrap(), 255);
}

#[test]
fn test_mask_rejects_zero_dimensions() {
    assert!(AlphaMask::new(0, 10).is_err());
    assert!(AlphaMask::new(10, 0).is_err());
    assert!(AlphaMask::new(5, 5).unwrap().alpha_at(5, 0).is_err());
}

#[test]
fn test_erase_circle_clips_to_edges() {
    let mut mask = AlphaMask::new(10, 10).unwrap();

    // Brush centered off-canvas still erases the overlapping corner.
    mask.erase_circle(-1.0, -1.0, 3.0);
    assert_eq!(mask.alpha_at(0, 0).unwrap(), 0);
    assert!(mask.transparent_pixels() > 0);

    // A brush entirely off-canvas erases nothing further.
    let before = mask.transparent_pixels();
    mask.erase_circle(100.0, 100.0, 3.0);
    assert_eq!(mask.transparent_pixels(), before);
}

#[test]
fn test_erase_is_idempotent_per_pixel() {
    let mut mask = AlphaMask::new(10, 10).unwrap();
    mask.erase_circle(5.0, 5.0, 2.0);
    let once = mask.transparent_pixels();
    mask.erase_circle(5.0, 5.0, 2.0);
    assert_eq!(mask.transparent_pixels(), once);
}

#[test]
fn test_card_ignores_moves_before_pointer_down() {
    let mut card = ScratchCard::new(10, 10).unwrap().with_radius(5.0);
    assert_eq!(card.pointer_move(5.0, 5.0), ScratchState::Covered);
    assert_eq!(card.revealed_fraction(), 0.0);

    card.pointer_down();
    assert_eq!(card.state(), ScratchState::Scratching);
}

#[test]
fn test_reveal_fires_exactly_once() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();

    // A brush bigger than the surface erases everything in one move.
    let mut card = ScratchCard::new(10, 10)
        .unwrap()
        .with_radius(20.0)
        .with_on_reveal(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    card.pointer_down();
    assert_eq!(card.pointer_move(5.0, 5.0), ScratchState::Revealed);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Further erasing keeps working but never re-fires or re-transitions.
    for _ in 0..10 {
        assert_eq!(card.pointer_move(3.0, 3.0), ScratchState::Revealed);
    }
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reveal_requires_crossing_threshold() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();

    // 100x100 surface; a radius-10 brush erases ~314 of 10000 pixels per
    // spot, so it takes several strokes to cross 30%.
    let mut card = ScratchCard::new(100, 100)
        .unwrap()
        .with_radius(10.0)
        .with_on_reveal(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    card.pointer_down();
    card.pointer_move(10.0, 10.0);
    assert_eq!(card.state(), ScratchState::Scratching);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(card.revealed_fraction() <= REVEAL_THRESHOLD);

    // Sweep the brush across the surface until the threshold is crossed.
    'outer: for row in 0..10 {
        for col in 0..10 {
            let state = card.pointer_move(col as f32 * 10.0 + 5.0, row as f32 * 10.0 + 5.0);
            if state == ScratchState::Revealed {
                break 'outer;
            }
        }
    }

    assert_eq!(card.state(), ScratchState::Revealed);
    assert!(card.revealed_fraction() > REVEAL_THRESHOLD);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn test_card_without_callback_still_transitions() {
    let mut card = ScratchCard::new(10, 10).unwrap().with_radius(20.0);
    card.pointer_down();
    assert_eq!(card.pointer_move(5.0, 5.0), ScratchState::Revealed);
}
