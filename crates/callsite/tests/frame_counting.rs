//! Integration tests for counting frames that belong to the caller's file.
//!
//! Nested helpers in one file report how many of the frames above them share
//! their file so they can skip past themselves when attributing messages.

mod common;

use callsite::{count_frames_in_current_unit, depth, resolve_call_site, traced};

fn a(counts: &mut Vec<usize>) {
    counts.push(count_frames_in_current_unit());
    traced!(b(counts));
}

fn b(counts: &mut Vec<usize>) {
    counts.push(count_frames_in_current_unit());
    traced!(c(counts));
}

fn c(counts: &mut Vec<usize>) {
    counts.push(count_frames_in_current_unit());
}

// ============================================================================
// Nested Same-File Helpers
// ============================================================================

/// Verifies a -> b -> c entered from another file report 2, 3 and 4 frames.
#[test]
fn nested_helpers_count_increasing_frames() {
    let mut counts = Vec::new();
    common::from_other_file(|| traced!(a(&mut counts)));

    assert_eq!(counts, vec![2, 3, 4]);
    assert_eq!(depth(), 0);
}

/// Verifies counting stops at the first frame recorded in another file.
#[test]
fn count_stops_at_other_file() {
    let count = common::from_other_file(|| count_frames_in_current_unit());
    assert_eq!(count, 1);
}

/// Verifies the count is zero with no recorded frames.
#[test]
fn count_without_frames_is_zero() {
    assert_eq!(count_frames_in_current_unit(), 0);
}

// ============================================================================
// Skipping Own Frames
// ============================================================================

fn attributed_past_this_file() -> callsite::SourceLocation {
    let own = count_frames_in_current_unit();
    resolve_call_site(own)
}

/// Verifies a helper can use its frame count to skip past its own file.
#[test]
fn helper_skips_to_first_foreign_frame() {
    let owner = common::from_other_file(|| traced!(attributed_past_this_file()));
    assert!(owner.path().ends_with("tests/common/mod.rs"));
}
