//! Pure ordered-list operations for gallery photos.
//!
//! Every operation takes the current list by reference and returns a new
//! list; callers replace their state wholesale with the result. Invalid
//! input (out-of-range position, unknown id, boundary move) is a silent
//! no-op rather than an error: the list that comes back is always valid.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use crate::photo::Photo;

/// Direction for single-step reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the list (lower index).
    Up,
    /// Toward the back of the list (higher index).
    Down,
}

/// Insert `photo` at `position`, appending when the position is absent or
/// past the end. `Some(len)` is a valid append position.
#[must_use]
pub fn insert_photo(photos: &[Photo], photo: Photo, position: Option<usize>) -> Vec<Photo> {
    let mut updated = photos.to_vec();
    let index = match position {
        Some(p) if p <= updated.len() => p,
        _ => updated.len(),
    };
    updated.insert(index, photo);
    updated
}

/// Remove the photo with `id`, returning the list unchanged if absent.
#[must_use]
pub fn remove_photo(photos: &[Photo], id: &str) -> Vec<Photo> {
    photos.iter().filter(|photo| photo.id != id).cloned().collect()
}

/// Move the photo with `id` one step in `direction`.
///
/// Unknown ids and boundary moves (up at the front, down at the back)
/// return the list unchanged.
#[must_use]
pub fn move_photo(photos: &[Photo], id: &str, direction: MoveDirection) -> Vec<Photo> {
    let mut updated = photos.to_vec();
    let Some(index) = updated.iter().position(|photo| photo.id == id) else {
        return updated;
    };
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => Some(index + 1).filter(|t| *t < updated.len()),
    };
    if let Some(target) = target {
        updated.swap(index, target);
    }
    updated
}
