use super::*;

fn ids(photos: &[Photo]) -> Vec<&str> {
    photos.iter().map(|p| p.id.as_str()).collect()
}

// ============================================================================
// Portfolio section
// ============================================================================

#[test]
fn portfolio_seed_order() {
    assert_eq!(
        ids(&portfolio_photos()),
        vec![
            "benching",
            "disney-tower",
            "portrait-1",
            "portrait-2",
            "portrait-3",
            "portrait-4",
            "portrait-5",
        ]
    );
}

#[test]
fn portfolio_paths_live_under_the_portfolio_dir() {
    for p in portfolio_photos() {
        assert!(p.src.starts_with("/images/portfolio/"), "bad src {}", p.src);
    }
}

// ============================================================================
// Personal section
// ============================================================================

#[test]
fn personal_seed_order() {
    assert_eq!(
        ids(&personal_photos()),
        vec!["with-henne", "down-the-isle", "family-portrait", "homiz"]
    );
}

#[test]
fn personal_paths_live_under_the_personal_dir() {
    for p in personal_photos() {
        assert!(p.src.starts_with("/images/personal/"), "bad src {}", p.src);
    }
}

// ============================================================================
// Shared shape
// ============================================================================

#[test]
fn every_seed_photo_has_alt_and_caption() {
    for p in portfolio_photos().into_iter().chain(personal_photos()) {
        assert!(!p.alt.is_empty(), "{} missing alt", p.id);
        assert!(p.caption.is_some(), "{} missing caption", p.id);
    }
}

#[test]
fn seed_ids_are_unique_across_sections() {
    let mut all = ids(&portfolio_photos())
        .into_iter()
        .map(str::to_owned)
        .chain(ids(&personal_photos()).into_iter().map(str::to_owned))
        .collect::<Vec<_>>();
    let before = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), before);
}
