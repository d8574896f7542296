//! Seed photo lists for the two gallery sections.
//!
//! Ids here are stable literals rather than generated, so reordering and
//! removal target the same entries across sessions.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::photo::Photo;

fn photo(id: &str, src: &str, alt: &str, caption: &str) -> Photo {
    Photo {
        id: id.to_owned(),
        src: src.to_owned(),
        alt: alt.to_owned(),
        caption: Some(caption.to_owned()),
    }
}

/// Portfolio section seed, in display order.
#[must_use]
pub fn portfolio_photos() -> Vec<Photo> {
    vec![
        photo(
            "benching",
            "/images/portfolio/portfolio-1.jpg",
            "Outdoor fitness photography",
            "Strength training in natural light",
        ),
        photo(
            "disney-tower",
            "/images/portfolio/portfolio-2.jpg",
            "Architectural photography",
            "Disney Tower perspective",
        ),
        photo(
            "portrait-1",
            "/images/portfolio/dagurls.JPG",
            "Portrait photography session",
            "Natural light portrait",
        ),
        photo(
            "portrait-2",
            "/images/portfolio/HR_exp.JPG",
            "Professional portrait",
            "Corporate headshot session",
        ),
        photo(
            "portrait-3",
            "/images/portfolio/jf_exp.JPG",
            "Creative portrait shot",
            "Artistic lighting experiment",
        ),
        photo(
            "portrait-4",
            "/images/portfolio/viv.JPG",
            "Lifestyle portrait",
            "Candid moment captured",
        ),
        photo(
            "portrait-5",
            "/images/portfolio/viv2.JPG",
            "Portrait series",
            "Second angle composition",
        ),
    ]
}

/// Personal section seed, in display order.
#[must_use]
pub fn personal_photos() -> Vec<Photo> {
    vec![
        photo(
            "with-henne",
            "/images/personal/personal-1.jpg",
            "Personal moment with loved ones",
            "Quality time with Henne",
        ),
        photo(
            "down-the-isle",
            "/images/personal/downtheisle.jpg",
            "Wedding ceremony moment",
            "Walking down the aisle",
        ),
        photo(
            "family-portrait",
            "/images/personal/family_portrait.jpg",
            "Family portrait session",
            "Family gathering memories",
        ),
        photo(
            "homiz",
            "/images/personal/homiz.JPG",
            "Casual moment with friends",
            "Good times with the homies",
        ),
    ]
}
