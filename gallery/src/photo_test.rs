use serde_json::json;

use super::*;

// =============================================================
// Photo serde
// =============================================================

#[test]
fn photo_serde_roundtrip() {
    let photo = Photo {
        id: "portfolio-1".to_owned(),
        src: "/images/portfolio/portfolio-1.jpg".to_owned(),
        alt: "Outdoor fitness photography".to_owned(),
        caption: Some("Strength training in natural light".to_owned()),
    };
    let raw = serde_json::to_string(&photo).unwrap();
    let back: Photo = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, photo);
}

#[test]
fn photo_without_caption_skips_field() {
    let photo = Photo {
        id: "p".to_owned(),
        src: "data:image/png;base64,AAAA".to_owned(),
        alt: "Uploaded photo".to_owned(),
        caption: None,
    };
    let value = serde_json::to_value(&photo).unwrap();
    assert_eq!(value, json!({ "id": "p", "src": "data:image/png;base64,AAAA", "alt": "Uploaded photo" }));
}

#[test]
fn photo_deserialize_missing_caption_is_none() {
    let photo: Photo = serde_json::from_value(json!({
        "id": "x",
        "src": "/images/x.jpg",
        "alt": "x",
    }))
    .unwrap();
    assert_eq!(photo.caption, None);
}

// =============================================================
// GallerySection
// =============================================================

#[test]
fn section_serde_lowercase() {
    assert_eq!(serde_json::to_string(&GallerySection::Portfolio).unwrap(), "\"portfolio\"");
    assert_eq!(serde_json::to_string(&GallerySection::Personal).unwrap(), "\"personal\"");
    let back: GallerySection = serde_json::from_str("\"personal\"").unwrap();
    assert_eq!(back, GallerySection::Personal);
}

#[test]
fn section_default_is_portfolio() {
    assert_eq!(GallerySection::default(), GallerySection::Portfolio);
}

#[test]
fn section_prefixes_are_distinct() {
    assert_eq!(GallerySection::Portfolio.id_prefix(), "portfolio");
    assert_eq!(GallerySection::Personal.id_prefix(), "personal");
}

#[test]
fn section_titles() {
    assert_eq!(GallerySection::Portfolio.title(), "My Photography");
    assert_eq!(GallerySection::Personal.title(), "With Friends & Loved Ones");
}

// =============================================================
// photo_id
// =============================================================

#[test]
fn photo_id_embeds_prefix() {
    let id = photo_id("personal");
    assert!(id.starts_with("personal-"));
    assert!(id.len() > "personal-".len());
}

#[test]
fn photo_id_successive_calls_are_unique() {
    let a = photo_id("portfolio");
    let b = photo_id("portfolio");
    assert_ne!(a, b);
}

#[test]
fn photo_new_mints_section_prefixed_id() {
    let photo = Photo::new(
        GallerySection::Personal,
        "data:image/jpeg;base64,BBBB".to_owned(),
        "Uploaded photo".to_owned(),
        None,
    );
    assert!(photo.id.starts_with("personal-"));
    assert_eq!(photo.alt, "Uploaded photo");
    assert_eq!(photo.caption, None);
}
