use super::*;

use serde_json::json;

fn payload_with_duplicate_urls() -> AppData {
    serde_json::from_value(json!({
        "header_image": "https://cdn.example.com/header.jpg",
        "capsule_imagev5": "https://cdn.example.com/capsule.jpg",
        "screenshots": [
            { "path_full": "https://cdn.example.com/ss_0.jpg" },
            // Same URL as the header: the header context wins
            { "path_full": "https://cdn.example.com/header.jpg" },
            { "path_full": "https://cdn.example.com/ss_2.jpg" }
        ],
        "movies": [
            { "id": 1, "thumbnail": "https://cdn.example.com/thumb_0.jpg" },
            { "id": 2, "thumbnail": "https://cdn.example.com/thumb_0.jpg" }
        ]
    }))
    .unwrap()
}

#[test]
fn test_enumerate_assets_dedupes_by_url() {
    let urls = enumerate_assets(&payload_with_duplicate_urls());

    assert_eq!(urls.len(), 5);
    assert_eq!(
        urls[0],
        (
            "https://cdn.example.com/header.jpg".to_string(),
            AssetKind::Header
        )
    );
    // The duplicated screenshot URL is absent; ordering is preserved
    let kinds: Vec<AssetKind> = urls.iter().map(|(_, k)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            AssetKind::Header,
            AssetKind::Capsule,
            AssetKind::Screenshot(0),
            AssetKind::Screenshot(2),
            AssetKind::TrailerThumbnail(0),
        ]
    );
}

#[test]
fn test_enumerate_assets_skips_missing_urls() {
    let data: AppData = serde_json::from_value(json!({
        "screenshots": [ { "id": 0 } ],
        "movies": [ { "id": 1 } ]
    }))
    .unwrap();
    assert!(enumerate_assets(&data).is_empty());
}

#[test]
fn test_asset_kind_labels() {
    assert_eq!(AssetKind::Header.label(), "header");
    assert_eq!(AssetKind::Capsule.label(), "capsule");
    assert_eq!(AssetKind::Screenshot(3).label(), "screenshot_3");
    assert_eq!(
        AssetKind::TrailerThumbnail(2).label(),
        "trailer_2_thumbnail"
    );
}

#[test]
fn test_asset_kind_subdirs() {
    assert_eq!(AssetKind::Header.subdir(), None);
    assert_eq!(AssetKind::Screenshot(0).subdir(), Some("screenshots"));
    assert_eq!(AssetKind::TrailerThumbnail(0).subdir(), Some("trailers"));
}

#[test]
fn test_forward_slash_paths() {
    let path = std::path::Path::new("assets").join("570").join("header.jpg");
    assert_eq!(forward_slash(&path), "assets/570/header.jpg");
}

#[test]
fn test_path_for_lookup() {
    let mut assets = DownloadedAssets::default();
    assets.by_url.insert(
        "https://cdn.example.com/a.jpg".to_string(),
        "assets/1/a.jpg".to_string(),
    );

    assert_eq!(
        assets.path_for(Some("https://cdn.example.com/a.jpg")).as_deref(),
        Some("assets/1/a.jpg")
    );
    assert_eq!(assets.path_for(Some("https://cdn.example.com/b.jpg")), None);
    assert_eq!(assets.path_for(None), None);
}
