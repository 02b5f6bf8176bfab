// Texture set loading: concurrent fetch + decode, all-or-nothing.

use carousel_core::assets::{decode_panel_image, load_texture_set};
use carousel_core::SceneError;
use std::collections::HashMap;
use std::io::Cursor;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn store(entries: &[(&str, Vec<u8>)]) -> HashMap<String, Vec<u8>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn decode_resizes_to_the_layer_size() {
    let img = decode_panel_image(&png_bytes(8, 6, [10, 20, 30, 255]), 4, 5).unwrap();
    assert_eq!((img.width, img.height), (4, 5));
    assert_eq!(img.rgba.len(), 4 * 5 * 4);
    assert_eq!(&img.rgba[..4], &[10, 20, 30, 255]);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_panel_image(b"not an image", 4, 4).is_err());
}

#[test]
fn loads_every_uri_in_order() {
    let files = store(&[
        ("a.png", png_bytes(2, 2, [255, 0, 0, 255])),
        ("b.png", png_bytes(3, 3, [0, 255, 0, 255])),
        ("c.png", png_bytes(4, 4, [0, 0, 255, 255])),
    ]);
    let uris: Vec<String> = ["a.png", "b.png", "c.png"].map(String::from).to_vec();
    let set = pollster::block_on(load_texture_set(&uris, (2, 2), |uri| {
        let bytes = files.get(&uri).cloned();
        async move { bytes.ok_or_else(|| format!("404 {uri}")) }
    }))
    .unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!((set.width, set.height), (2, 2));
    assert_eq!(&set.layers[0].rgba[..4], &[255, 0, 0, 255]);
    assert_eq!(&set.layers[1].rgba[..4], &[0, 255, 0, 255]);
    assert_eq!(&set.layers[2].rgba[..4], &[0, 0, 255, 255]);
}

#[test]
fn one_missing_resource_fails_the_whole_set() {
    let files = store(&[
        ("a.png", png_bytes(2, 2, [255, 255, 255, 255])),
        ("c.png", png_bytes(2, 2, [255, 255, 255, 255])),
    ]);
    let uris: Vec<String> = ["a.png", "b.png", "c.png"].map(String::from).to_vec();
    let err = pollster::block_on(load_texture_set(&uris, (2, 2), |uri| {
        let bytes = files.get(&uri).cloned();
        async move { bytes.ok_or_else(|| format!("404 {uri}")) }
    }))
    .unwrap_err();

    match err {
        SceneError::ResourceLoad { index, uri, reason } => {
            assert_eq!(index, 1);
            assert_eq!(uri, "b.png");
            assert!(reason.contains("404"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn undecodable_resource_reports_its_index() {
    let uris = vec!["ok.png".to_string(), "bad.png".to_string()];
    let err = pollster::block_on(load_texture_set(&uris, (2, 2), |uri| async move {
        if uri == "ok.png" {
            Ok::<_, String>(png_bytes(2, 2, [0, 0, 0, 255]))
        } else {
            Ok(b"garbage".to_vec())
        }
    }))
    .unwrap_err();
    assert!(matches!(err, SceneError::ResourceLoad { index: 1, .. }));
    assert!(err.to_string().contains("bad.png"));
}
