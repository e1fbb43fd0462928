use chirp::server::utils::media_format_utils::{MediaFormat, split_media_key};

#[test]
fn test_sniffs_the_supported_formats() {
    let png = b"\x89PNG\r\n\x1a\n rest of the file";
    let jpeg = b"\xff\xd8\xff\xe0 rest of the file";
    let gif = b"GIF89a rest of the file";
    let mp4 = b"\x00\x00\x00\x20ftypisom more boxes";

    assert_eq!(MediaFormat::sniff(png), Some(MediaFormat::Png));
    assert_eq!(MediaFormat::sniff(jpeg), Some(MediaFormat::Jpeg));
    assert_eq!(MediaFormat::sniff(gif), Some(MediaFormat::Gif));
    assert_eq!(MediaFormat::sniff(mp4), Some(MediaFormat::Mp4));
}

#[test]
fn test_rejects_everything_else() {
    assert_eq!(MediaFormat::sniff(b"plain text"), None);
    assert_eq!(MediaFormat::sniff(b"%PDF-1.7"), None);
    assert_eq!(MediaFormat::sniff(b""), None);
    assert_eq!(MediaFormat::from_extension("txt"), None);
    assert_eq!(MediaFormat::from_extension("webp"), None);
}

#[test]
fn test_conversion_targets() {
    assert_eq!(MediaFormat::Png.converted_extension(), "webp");
    assert_eq!(MediaFormat::Jpeg.converted_extension(), "webp");
    assert_eq!(MediaFormat::Gif.converted_extension(), "webp");
    assert_eq!(MediaFormat::Mp4.converted_extension(), "webm");
}

#[test]
fn test_split_media_key() {
    assert_eq!(
        split_media_key("a22e7ac7.png"),
        Some(("a22e7ac7", "png"))
    );
    assert_eq!(split_media_key("no-extension"), None);
    assert_eq!(split_media_key(".png"), None);
    assert_eq!(split_media_key("id."), None);
}
