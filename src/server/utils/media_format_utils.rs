/// the four formats the media pipeline accepts. everything else is rejected
/// at upload and again at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
    Mp4,
}

impl MediaFormat {
    /// content sniffing from magic bytes, the multipart content-type header
    /// is client-controlled and not trusted
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            return Some(Self::Png);
        }
        if bytes.starts_with(b"\xff\xd8\xff") {
            return Some(Self::Jpeg);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        // iso base media: size prefix then 'ftyp'
        if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
            return Some(Self::Mp4);
        }
        None
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "png" => Some(Self::Png),
            "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "mp4" => Some(Self::Mp4),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Mp4 => "mp4",
        }
    }

    /// what the converter produces for this input
    pub fn converted_extension(&self) -> &'static str {
        match self {
            Self::Png | Self::Jpeg | Self::Gif => "webp",
            Self::Mp4 => "webm",
        }
    }
}

/// splits a media key like `a22e7ac7-....png` into id and extension
pub fn split_media_key(media_id: &str) -> Option<(&str, &str)> {
    let (id, extension) = media_id.split_once('.')?;
    if id.is_empty() || extension.is_empty() {
        return None;
    }
    Some((id, extension))
}
