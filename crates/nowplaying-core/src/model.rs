use crate::theme::Category;

/// Viewer name used when a session carries no user element.
pub const LOCAL_USER: &str = "local";

pub const HARDWARE_GLYPH: char = '»';
pub const SOFTWARE_GLYPH: char = '›';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Episode,
    Track,
}

impl MediaKind {
    /// Map a `type` attribute value to a kind.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(MediaKind::Movie),
            "episode" => Some(MediaKind::Episode),
            "track" => Some(MediaKind::Track),
            _ => None,
        }
    }

    pub fn category(self) -> Category {
        match self {
            MediaKind::Movie => Category::Movie,
            MediaKind::Episode => Category::Episode,
            MediaKind::Track => Category::Track,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeMode {
    Hardware,
    Software,
}

impl TranscodeMode {
    /// `transcodeHwFullPipeline="1"` means the whole pipeline runs on hardware.
    pub fn from_hw_flag(flag: &str) -> Self {
        if flag == "1" {
            TranscodeMode::Hardware
        } else {
            TranscodeMode::Software
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TranscodeMode::Hardware => HARDWARE_GLYPH,
            TranscodeMode::Software => SOFTWARE_GLYPH,
        }
    }
}

/// One playback entry as accumulated between its open and close markers.
///
/// `album` is the show name for episodes and the album name for tracks;
/// movies leave it unused. Text fields hold raw attribute values, entity
/// references included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub kind: MediaKind,
    pub album: String,
    pub title: String,
    pub user: String,
    pub transcode: Option<TranscodeMode>,
}

impl SessionRecord {
    pub fn new(kind: MediaKind, album: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            album: album.into(),
            title: title.into(),
            user: LOCAL_USER.to_string(),
            transcode: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_transcode(mut self, mode: TranscodeMode) -> Self {
        self.transcode = Some(mode);
        self
    }
}
