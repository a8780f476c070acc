/// Recognized input audio formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// MPEG-1 Layer III
    Mp3,
    /// RIFF WAVE
    Wav,
    /// Free Lossless Audio Codec
    Flac,
    /// Ogg container (Vorbis/Opus)
    Ogg,
    /// MPEG-4 audio
    M4a,
}

impl AudioFormat {
    /// All recognized formats
    pub const ALL: [AudioFormat; 5] = [
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::Flac,
        AudioFormat::Ogg,
        AudioFormat::M4a,
    ];

    /// Look up a format by file extension (without the dot, any case)
    pub fn from_extension(extension: &str) -> Option<Self> {
        let lowered = extension.to_ascii_lowercase();
        AudioFormat::ALL
            .into_iter()
            .find(|format| format.extension() == lowered)
    }

    /// Canonical lowercase extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
            AudioFormat::Ogg => "ogg",
            AudioFormat::M4a => "m4a",
        }
    }
}

/// Dotted extensions of every recognized format, sorted alphabetically
pub fn supported_formats() -> Vec<String> {
    let mut formats: Vec<String> = AudioFormat::ALL
        .iter()
        .map(|format| format!(".{}", format.extension()))
        .collect();
    formats.sort();
    formats
}

/// One isolated component of a source mix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stem {
    /// Lead and backing vocals
    Vocals,
    /// Drum kit and percussion
    Drums,
    /// Bass line
    Bass,
    /// Everything else
    Other,
}

impl Stem {
    /// Stems in output order
    pub const ALL: [Stem; 4] = [Stem::Vocals, Stem::Drums, Stem::Bass, Stem::Other];

    /// Name used in output file names
    pub fn name(&self) -> &'static str {
        match self {
            Stem::Vocals => "vocals",
            Stem::Drums => "drums",
            Stem::Bass => "bass",
            Stem::Other => "other",
        }
    }
}
