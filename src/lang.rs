//! Target-language set and detection fallback code.

/// Code used when language detection cannot produce a result.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Supported translation targets.
///
/// The set is closed: the translation service is only ever asked for one of
/// these codes, so an unsupported-pair rejection is a service-side anomaly
/// rather than an input-validation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Chinese,
        Self::Japanese,
    ];

    /// ISO 639-1 code sent to the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
        }
    }

    /// Human-readable name for selector UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "es" => Some(Self::Spanish),
            "fr" => Some(Self::French),
            "de" => Some(Self::German),
            "zh" => Some(Self::Chinese),
            "ja" => Some(Self::Japanese),
            _ => None,
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in TargetLanguage::ALL {
            assert_eq!(TargetLanguage::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(TargetLanguage::from_code("ES"), Some(TargetLanguage::Spanish));
        assert_eq!(TargetLanguage::from_code("Ja"), Some(TargetLanguage::Japanese));
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(TargetLanguage::from_code("tlh"), None);
        assert_eq!(TargetLanguage::from_code(""), None);
    }
}
