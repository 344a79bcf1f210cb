//! Per-platform support table for previewed manifest attributes.
//!
//! The table lists exceptions only; any `(stage, platform)` pair without a row is supported and
//! carries no disclaimer. Adding a platform or stage means adding rows here, not branching in
//! individual screens.

use serde::{Deserialize, Serialize};

use crate::model::{Platform, PreviewStage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub supported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl Capability {
    pub fn supported() -> Self {
        Self {
            supported: true,
            disclaimer: None,
        }
    }

    pub fn unsupported(disclaimer: impl Into<String>) -> Self {
        Self {
            supported: false,
            disclaimer: Some(disclaimer.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityException {
    pub stage: PreviewStage,
    pub platform: Platform,
    pub disclaimer: &'static str,
}

pub const CAPABILITY_EXCEPTIONS: &[CapabilityException] = &[
    CapabilityException {
        stage: PreviewStage::Shortname,
        platform: Platform::Windows,
        disclaimer: "Windows always uses the application's name and ignores its short name.",
    },
    CapabilityException {
        stage: PreviewStage::Shortcuts,
        platform: Platform::Ios,
        disclaimer: "iOS does not support the shortcuts feature.",
    },
];

/// Looks up whether `platform` renders `stage`, and the disclaimer to show when it does not.
pub fn supports(stage: PreviewStage, platform: Platform) -> Capability {
    CAPABILITY_EXCEPTIONS
        .iter()
        .find(|row| row.stage == stage && row.platform == platform)
        .map(|row| Capability::unsupported(row.disclaimer))
        .unwrap_or_else(Capability::supported)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn listed_exceptions_are_unsupported_with_disclaimer() {
        let shortcuts = supports(PreviewStage::Shortcuts, Platform::Ios);
        assert!(!shortcuts.supported);
        assert_eq!(
            shortcuts.disclaimer.as_deref(),
            Some("iOS does not support the shortcuts feature.")
        );
        assert!(!supports(PreviewStage::Shortname, Platform::Windows).supported);
    }

    #[test]
    fn every_other_combination_is_supported() {
        let mut unsupported = 0;
        for stage in PreviewStage::ALL {
            for platform in Platform::ALL {
                let capability = supports(stage, platform);
                if capability.supported {
                    assert_eq!(capability.disclaimer, None);
                } else {
                    unsupported += 1;
                }
            }
        }
        assert_eq!(unsupported, CAPABILITY_EXCEPTIONS.len());
    }
}
