//! Remediation hints attached to violations.

use baseguard_core::types::BaselineFeatureInfo;
use serde::{Deserialize, Serialize};

/// Remediation guidance for one violation. Every field is best-effort;
/// features without catalog entries get documentation links only, and
/// features missing from the dataset get an empty block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    /// npm packages that backfill the feature.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polyfills: Vec<String>,
    /// Baseline-safer feature IDs covering similar use cases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    /// Progressive-enhancement snippet guarding the feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Documentation links carried over from the Baseline dataset.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

impl Remediation {
    pub fn is_empty(&self) -> bool {
        self.polyfills.is_empty()
            && self.alternatives.is_empty()
            && self.snippet.is_none()
            && self.docs.is_empty()
    }
}

/// Static remediation tables keyed by feature ID.
///
/// The tables are curated, not generated: they cover the features teams
/// actually trip over, and absence is normal rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemediationCatalog;

impl RemediationCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the remediation block for a feature, folding in the doc
    /// links from its dataset record when one exists.
    pub fn for_feature(&self, feature_id: &str, info: Option<&BaselineFeatureInfo>) -> Remediation {
        let mut docs = Vec::new();
        if let Some(info) = info {
            if let Some(url) = &info.spec_url {
                docs.push(url.clone());
            }
            if let Some(url) = &info.mdn_url {
                docs.push(url.clone());
            }
        }

        Remediation {
            polyfills: polyfills_for(feature_id)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            alternatives: alternatives_for(feature_id)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            snippet: snippet_for(feature_id).map(str::to_string),
            docs,
        }
    }
}

/// npm polyfill packages per feature ID.
fn polyfills_for(feature_id: &str) -> &'static [&'static str] {
    match feature_id {
        "container-queries" => &["container-query-polyfill"],
        "has" => &["css-has-pseudo"],
        "nesting" => &["postcss-nesting"],
        "anchor-positioning" => &["@oddbird/css-anchor-positioning"],
        "popover" => &["@oddbird/popover-polyfill"],
        "dialog" => &["dialog-polyfill"],
        "scroll-driven-animations" => &["scroll-timeline-polyfill"],
        "focus-visible" => &["focus-visible"],
        "resize-observer" => &["resize-observer-polyfill"],
        "intersection-observer" => &["intersection-observer"],
        "fetch" => &["whatwg-fetch"],
        "abortable-fetch" => &["abortcontroller-polyfill"],
        "web-animations" => &["web-animations-js"],
        "customized-built-in-elements" => &["@ungap/custom-elements"],
        "broadcast-channel" => &["broadcast-channel"],
        "url" => &["url-polyfill"],
        "structured-clone" => &["@ungap/structured-clone"],
        "scroll-behavior" => &["smoothscroll-polyfill"],
        _ => &[],
    }
}

/// Baseline-safer alternative feature IDs per feature ID.
fn alternatives_for(feature_id: &str) -> &'static [&'static str] {
    match feature_id {
        "subgrid" => &["grid"],
        "grid" => &["flexbox"],
        "container-queries" => &["grid", "flexbox"],
        "has" => &["is", "where"],
        "popover" => &["dialog"],
        "customized-built-in-elements" => &["custom-elements"],
        "view-transitions" => &["web-animations"],
        "scroll-driven-animations" => &["web-animations"],
        _ => &[],
    }
}

/// Progressive-enhancement guard snippet per feature ID.
fn snippet_for(feature_id: &str) -> Option<&'static str> {
    match feature_id {
        "container-queries" => Some(
            "@supports (container-type: inline-size) {\n  /* container query styles */\n}",
        ),
        "has" => Some("@supports selector(:has(a)) {\n  /* :has() styles */\n}"),
        "nesting" => Some("@supports selector(&) {\n  /* nested styles */\n}"),
        "subgrid" => Some(
            "@supports (grid-template-rows: subgrid) {\n  /* subgrid styles */\n}",
        ),
        "anchor-positioning" => Some(
            "@supports (anchor-name: --anchor) {\n  /* anchor positioning styles */\n}",
        ),
        "scrollbar-gutter" => Some(
            "@supports (scrollbar-gutter: stable) {\n  /* reserved gutter styles */\n}",
        ),
        "scroll-driven-animations" => Some(
            "@supports (animation-timeline: scroll()) {\n  /* scroll-driven styles */\n}",
        ),
        "view-transitions" => Some(
            "if (document.startViewTransition) {\n  document.startViewTransition(() => update());\n} else {\n  update();\n}",
        ),
        "popover" => Some(
            "if (HTMLElement.prototype.hasOwnProperty('popover')) {\n  /* popover API available */\n}",
        ),
        "dialog" => Some(
            "if (typeof HTMLDialogElement === 'function') {\n  dialog.showModal();\n}",
        ),
        "file-system-access" => Some(
            "if ('showOpenFilePicker' in window) {\n  /* File System Access available */\n}",
        ),
        "web-bluetooth" => Some(
            "if ('bluetooth' in navigator) {\n  /* Web Bluetooth available */\n}",
        ),
        "notifications" => Some(
            "if ('Notification' in window) {\n  /* Notifications available */\n}",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseguard_core::types::{BaselineStatus, BaselineSupport};

    fn info_with_links() -> BaselineFeatureInfo {
        BaselineFeatureInfo {
            id: "container-queries".to_string(),
            name: "Container queries".to_string(),
            baseline: BaselineSupport {
                status: BaselineStatus::Newly,
                ..Default::default()
            },
            spec_url: Some("https://drafts.csswg.org/css-contain-3/".to_string()),
            mdn_url: Some(
                "https://developer.mozilla.org/docs/Web/CSS/CSS_containment".to_string(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn catalog_entry_with_all_fields() {
        let catalog = RemediationCatalog::new();
        let remediation = catalog.for_feature("container-queries", Some(&info_with_links()));

        assert_eq!(remediation.polyfills, vec!["container-query-polyfill"]);
        assert_eq!(remediation.alternatives, vec!["grid", "flexbox"]);
        assert!(remediation.snippet.as_deref().unwrap().contains("@supports"));
        assert_eq!(remediation.docs.len(), 2);
    }

    #[test]
    fn unlisted_feature_gets_docs_only() {
        let catalog = RemediationCatalog::new();
        let mut info = info_with_links();
        info.id = "offscreen-canvas".to_string();
        info.mdn_url = None;

        let remediation = catalog.for_feature("offscreen-canvas", Some(&info));
        assert!(remediation.polyfills.is_empty());
        assert!(remediation.alternatives.is_empty());
        assert!(remediation.snippet.is_none());
        assert_eq!(remediation.docs.len(), 1);
    }

    #[test]
    fn missing_record_gets_empty_block() {
        let catalog = RemediationCatalog::new();
        let remediation = catalog.for_feature("not-in-any-table", None);
        assert!(remediation.is_empty());
    }
}
