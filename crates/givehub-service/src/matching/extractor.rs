//! Attribute extraction from free-text device and need descriptions.
//!
//! Pure and deterministic: the same description always yields the same
//! attributes, and extraction never fails — categories without a match
//! are simply omitted and lower the confidence value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use givehub_entity::device::DeviceCondition;

/// Confidence contribution for a detected device type.
const TYPE_CONFIDENCE: u8 = 30;
/// Confidence contribution for a detected condition.
const CONDITION_CONFIDENCE: u8 = 20;
/// Confidence contribution per matched specification rule.
const SPEC_CONFIDENCE_STEP: u8 = 10;
/// Cap on the total specification contribution.
const SPEC_CONFIDENCE_CAP: u8 = 50;

/// An ordered keyword table entry: a label and the substrings that vote
/// for it.
#[derive(Debug, Clone)]
pub struct KeywordEntry<L> {
    /// The label this entry selects.
    pub label: L,
    /// Case-insensitive substrings counted as votes.
    pub keywords: Vec<String>,
}

/// A specification extraction rule: a named key, a pattern, and a
/// renderer that turns the captures into the stored value.
pub struct SpecRule {
    /// The specification map key this rule contributes.
    pub key: &'static str,
    /// The pattern that must match the description.
    pub pattern: Regex,
    /// Renders the matched captures into the stored value.
    pub render: fn(&regex::Captures<'_>) -> String,
}

/// Attributes extracted from a free-text description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedAttributes {
    /// Normalized device-type label, when one was detected.
    pub device_type: Option<String>,
    /// Condition label, when one was detected.
    pub condition: Option<DeviceCondition>,
    /// Extracted specification entries (RAM, Storage, …).
    pub specifications: BTreeMap<String, String>,
    /// Extraction confidence, 0–100.
    pub confidence: u8,
}

/// Parses free-text descriptions into normalized device attributes.
///
/// The keyword tables are ordered data, not control flow: ties between
/// labels are broken by declaration order (first entry wins), and new
/// categories can be supplied via [`AttributeExtractor::with_tables`]
/// without touching the extraction logic.
pub struct AttributeExtractor {
    device_types: Vec<KeywordEntry<String>>,
    conditions: Vec<KeywordEntry<DeviceCondition>>,
}

impl AttributeExtractor {
    /// Creates an extractor with the built-in keyword tables.
    pub fn new() -> Self {
        Self {
            device_types: default_device_type_table(),
            conditions: default_condition_table(),
        }
    }

    /// Creates an extractor with custom ordered keyword tables.
    pub fn with_tables(
        device_types: Vec<KeywordEntry<String>>,
        conditions: Vec<KeywordEntry<DeviceCondition>>,
    ) -> Self {
        Self {
            device_types,
            conditions,
        }
    }

    /// Extracts attributes from a free-text description.
    pub fn extract(&self, description: &str) -> ExtractedAttributes {
        let lowered = description.to_lowercase();

        let device_type = select_label(&self.device_types, &lowered).cloned();
        let condition = select_label(&self.conditions, &lowered).copied();

        let mut specifications = BTreeMap::new();
        for rule in spec_rules() {
            if let Some(caps) = rule.pattern.captures(description) {
                specifications
                    .entry(rule.key.to_string())
                    .or_insert_with(|| (rule.render)(&caps));
            }
        }

        let mut confidence: u8 = 0;
        if device_type.is_some() {
            confidence += TYPE_CONFIDENCE;
        }
        if condition.is_some() {
            confidence += CONDITION_CONFIDENCE;
        }
        let spec_count = specifications.len() as u8;
        confidence += (spec_count.saturating_mul(SPEC_CONFIDENCE_STEP)).min(SPEC_CONFIDENCE_CAP);

        ExtractedAttributes {
            device_type,
            condition,
            specifications,
            confidence: confidence.min(100),
        }
    }
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the label with the most keyword votes; ties go to the earlier
/// table entry. `None` when nothing matched.
fn select_label<'a, L>(table: &'a [KeywordEntry<L>], lowered: &str) -> Option<&'a L> {
    let mut best: Option<(&L, usize)> = None;
    for entry in table {
        let votes = entry
            .keywords
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .count();
        if votes > 0 && best.map_or(true, |(_, b)| votes > b) {
            best = Some((&entry.label, votes));
        }
    }
    best.map(|(label, _)| label)
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Built-in device-type keyword table. Declaration order is the tie-break.
fn default_device_type_table() -> Vec<KeywordEntry<String>> {
    vec![
        KeywordEntry {
            label: "Laptop".to_string(),
            keywords: keywords(&[
                "laptop",
                "notebook",
                "macbook",
                "thinkpad",
                "chromebook",
                "ultrabook",
            ]),
        },
        KeywordEntry {
            label: "Desktop".to_string(),
            keywords: keywords(&["desktop", "tower", "workstation", "imac", "all-in-one"]),
        },
        KeywordEntry {
            label: "Tablet".to_string(),
            keywords: keywords(&["tablet", "ipad", "galaxy tab"]),
        },
        KeywordEntry {
            label: "Smartphone".to_string(),
            keywords: keywords(&["smartphone", "iphone", "android", "pixel", "phone"]),
        },
        KeywordEntry {
            label: "Monitor".to_string(),
            keywords: keywords(&["monitor", "display panel", "lcd"]),
        },
        KeywordEntry {
            label: "Printer".to_string(),
            keywords: keywords(&["printer", "inkjet", "laserjet"]),
        },
    ]
}

/// Built-in condition keyword table.
fn default_condition_table() -> Vec<KeywordEntry<DeviceCondition>> {
    vec![
        KeywordEntry {
            label: DeviceCondition::New,
            keywords: keywords(&["brand new", "sealed", "unopened", "never used", "new"]),
        },
        KeywordEntry {
            label: DeviceCondition::UsedGood,
            keywords: keywords(&[
                "good condition",
                "lightly used",
                "barely used",
                "excellent",
                "well maintained",
                "good",
            ]),
        },
        KeywordEntry {
            label: DeviceCondition::UsedFair,
            keywords: keywords(&[
                "fair",
                "worn",
                "scratches",
                "scratched",
                "cracked",
                "heavily used",
            ]),
        },
    ]
}

/// Ordered specification extraction rules. Earlier rules claim their key
/// first; later rules never overwrite an existing key.
fn spec_rules() -> &'static [SpecRule] {
    static RULES: LazyLock<Vec<SpecRule>> = LazyLock::new(|| {
        vec![
            SpecRule {
                key: "RAM",
                pattern: Regex::new(r"(?i)(\d+)\s*gb\s*(?:of\s+)?ram").unwrap(),
                render: |caps| format!("{} GB RAM", &caps[1]),
            },
            SpecRule {
                key: "Storage",
                pattern: Regex::new(r"(?i)(\d+)\s*(gb|tb)\s*(ssd|hdd|nvme|storage|hard\s*drive)")
                    .unwrap(),
                render: |caps| {
                    format!(
                        "{} {} {}",
                        &caps[1],
                        caps[2].to_uppercase(),
                        caps[3].to_uppercase()
                    )
                },
            },
            SpecRule {
                key: "Processor",
                pattern: Regex::new(
                    r"(?i)\b(intel\s+core\s+i[3579]|i[3579](?:-\w+)?|amd\s+ryzen\s*[3579]?|apple\s+m[1-4]|celeron|pentium|xeon)\b",
                )
                .unwrap(),
                render: |caps| caps[1].to_string(),
            },
            SpecRule {
                key: "Screen Size",
                pattern: Regex::new(r#"(?i)(\d{1,2}(?:\.\d)?)\s*(?:inch(?:es)?|")"#).unwrap(),
                render: |caps| format!("{} inch", &caps[1]),
            },
            SpecRule {
                key: "Year",
                pattern: Regex::new(r"\b(19[89]\d|20[0-4]\d)\b").unwrap(),
                render: |caps| caps[1].to_string(),
            },
            SpecRule {
                key: "Operating System",
                pattern: Regex::new(
                    r"(?i)\b(windows\s*(?:xp|vista|7|8|10|11)?|mac\s?os|linux|ubuntu|chrome\s?os|android|ios)\b",
                )
                .unwrap(),
                render: |caps| caps[1].trim().to_string(),
            },
        ]
    });
    &RULES
}
