//! Conversation state types
//!
//! All state is client-held: the server receives it with every message and
//! hands back the next one. Nothing here is retained between requests.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Flow
// ============================================================================

/// Which conversation table to run. Both share one dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Topic guide: font sizes, spacing, pairings, color readability
    #[default]
    Guide,
    /// Palette recommendation wizard
    Palette,
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Guide => "guide",
            Flow::Palette => "palette",
        }
    }

    /// Where the flow starts and where unrecognized input lands
    pub fn initial_step(self) -> Step {
        match self {
            Flow::Guide => Step::Main,
            Flow::Palette => Step::Start,
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown flow: {0:?} (expected \"guide\" or \"palette\")")]
pub struct UnknownFlow(pub String);

impl FromStr for Flow {
    type Err = UnknownFlow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guide" => Ok(Flow::Guide),
            "palette" => Ok(Flow::Palette),
            _ => Err(UnknownFlow(s.to_string())),
        }
    }
}

// ============================================================================
// Step
// ============================================================================

/// Named position in the conversation. Serialized with the wire names the
/// browser client already stores; unknown names read back as `Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Init,

    // Guide flow
    Main,
    FontSize,
    FontSizeDetail,
    LineSpacing,
    LineSpacingDetail,
    FontPairing,
    FontPairingDetail,
    Color,
    Checklist,
    Responsive,

    // Shared
    AwaitingHex,
    ColorAnalyzed,
    SizeAnalyzed,

    // Palette flow
    Start,
    AwaitingFeel,
    AwaitingMood,
    AwaitingKeyword,
    AskAnalyzeAfterRecommend,
}

impl Step {
    pub const ALL: [Step; 19] = [
        Step::Init,
        Step::Main,
        Step::FontSize,
        Step::FontSizeDetail,
        Step::LineSpacing,
        Step::LineSpacingDetail,
        Step::FontPairing,
        Step::FontPairingDetail,
        Step::Color,
        Step::Checklist,
        Step::Responsive,
        Step::AwaitingHex,
        Step::ColorAnalyzed,
        Step::SizeAnalyzed,
        Step::Start,
        Step::AwaitingFeel,
        Step::AwaitingMood,
        Step::AwaitingKeyword,
        Step::AskAnalyzeAfterRecommend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Init => "init",
            Step::Main => "main",
            Step::FontSize => "fontSize",
            Step::FontSizeDetail => "fontSize_detail",
            Step::LineSpacing => "lineSpacing",
            Step::LineSpacingDetail => "lineSpacing_detail",
            Step::FontPairing => "fontPairing",
            Step::FontPairingDetail => "fontPairing_detail",
            Step::Color => "color",
            Step::Checklist => "checklist",
            Step::Responsive => "responsive",
            Step::AwaitingHex => "awaiting_hex",
            Step::ColorAnalyzed => "color_analyzed",
            Step::SizeAnalyzed => "size_analyzed",
            Step::Start => "start",
            Step::AwaitingFeel => "awaiting_feel",
            Step::AwaitingMood => "awaiting_mood",
            Step::AwaitingKeyword => "awaiting_keyword",
            Step::AskAnalyzeAfterRecommend => "ask_analyze_after_recommend",
        }
    }

    /// Parse a wire name; anything unrecognized is the initial step.
    pub fn from_wire(name: &str) -> Step {
        Step::ALL
            .into_iter()
            .find(|step| step.as_str() == name)
            .unwrap_or(Step::Init)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(raw.as_deref().map_or(Step::Init, Step::from_wire))
    }
}

/// Any client value: strings are kept, everything else is ignored
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Text(String),
    Other(IgnoredAny),
}

/// A string field the client may have mangled. Non-strings read as absent.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => Some(text),
        Lenient::Other(_) => None,
    })
}

// ============================================================================
// Wizard answers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feel {
    Soft,
    Hard,
}

impl Feel {
    pub fn as_str(self) -> &'static str {
        match self {
            Feel::Soft => "soft",
            Feel::Hard => "hard",
        }
    }

    fn from_wire(name: &str) -> Option<Feel> {
        match name {
            "soft" => Some(Feel::Soft),
            "hard" => Some(Feel::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Energy {
    Static,
    Dynamic,
}

impl Energy {
    pub fn as_str(self) -> &'static str {
        match self {
            Energy::Static => "static",
            Energy::Dynamic => "dynamic",
        }
    }
}

/// Composite catalog key for a palette group, e.g. `soft-static`
pub fn group_key(feel: Feel, energy: Energy) -> String {
    format!("{}-{}", feel.as_str(), energy.as_str())
}

/// Unknown `feel` values are dropped rather than failing the whole request.
fn lenient_feel<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Feel>, D::Error> {
    let raw = lenient_string(deserializer)?;
    Ok(raw.as_deref().and_then(Feel::from_wire))
}

// ============================================================================
// Conversation State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    #[serde(default)]
    pub step: Step,
    #[serde(
        default,
        deserialize_with = "lenient_feel",
        skip_serializing_if = "Option::is_none"
    )]
    pub feel: Option<Feel>,
    #[serde(
        default,
        rename = "groupKey",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_key: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub hex: Option<String>,
}

impl ConversationState {
    pub fn at(step: Step) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn with_feel(mut self, feel: Feel) -> Self {
        self.feel = Some(feel);
        self
    }

    pub fn with_group_key(mut self, key: impl Into<String>) -> Self {
        self.group_key = Some(key.into());
        self
    }

    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.hex = Some(hex.into());
        self
    }
}

// ============================================================================
// Dispatch Result
// ============================================================================

/// One turn's output: text to show, buttons to offer, state to echo back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub reply: String,
    /// The only inputs the client is expected to send back verbatim
    pub choices: Vec<String>,
    pub next_state: ConversationState,
}

impl DispatchResult {
    pub fn new(reply: impl Into<String>, next_state: ConversationState) -> Self {
        Self {
            reply: reply.into(),
            choices: Vec::new(),
            next_state,
        }
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices.extend(choices.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_wire_names_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_wire(step.as_str()), step);
        }
    }

    #[test]
    fn test_missing_or_unknown_step_is_init() {
        let empty: ConversationState = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.step, Step::Init);

        let null: ConversationState = serde_json::from_value(json!({ "step": null })).unwrap();
        assert_eq!(null.step, Step::Init);

        let unknown: ConversationState =
            serde_json::from_value(json!({ "step": "teleport" })).unwrap();
        assert_eq!(unknown.step, Step::Init);
    }

    #[test]
    fn test_wizard_fields_deserialize() {
        let state: ConversationState = serde_json::from_value(json!({
            "step": "awaiting_keyword",
            "feel": "soft",
            "groupKey": "soft-static"
        }))
        .unwrap();
        assert_eq!(state.step, Step::AwaitingKeyword);
        assert_eq!(state.feel, Some(Feel::Soft));
        assert_eq!(state.group_key.as_deref(), Some("soft-static"));
        assert_eq!(state.hex, None);
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let state: ConversationState = serde_json::from_value(json!({ "step": 5 })).unwrap();
        assert_eq!(state, ConversationState::default());

        let state: ConversationState = serde_json::from_value(json!({
            "step": "main",
            "feel": ["soft"],
            "groupKey": { "feel": "soft" },
            "hex": 123
        }))
        .unwrap();
        assert_eq!(state, ConversationState::at(Step::Main));
    }

    #[test]
    fn test_unknown_feel_is_dropped() {
        let state: ConversationState =
            serde_json::from_value(json!({ "step": "awaiting_mood", "feel": "spiky" })).unwrap();
        assert_eq!(state.feel, None);
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let value = serde_json::to_value(ConversationState::at(Step::FontSizeDetail)).unwrap();
        assert_eq!(value, json!({ "step": "fontSize_detail" }));

        let value = serde_json::to_value(
            ConversationState::at(Step::AskAnalyzeAfterRecommend)
                .with_feel(Feel::Hard)
                .with_group_key("hard-dynamic")
                .with_hex("#D62828"),
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "step": "ask_analyze_after_recommend",
                "feel": "hard",
                "groupKey": "hard-dynamic",
                "hex": "#D62828"
            })
        );
    }

    #[test]
    fn test_flow_from_str() {
        assert_eq!("guide".parse::<Flow>(), Ok(Flow::Guide));
        assert_eq!(" Palette ".parse::<Flow>(), Ok(Flow::Palette));
        assert!("chat".parse::<Flow>().is_err());
        assert_eq!(group_key(Feel::Soft, Energy::Static), "soft-static");
    }
}
