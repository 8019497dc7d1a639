//! Input intents
//!
//! Routing is keyed on `Intent`, never on raw button text. Each intent owns
//! its display label; `accepted` lists which intents a step understands.

use super::state::{Energy, Feel, Flow, Step};
use crate::catalog::{Catalog, Node};

/// Typed at any step to get back to the initial menu
pub const RESET_LABEL: &str = "처음으로";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    FontSize,
    Spacing,
    Pairing,
    Color,
    Checklist,
    Responsive,
}

impl Topic {
    /// Main menu order. `Responsive` is reachable but not listed.
    pub const MENU: [Topic; 5] = [
        Topic::FontSize,
        Topic::Spacing,
        Topic::Pairing,
        Topic::Color,
        Topic::Checklist,
    ];

    const ALL: [Topic; 6] = [
        Topic::FontSize,
        Topic::Spacing,
        Topic::Pairing,
        Topic::Color,
        Topic::Checklist,
        Topic::Responsive,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Mobile,
    Desktop,
}

impl Device {
    pub fn catalog_key(self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
        }
    }

    pub fn other(self) -> Device {
        match self {
            Device::Mobile => Device::Desktop,
            Device::Desktop => Device::Mobile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingUse {
    Body,
    Heading,
    LongForm,
    Mobile,
}

impl SpacingUse {
    pub const ALL: [SpacingUse; 4] = [
        SpacingUse::Body,
        SpacingUse::Heading,
        SpacingUse::LongForm,
        SpacingUse::Mobile,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Reset,
    Topic(Topic),
    Device(Device),
    SpacingUse(SpacingUse),
    /// A font pairing style, by catalog key
    Pairing {
        key: &'static str,
        title: &'static str,
    },
    AnotherPairing,
    AnalyzeHex,
    AnotherColor,
    Retry,
    AnotherSize,
    SpacingGuide,
    HaveHex,
    Recommend,
    Feel(Feel),
    Energy(Energy),
    AnalyzeRecommended,
    RecommendAgain,
}

impl Intent {
    pub fn label(self) -> &'static str {
        match self {
            Intent::Reset => RESET_LABEL,
            Intent::Topic(Topic::FontSize) => "폰트 크기 가이드",
            Intent::Topic(Topic::Spacing) => "행간/자간 설정",
            Intent::Topic(Topic::Pairing) => "폰트 조합 추천",
            Intent::Topic(Topic::Color) => "색상과 가독성",
            Intent::Topic(Topic::Checklist) => "접근성 체크리스트",
            Intent::Topic(Topic::Responsive) => "반응형 설계 팁",
            Intent::Device(Device::Mobile) => "모바일 환경",
            Intent::Device(Device::Desktop) => "데스크톱 환경",
            Intent::SpacingUse(SpacingUse::Body) => "본문 텍스트",
            Intent::SpacingUse(SpacingUse::Heading) => "제목 텍스트",
            Intent::SpacingUse(SpacingUse::LongForm) => "긴 문서",
            Intent::SpacingUse(SpacingUse::Mobile) => "모바일 최적화",
            Intent::Pairing { title, .. } => title,
            Intent::AnotherPairing => "다른 조합 보기",
            Intent::AnalyzeHex => "헥사코드 분석",
            Intent::AnotherColor => "다른 색상 분석",
            Intent::Retry => "다시 입력",
            Intent::AnotherSize => "다른 크기 분석",
            Intent::SpacingGuide => "행간 가이드",
            Intent::HaveHex => "네, 있어요",
            Intent::Recommend => "아니요, 추천해주세요",
            Intent::Feel(Feel::Soft) => "부드러운 느낌 (soft)",
            Intent::Feel(Feel::Hard) => "강렬한 느낌 (hard)",
            Intent::Energy(Energy::Static) => "차분한 (static)",
            Intent::Energy(Energy::Dynamic) => "역동적인 (dynamic)",
            Intent::AnalyzeRecommended => "네, 분석해주세요",
            Intent::RecommendAgain => "다른 색 추천받기",
        }
    }

    /// Classify `message` for `step`. `None` means the step's table has no
    /// entry for it; free-text steps then get a chance to classify it.
    pub fn parse(flow: Flow, step: Step, message: &str, catalog: &Catalog) -> Option<Intent> {
        if message == RESET_LABEL {
            return Some(Intent::Reset);
        }

        if flow == Flow::Guide {
            let topic = Topic::ALL
                .into_iter()
                .map(Intent::Topic)
                .find(|intent| intent.label() == message);
            if topic.is_some() {
                return topic;
            }
        }

        if let Some(intent) = accepted(flow, step)
            .iter()
            .copied()
            .find(|intent| intent.label() == message)
        {
            return Some(intent);
        }

        match (flow, step) {
            (Flow::Guide, Step::FontPairing) => pairing(message, catalog),
            (Flow::Palette, Step::AwaitingFeel) => {
                let lower = message.to_lowercase();
                if lower.contains("soft") {
                    Some(Intent::Feel(Feel::Soft))
                } else if lower.contains("hard") {
                    Some(Intent::Feel(Feel::Hard))
                } else {
                    None
                }
            }
            (Flow::Palette, Step::AwaitingMood) => {
                let lower = message.to_lowercase();
                if lower.contains("static") {
                    Some(Intent::Energy(Energy::Static))
                } else if lower.contains("dynamic") {
                    Some(Intent::Energy(Energy::Dynamic))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Exact-label intents each step understands, beyond reset and (in the
/// guide flow) the topic menu.
fn accepted(flow: Flow, step: Step) -> &'static [Intent] {
    const DEVICES: &[Intent] = &[
        Intent::Device(Device::Mobile),
        Intent::Device(Device::Desktop),
    ];
    const SPACING_USES: &[Intent] = &[
        Intent::SpacingUse(SpacingUse::Body),
        Intent::SpacingUse(SpacingUse::Heading),
        Intent::SpacingUse(SpacingUse::LongForm),
        Intent::SpacingUse(SpacingUse::Mobile),
    ];

    match (flow, step) {
        (Flow::Guide, Step::FontSize | Step::FontSizeDetail | Step::Responsive) => DEVICES,
        (Flow::Guide, Step::LineSpacing | Step::LineSpacingDetail) => SPACING_USES,
        (Flow::Guide, Step::FontPairingDetail) => &[Intent::AnotherPairing],
        (Flow::Guide, Step::Color) => &[Intent::AnalyzeHex],
        (Flow::Guide, Step::ColorAnalyzed) => &[Intent::AnotherColor],
        (Flow::Guide, Step::SizeAnalyzed) => &[Intent::AnotherSize, Intent::SpacingGuide],
        (_, Step::AwaitingHex) => &[Intent::Retry],
        (Flow::Palette, Step::Start) => &[Intent::HaveHex, Intent::Recommend],
        (Flow::Palette, Step::AskAnalyzeAfterRecommend) => {
            &[Intent::AnalyzeRecommended, Intent::RecommendAgain]
        }
        (Flow::Palette, Step::ColorAnalyzed) => &[Intent::AnotherColor, Intent::RecommendAgain],
        (Flow::Palette, Step::SizeAnalyzed) => &[Intent::AnotherSize],
        _ => &[],
    }
}

/// Pairing styles match their Korean title exactly, or their English key
/// case-insensitively.
fn pairing(message: &str, catalog: &Catalog) -> Option<Intent> {
    let group = catalog.group(&["fontPairing"]).ok()?;
    let lower = message.to_lowercase();
    group.children().find_map(|(key, node)| match node {
        Node::Entry(entry) if entry.title == message || key == lower => Some(Intent::Pairing {
            key,
            title: entry.title,
        }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flow: Flow, step: Step, message: &str) -> Option<Intent> {
        Intent::parse(flow, step, message, Catalog::global())
    }

    #[test]
    fn test_reset_recognized_everywhere() {
        for step in Step::ALL {
            assert_eq!(parse(Flow::Guide, step, RESET_LABEL), Some(Intent::Reset));
            assert_eq!(parse(Flow::Palette, step, RESET_LABEL), Some(Intent::Reset));
        }
    }

    #[test]
    fn test_topics_are_global_in_guide_flow_only() {
        assert_eq!(
            parse(Flow::Guide, Step::AwaitingHex, "폰트 크기 가이드"),
            Some(Intent::Topic(Topic::FontSize))
        );
        assert_eq!(
            parse(Flow::Guide, Step::Checklist, "반응형 설계 팁"),
            Some(Intent::Topic(Topic::Responsive))
        );
        assert_eq!(parse(Flow::Palette, Step::Start, "폰트 크기 가이드"), None);
    }

    #[test]
    fn test_same_label_depends_on_step() {
        assert_eq!(
            parse(Flow::Guide, Step::FontSize, "모바일 환경"),
            Some(Intent::Device(Device::Mobile))
        );
        assert_eq!(parse(Flow::Guide, Step::LineSpacing, "모바일 환경"), None);
        assert_eq!(parse(Flow::Guide, Step::Main, "헥사코드 분석"), None);
        assert_eq!(
            parse(Flow::Guide, Step::Color, "헥사코드 분석"),
            Some(Intent::AnalyzeHex)
        );
    }

    #[test]
    fn test_menu_labels_match_exactly() {
        assert_eq!(parse(Flow::Palette, Step::Start, "네, 있어요 "), None);
        assert_eq!(parse(Flow::Guide, Step::Color, "헥사코드분석"), None);
    }

    #[test]
    fn test_pairing_matches_title_or_key() {
        let expected = Some(Intent::Pairing {
            key: "modern",
            title: "모던한",
        });
        assert_eq!(parse(Flow::Guide, Step::FontPairing, "모던한"), expected);
        assert_eq!(parse(Flow::Guide, Step::FontPairing, "Modern"), expected);
        assert_eq!(parse(Flow::Guide, Step::FontPairing, "MODERN"), expected);
        assert_eq!(parse(Flow::Guide, Step::FontPairing, "brutalist"), None);
        assert_eq!(parse(Flow::Guide, Step::Main, "modern"), None);
    }

    #[test]
    fn test_feel_and_energy_substring_match() {
        assert_eq!(
            parse(Flow::Palette, Step::AwaitingFeel, "부드러운 느낌 (soft)"),
            Some(Intent::Feel(Feel::Soft))
        );
        assert_eq!(
            parse(Flow::Palette, Step::AwaitingFeel, "HARD please"),
            Some(Intent::Feel(Feel::Hard))
        );
        assert_eq!(parse(Flow::Palette, Step::AwaitingFeel, "medium"), None);
        assert_eq!(
            parse(Flow::Palette, Step::AwaitingMood, "역동적인 (dynamic)"),
            Some(Intent::Energy(Energy::Dynamic))
        );
        assert_eq!(parse(Flow::Guide, Step::AwaitingMood, "static"), None);
    }

    #[test]
    fn test_labels_are_unique_per_step() {
        for flow in [Flow::Guide, Flow::Palette] {
            for step in Step::ALL {
                let labels: Vec<&str> = accepted(flow, step).iter().map(|i| i.label()).collect();
                let mut deduped = labels.clone();
                deduped.sort_unstable();
                deduped.dedup();
                assert_eq!(labels.len(), deduped.len(), "{flow}/{step}");
                assert!(!labels.contains(&RESET_LABEL));
            }
        }
    }
}
