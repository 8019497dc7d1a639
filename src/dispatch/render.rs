//! Reply builders
//!
//! Each function produces one complete turn: reply text, the buttons to
//! offer next, and the step those buttons belong to.

use super::classify::{SizeToken, SizeUnit, SizeVerdict};
use super::intent::{Device, Intent, SpacingUse, Topic};
use super::state::{ConversationState, DispatchResult, Energy, Feel, Flow, Step};
use crate::catalog::{Catalog, CatalogError, Node};
use crate::contrast::{self, HexColor, AAA_NORMAL, AA_LARGE, AA_NORMAL};

/// Backgrounds every color is checked against, in display order
const REFERENCE_BACKGROUNDS: [(HexColor, &str); 3] = [
    (HexColor::WHITE, "흰 배경"),
    (HexColor::BLACK, "검은 배경"),
    (HexColor::LIGHT_GRAY, "밝은 회색 배경"),
];

fn labels<I: IntoIterator<Item = Intent>>(intents: I) -> impl Iterator<Item = &'static str> {
    intents.into_iter().map(Intent::label)
}

fn verdict(passes: bool) -> &'static str {
    if passes {
        "✅ 사용 가능"
    } else {
        "❌ 사용 불가"
    }
}

// ============================================================================
// Menus
// ============================================================================

pub fn initial_menu(flow: Flow) -> DispatchResult {
    match flow {
        Flow::Guide => main_menu(),
        Flow::Palette => start_menu(),
    }
}

fn main_menu() -> DispatchResult {
    DispatchResult::new(
        "웹 타이포그래피 가이드에 오신 것을 환영합니다! 📝\n\n무엇을 도와드릴까요?",
        ConversationState::at(Step::Main),
    )
    .with_choices(labels(Topic::MENU.map(Intent::Topic)))
}

fn start_menu() -> DispatchResult {
    DispatchResult::new(
        "안녕하세요! 웹 접근성 색상 컨설턴트입니다. 🎨\n\n분석하고 싶은 텍스트 색상의 헥사코드가 있으신가요?",
        ConversationState::at(Step::Start),
    )
    .with_choices(labels([Intent::HaveHex, Intent::Recommend]))
}

pub fn font_size_menu() -> DispatchResult {
    DispatchResult::new(
        "어떤 환경의 폰트 크기를 확인하시겠어요?",
        ConversationState::at(Step::FontSize),
    )
    .with_choices(labels([
        Intent::Device(Device::Mobile),
        Intent::Device(Device::Desktop),
        Intent::Topic(Topic::Responsive),
    ]))
}

pub fn spacing_menu() -> DispatchResult {
    DispatchResult::new(
        "행간과 자간 설정을 도와드릴게요. 어떤 용도인가요?",
        ConversationState::at(Step::LineSpacing),
    )
    .with_choices(labels(SpacingUse::ALL.map(Intent::SpacingUse)))
}

pub fn pairing_menu(catalog: &Catalog) -> Result<DispatchResult, CatalogError> {
    let titles: Vec<&str> = catalog
        .group(&["fontPairing"])?
        .children()
        .filter_map(|(_, node)| match node {
            Node::Entry(entry) => Some(entry.title),
            Node::Group(_) => None,
        })
        .collect();

    Ok(DispatchResult::new(
        "어떤 느낌의 폰트 조합을 원하시나요?",
        ConversationState::at(Step::FontPairing),
    )
    .with_choices(titles))
}

// ============================================================================
// Typography guides
// ============================================================================

pub fn device_guide(catalog: &Catalog, device: Device) -> Result<DispatchResult, CatalogError> {
    let sizes = catalog.group(&["fontSize", device.catalog_key()])?;

    let mut reply = match device {
        Device::Mobile => String::from("📱 **모바일 웹 타이포그래피 가이드**\n\n"),
        Device::Desktop => String::from("🖥️ **데스크톱 웹 타이포그래피 가이드**\n\n"),
    };

    for (_, node) in sizes.children() {
        let Node::Entry(entry) = node else { continue };
        reply.push_str(&format!(
            "**{}**\n• 최소: {}\n• 권장: {}\n• 용도: {}\n\n",
            entry.title,
            entry.get("min").unwrap_or("-"),
            entry.get("recommended").unwrap_or("-"),
            entry.description
        ));
    }

    reply.push_str("💡 **핵심 원칙**\n");
    reply.push_str(match device {
        Device::Mobile => "• 본문은 반드시 16px 이상\n• 터치 타겟은 44x44px 이상\n• 충분한 행간 확보 (1.5 이상)",
        Device::Desktop => "• 본문 최소 16px 유지\n• 제목 계층 명확히 구분\n• 한 줄에 45-75자 권장",
    });

    Ok(DispatchResult::new(reply, ConversationState::at(Step::FontSizeDetail)).with_choices(
        labels([
            Intent::Device(device.other()),
            Intent::Topic(Topic::Spacing),
            Intent::Reset,
        ]),
    ))
}

/// Which presets and tips each spacing use draws on
struct SpacingRecipe {
    title: &'static str,
    line_heights: &'static [&'static str],
    letter_spacings: &'static [&'static str],
    tips: &'static str,
}

fn spacing_recipe(usage: SpacingUse) -> SpacingRecipe {
    match usage {
        SpacingUse::Body => SpacingRecipe {
            title: "📝 **본문 텍스트 행간/자간 가이드**",
            line_heights: &["normal", "relaxed", "loose"],
            letter_spacings: &["normal", "wide", "wider"],
            tips: "**단락 간격**\n• 최소: 1.5em\n• 권장: 2em",
        },
        SpacingUse::Heading => SpacingRecipe {
            title: "🔠 **제목 텍스트 행간/자간 가이드**",
            line_heights: &["dense", "normal"],
            letter_spacings: &["tight", "normal"],
            tips: "**팁**\n• 글자가 클수록 행간은 좁게\n• 두 줄 이상 제목은 1.2~1.3 권장",
        },
        SpacingUse::LongForm => SpacingRecipe {
            title: "📚 **긴 문서 행간/자간 가이드**",
            line_heights: &["relaxed", "loose"],
            letter_spacings: &["normal", "wider"],
            tips: "**팁**\n• 한 줄에 45-75자\n• 단락 간격 2em 이상으로 피로감 감소",
        },
        SpacingUse::Mobile => SpacingRecipe {
            title: "📱 **모바일 최적화 행간/자간 가이드**",
            line_heights: &["normal", "relaxed"],
            letter_spacings: &["normal", "wide"],
            tips: "**팁**\n• 좁은 화면에서는 행간을 조금 더 넉넉하게\n• 터치 타겟은 44x44px 이상",
        },
    }
}

pub fn spacing_guide(catalog: &Catalog, usage: SpacingUse) -> Result<DispatchResult, CatalogError> {
    let recipe = spacing_recipe(usage);
    let mut reply = format!("{}\n\n**행간 (Line Height)**\n", recipe.title);
    for key in recipe.line_heights {
        let preset = catalog.entry(&["lineHeight", *key])?;
        reply.push_str(&format!(
            "• {}: {} ({})\n",
            preset.title,
            preset.get("value").unwrap_or("-"),
            preset.description
        ));
    }

    reply.push_str("\n**자간 (Letter Spacing)**\n");
    for key in recipe.letter_spacings {
        let preset = catalog.entry(&["letterSpacing", *key])?;
        reply.push_str(&format!(
            "• {}: {}\n",
            preset.title,
            preset.get("value").unwrap_or("-")
        ));
    }
    reply.push('\n');
    reply.push_str(recipe.tips);

    let others = SpacingUse::ALL
        .into_iter()
        .filter(|other| *other != usage)
        .map(Intent::SpacingUse)
        .chain([Intent::Reset]);

    Ok(DispatchResult::new(reply, ConversationState::at(Step::LineSpacingDetail))
        .with_choices(labels(others)))
}

pub fn pairing_card(catalog: &Catalog, key: &str) -> Result<DispatchResult, CatalogError> {
    let pairing = catalog.entry(&["fontPairing", key])?;
    let heading = pairing.get("heading").unwrap_or("sans-serif");
    let body = pairing.get("body").unwrap_or("sans-serif");

    let reply = format!(
        "🎨 **{title} 폰트 조합**\n\n\
         **제목용 폰트**\n{heading}\n\n\
         **본문용 폰트**\n{body}\n\n\
         **특징**: {description}\n\n\
         **CSS 예시**\n\
         ```css\n\
         h1, h2, h3 {{\n  font-family: {heading};\n}}\n\
         body, p {{\n  font-family: {body};\n}}\n\
         ```",
        title = pairing.title,
        description = pairing.description,
    );

    Ok(
        DispatchResult::new(reply, ConversationState::at(Step::FontPairingDetail)).with_choices(
            labels([
                Intent::AnotherPairing,
                Intent::Topic(Topic::FontSize),
                Intent::Reset,
            ]),
        ),
    )
}

pub fn color_overview(catalog: &Catalog) -> Result<DispatchResult, CatalogError> {
    let mut reply = String::from("🎨 **색상과 타이포그래피 가독성**\n\n");
    for (_, node) in catalog.group(&["colorTypography"])?.children() {
        let Node::Entry(preset) = node else { continue };
        reply.push_str(&format!(
            "**{}**\n• 배경: {}\n• 텍스트: {}\n• 명도비: {}\n\n",
            preset.title,
            preset.get("background").unwrap_or("-"),
            preset.get("text").unwrap_or("-"),
            preset.get("ratio").unwrap_or("-"),
        ));
    }
    reply.push_str(&format!(
        "💡 **WCAG 기준**\n• 일반 텍스트: {AA_NORMAL}:1 이상\n• 큰 텍스트 (18pt+): {AA_LARGE}:1 이상\n• AAA 등급: {AAA_NORMAL}:1 이상"
    ));

    Ok(DispatchResult::new(reply, ConversationState::at(Step::Color)).with_choices(labels([
        Intent::AnalyzeHex,
        Intent::Topic(Topic::FontSize),
        Intent::Reset,
    ])))
}

pub fn checklist() -> DispatchResult {
    let reply = "✅ **웹 타이포그래피 접근성 체크리스트**\n\n\
                 **필수 항목**\n\
                 ☐ 본문 최소 16px\n\
                 ☐ 행간 1.5 이상\n\
                 ☐ 명도비 4.5:1 이상\n\
                 ☐ 확대 200% 시 가로 스크롤 없음\n\
                 ☐ 사용자 폰트 크기 조절 가능\n\n\
                 **권장 항목**\n\
                 ☐ 자간 0.12em 이상\n\
                 ☐ 단락 간격 2em\n\
                 ☐ 한 줄 45-75자\n\
                 ☐ 제목 계층 구조 명확\n\
                 ☐ 다크모드 지원";

    DispatchResult::new(reply, ConversationState::at(Step::Checklist)).with_choices(labels([
        Intent::Topic(Topic::FontSize),
        Intent::Topic(Topic::Spacing),
        Intent::Reset,
    ]))
}

pub fn responsive_tips() -> DispatchResult {
    let reply = "📱💻 **반응형 타이포그래피 설계**\n\n\
                 **유동적 크기 (Fluid Typography)**\n\
                 ```css\n\
                 /* clamp(최소, 선호, 최대) */\n\
                 h1 {\n  font-size: clamp(1.5rem, 4vw, 3rem);\n}\n\
                 p {\n  font-size: clamp(1rem, 2vw, 1.25rem);\n}\n\
                 ```\n\n\
                 **브레이크포인트별 설정**\n\
                 • 모바일 (<768px): 16px\n\
                 • 태블릿 (768-1024px): 17px\n\
                 • 데스크톱 (>1024px): 18px\n\n\
                 **rem 단위 활용**\n\
                 • html { font-size: 100%; }\n\
                 • 1rem = 16px 기준\n\
                 • 미디어쿼리로 html font-size 조절";

    DispatchResult::new(reply, ConversationState::at(Step::Responsive)).with_choices(labels([
        Intent::Device(Device::Mobile),
        Intent::Device(Device::Desktop),
        Intent::Reset,
    ]))
}

// ============================================================================
// Free-text analysis
// ============================================================================

pub fn hex_prompt() -> DispatchResult {
    DispatchResult::new(
        "텍스트 색상의 헥사코드를 입력해주세요. (예: #212529)\n폰트 크기(예: 16px, 1.25rem)를 입력하면 크기도 분석해 드려요.",
        ConversationState::at(Step::AwaitingHex),
    )
}

pub fn hex_reprompt() -> DispatchResult {
    DispatchResult::new(
        "올바른 헥사코드 형식이 아닙니다. #000000 형식으로 입력해주세요.",
        ConversationState::at(Step::AwaitingHex),
    )
    .with_choices(labels([Intent::Retry, Intent::Reset]))
}

pub fn contrast_analysis(flow: Flow, color: HexColor) -> DispatchResult {
    let backgrounds = REFERENCE_BACKGROUNDS.map(|(background, _)| background);
    let reports = contrast::evaluate(color, &backgrounds);

    let mut reply = format!("🎨 **{color} 타이포그래피 분석**\n\n");
    for (report, (_, name)) in reports.iter().zip(REFERENCE_BACKGROUNDS) {
        reply.push_str(&format!(
            "**{name} ({})**\n• 명도비: {:.2}:1\n• 일반 텍스트: {}\n",
            report.background,
            report.ratio,
            verdict(report.meets_aa)
        ));
        if report.background == HexColor::WHITE {
            reply.push_str(&format!(
                "• 큰 텍스트(18pt+): {}\n",
                verdict(report.meets_aa_large)
            ));
        }
        reply.push('\n');
    }

    reply.push_str("💡 **추천 사용법**\n");
    let on_white = reports.first().map_or(1.0, |report| report.ratio);
    reply.push_str(if on_white >= AAA_NORMAL {
        "• 모든 크기의 텍스트에 우수함\n• 본문 텍스트 최적"
    } else if on_white >= AA_NORMAL {
        "• 일반 본문 텍스트 사용 가능\n• 중요 정보는 굵게 표시 권장"
    } else if on_white >= AA_LARGE {
        "• 18pt 이상 큰 텍스트만 사용\n• 제목이나 강조 텍스트용"
    } else {
        "• 텍스트 색상으로 부적합\n• 배경색이나 장식용으로만 사용"
    });

    let follow_up = match flow {
        Flow::Guide => Intent::Topic(Topic::FontSize),
        Flow::Palette => Intent::RecommendAgain,
    };

    DispatchResult::new(
        reply,
        ConversationState::at(Step::ColorAnalyzed).with_hex(color.to_string()),
    )
    .with_choices(labels([Intent::AnotherColor, follow_up, Intent::Reset]))
}

pub fn size_verdict(flow: Flow, size: SizeToken) -> DispatchResult {
    let mut reply = format!("📏 **{size} 폰트 크기 분석**\n\n");
    if size.unit != SizeUnit::Px {
        reply.push_str(&format!("(기준 16px → {}px)\n\n", size.px()));
    }
    reply.push_str(match size.verdict() {
        SizeVerdict::TooSmall => {
            "❌ **너무 작음**: 14px 미만은 가독성이 매우 떨어집니다.\n💡 최소 16px 이상 사용을 권장합니다."
        }
        SizeVerdict::Borderline => {
            "⚠️ **주의 필요**: 본문에는 16px 이상을 권장합니다.\n💡 보조 텍스트로만 제한적으로 사용하세요."
        }
        SizeVerdict::Body => {
            "✅ **적절함**: 본문 텍스트로 적합합니다.\n💡 행간을 1.5~1.6으로 설정하면 더 좋습니다."
        }
        SizeVerdict::Heading => "✅ **제목 적합**: 소제목이나 강조 텍스트로 좋습니다.",
        SizeVerdict::Display => "✅ **대제목 적합**: 페이지 제목으로 활용하기 좋습니다.",
    });

    let choices: &[Intent] = match flow {
        Flow::Guide => &[Intent::AnotherSize, Intent::SpacingGuide, Intent::Reset],
        Flow::Palette => &[Intent::AnotherSize, Intent::Reset],
    };

    DispatchResult::new(reply, ConversationState::at(Step::SizeAnalyzed))
        .with_choices(labels(choices.iter().copied()))
}

// ============================================================================
// Palette wizard
// ============================================================================

pub fn feel_question() -> DispatchResult {
    DispatchResult::new(
        "좋아요! 색상을 추천해 드릴게요. 🎨\n\n어떤 느낌의 색상을 원하시나요?",
        ConversationState::at(Step::AwaitingFeel),
    )
    .with_choices(labels([
        Intent::Feel(Feel::Soft),
        Intent::Feel(Feel::Hard),
        Intent::Reset,
    ]))
}

pub fn mood_question(feel: Feel) -> DispatchResult {
    DispatchResult::new(
        "분위기는 어떤 쪽에 가까운가요?",
        ConversationState::at(Step::AwaitingMood).with_feel(feel),
    )
    .with_choices(labels([
        Intent::Energy(Energy::Static),
        Intent::Energy(Energy::Dynamic),
        Intent::Reset,
    ]))
}

/// Keyword choices for a palette group. `retry` prefixes a gentle re-prompt.
pub fn keyword_question(
    catalog: &Catalog,
    feel: Feel,
    group_key: &str,
    retry: bool,
) -> Result<DispatchResult, CatalogError> {
    let group = catalog.group(&["palette", group_key])?;
    let keywords = catalog.keys(&["palette", group_key])?;

    let mut reply = String::new();
    if retry {
        reply.push_str("목록에 있는 키워드 중에서 골라주세요.\n\n");
    }
    reply.push_str(&format!(
        "**{}** 분위기의 키워드를 골라주세요.",
        group.title
    ));

    Ok(DispatchResult::new(
        reply,
        ConversationState::at(Step::AwaitingKeyword)
            .with_feel(feel)
            .with_group_key(group_key),
    )
    .with_choices(keywords.into_iter().chain([Intent::Reset.label()])))
}

pub fn recommendation(
    catalog: &Catalog,
    feel: Feel,
    group_key: &str,
    keyword: &str,
) -> Result<DispatchResult, CatalogError> {
    let swatch = catalog.entry(&["palette", group_key, keyword])?;
    let hex = swatch.get("hex").unwrap_or_default();

    let reply = format!(
        "🎨 **{}** 키워드에 어울리는 색상은 **{hex}** 입니다.\n{}\n\n이 색상을 텍스트에 쓸 때의 명도 대비를 분석해 드릴까요?",
        swatch.title, swatch.description
    );

    Ok(DispatchResult::new(
        reply,
        ConversationState::at(Step::AskAnalyzeAfterRecommend)
            .with_feel(feel)
            .with_group_key(group_key)
            .with_hex(hex),
    )
    .with_choices(labels([
        Intent::AnalyzeRecommended,
        Intent::RecommendAgain,
        Intent::Reset,
    ])))
}
