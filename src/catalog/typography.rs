//! Web typography reference data

use super::{Entry, Group};

fn size(label: &'static str, min: &'static str, recommended: &'static str, usage: &'static str) -> Entry {
    Entry::new(label, usage)
        .attr("min", min)
        .attr("recommended", recommended)
}

pub(super) fn font_sizes() -> Group {
    let mobile = Group::new("모바일 환경")
        .child("body", size("BODY", "16px", "16-18px", "WCAG 권장 최소 크기"))
        .child("h1", size("H1", "24px", "28-32px", "페이지 제목"))
        .child("h2", size("H2", "20px", "22-24px", "섹션 제목"))
        .child("h3", size("H3", "18px", "18-20px", "소제목"))
        .child("caption", size("CAPTION", "14px", "14px", "보조 텍스트 (최소한으로 사용)"));

    let desktop = Group::new("데스크톱 환경")
        .child("body", size("BODY", "16px", "16-18px", "본문 텍스트"))
        .child("h1", size("H1", "32px", "36-48px", "페이지 제목"))
        .child("h2", size("H2", "24px", "28-32px", "섹션 제목"))
        .child("h3", size("H3", "20px", "20-24px", "소제목"))
        .child("caption", size("CAPTION", "14px", "14-16px", "보조 텍스트"));

    Group::new("폰트 크기 체계")
        .child("mobile", mobile)
        .child("desktop", desktop)
}

pub(super) fn line_heights() -> Group {
    let preset = |value, usage, wcag| Entry::new(usage, wcag).attr("value", value);
    Group::new("행간 (line-height)")
        .child("dense", preset("1.2", "제목, 헤딩", "최소값"))
        .child("normal", preset("1.5", "일반 본문", "AA 권장"))
        .child("relaxed", preset("1.6", "긴 본문", "AAA 권장"))
        .child("loose", preset("1.8", "가독성 최우선", "접근성 우수"))
}

pub(super) fn letter_spacings() -> Group {
    let preset = |value, usage| Entry::new(usage, "").attr("value", value);
    Group::new("자간 (letter-spacing)")
        .child("tight", preset("-0.025em", "제목, 굵은 글꼴"))
        .child("normal", preset("0", "일반 본문"))
        .child("wide", preset("0.025em", "작은 글씨, 대문자"))
        .child("wider", preset("0.12em", "WCAG 최소 권장"))
        .child("widest", preset("0.15em", "WCAG 최적 권장"))
}

pub(super) fn font_pairings() -> Group {
    let pairing = |title, heading, body, description| {
        Entry::new(title, description)
            .attr("heading", heading)
            .attr("body", body)
    };
    Group::new("폰트 조합")
        .child(
            "professional",
            pairing(
                "프로페셔널",
                "Pretendard, -apple-system, sans-serif",
                "Pretendard, -apple-system, sans-serif",
                "깔끔하고 전문적인 느낌",
            ),
        )
        .child(
            "friendly",
            pairing(
                "친근한",
                "\"Noto Sans KR\", sans-serif",
                "\"Noto Sans KR\", sans-serif",
                "부드럽고 친근한 느낌",
            ),
        )
        .child(
            "modern",
            pairing(
                "모던한",
                "Inter, -apple-system, sans-serif",
                "Inter, -apple-system, sans-serif",
                "현대적이고 깨끗한 느낌",
            ),
        )
        .child(
            "classic",
            pairing(
                "클래식",
                "\"Nanum Myeongjo\", serif",
                "\"Noto Serif KR\", serif",
                "신뢰감 있는 전통적 느낌",
            ),
        )
}

/// Text/background presets. Ratios are precomputed for display only.
pub(super) fn color_presets() -> Group {
    let preset = |usage, background, text, ratio| {
        Entry::new(usage, "")
            .attr("background", background)
            .attr("text", text)
            .attr("ratio", ratio)
    };
    Group::new("색상과 타이포그래피 조합")
        .child("high-contrast", preset("최고 가독성", "#FFFFFF", "#000000", "21:1"))
        .child("comfortable", preset("편안한 읽기", "#FFFFFF", "#212529", "15.43:1"))
        .child("soft", preset("부드러운 느낌", "#F8F9FA", "#495057", "7.76:1"))
}
