//! Mood keyword palettes, grouped by `<feel>-<energy>`

use super::{Entry, Group};

fn swatch(keyword: &'static str, hex: &'static str, description: &'static str) -> (&'static str, Entry) {
    (keyword, Entry::new(keyword, description).attr("hex", hex))
}

fn group(title: &'static str, swatches: [(&'static str, Entry); 6]) -> Group {
    swatches
        .into_iter()
        .fold(Group::new(title), |group, (key, entry)| group.child(key, entry))
}

pub(super) fn keyword_groups() -> Group {
    Group::new("무드 키워드 팔레트")
        .child(
            "soft-static",
            group(
                "부드럽고 차분한",
                [
                    swatch("라벤더", "#B8A9C9", "은은하고 편안한 보라"),
                    swatch("세이지", "#9CAF88", "자연스럽고 안정적인 초록"),
                    swatch("샌드", "#D8C3A5", "따뜻한 모래빛 베이지"),
                    swatch("더스티블루", "#8DA9C4", "톤 다운된 차분한 파랑"),
                    swatch("웜그레이", "#A39E93", "중립적이고 포근한 회색"),
                    swatch("크림", "#F3E9D2", "밝고 부드러운 아이보리"),
                ],
            ),
        )
        .child(
            "soft-dynamic",
            group(
                "부드럽고 경쾌한",
                [
                    swatch("피치", "#FFB38A", "생기 있는 복숭아빛"),
                    swatch("코랄핑크", "#F88379", "밝고 사랑스러운 산호색"),
                    swatch("민트", "#98D8C8", "상쾌한 파스텔 민트"),
                    swatch("레몬", "#FFF176", "가볍고 명랑한 노랑"),
                    swatch("스카이", "#87CEEB", "맑은 하늘색"),
                    swatch("라일락", "#C8A2C8", "화사한 연보라"),
                ],
            ),
        )
        .child(
            "hard-static",
            group(
                "강하고 차분한",
                [
                    swatch("네이비", "#1F2A44", "신뢰감 있는 짙은 남색"),
                    swatch("차콜", "#36454F", "묵직한 먹색"),
                    swatch("포레스트", "#2C5F2D", "깊은 숲의 초록"),
                    swatch("버건디", "#800020", "고급스러운 와인색"),
                    swatch("다크브라운", "#4B3621", "안정적인 짙은 갈색"),
                    swatch("슬레이트", "#2F4F4F", "차가운 청회색"),
                ],
            ),
        )
        .child(
            "hard-dynamic",
            group(
                "강하고 역동적인",
                [
                    swatch("레드", "#D62828", "강렬한 빨강"),
                    swatch("일렉트릭블루", "#0057FF", "선명한 전기 파랑"),
                    swatch("오렌지", "#F77F00", "에너지 넘치는 주황"),
                    swatch("마젠타", "#C2185B", "대담한 자홍"),
                    swatch("에메랄드", "#009B77", "선명한 청록"),
                    swatch("퍼플", "#6A0DAD", "개성 있는 진보라"),
                ],
            ),
        )
}
