use crate::canvas::{CanvasInput, CanvasSection};

pub(crate) const ROLE_INSTRUCTION: &str = "당신은 Lean Canvas 전문가입니다. 사용자의 입력을 평가하고, 더 나은 제안을 제공해주고 각 섹션별 점수(1-10)와 개선할 수 있는 구체적인 피드백을 제공해주세요.";

/// Evaluation criterion per section, in form order.
fn criterion(section: CanvasSection) -> &'static str {
    match section {
        CanvasSection::Problem => {
            "입력된 문제가 명확하고 현실적인가? 원인은 무엇인가? 부족한 점이 있다면 보완할 방법을 제안하세요."
        }
        CanvasSection::Solution => {
            "해결책이 효과적이며 실행 가능한가? 개선이 필요하다면 어떤 점을 수정해야 하는지 설명하세요."
        }
        CanvasSection::KeyMetrics => {
            "측정 가능한 목표가 적절한가? 부족하다면 추가할 KPI를 추천하세요."
        }
        CanvasSection::UniqueValue => {
            "차별성이 충분한가? 경쟁력 강화를 위한 추가적인 제안을 포함하세요."
        }
        CanvasSection::UnfairAdvantage => {
            "경쟁자가 쉽게 모방할 수 없는 요소인가? 부족한 부분을 어떻게 보완할 수 있는지 설명하세요."
        }
        CanvasSection::CustomerSegment => {
            "타겟 고객이 충분히 구체적인가? 고객 페르소나를 설정하여 더 정교한 타겟팅이 되도록 한다. 추가할 세그먼트가 있다면 제안하세요."
        }
        CanvasSection::Channels => {
            "고객에게 접근하는 방법이 효과적인가? 더 나은 전략이 있다면 제안하세요."
        }
        CanvasSection::CostStructure => {
            "주요 비용 요소가 현실적인가? 비용 절감 방안을 제안하세요."
        }
        CanvasSection::RevenueStreams => {
            "수익 창출 방식이 타당한가? 추가적인 수익 기회를 분석하여 제안하세요."
        }
    }
}

/// Build the evaluation prompt: role, rubric, then the nine values verbatim.
///
/// Values are inserted as-is; placeholder text is submitted unchanged when a
/// field was never edited.
pub fn build_prompt(canvas: &CanvasInput) -> String {
    let mut prompt = String::new();
    prompt.push_str(ROLE_INSTRUCTION);
    prompt.push_str("\n평가 기준:\n");
    for section in CanvasSection::ALL {
        prompt.push_str(&format!("- {}: {}\n", section.title(), criterion(section)));
    }
    prompt.push_str("\n사용자 입력:\n");
    for (section, value) in canvas.sections() {
        prompt.push_str(&format!("{}: {}\n", section.title(), value));
    }
    prompt
}
