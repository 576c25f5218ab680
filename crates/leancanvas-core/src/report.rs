//! Plain-text rendering of canvas and feedback for the terminal.

use unicode_width::UnicodeWidthStr;

use crate::canvas::CanvasInput;
use crate::requester::FeedbackOutcome;
use crate::types::ScoreRow;

pub const TITLE: &str = "Lean Canvas 자동 작성 & 피드백 시스템";
pub const INPUT_HEADER: &str = "📌 Lean Canvas 입력";
pub const SCORES_HEADER: &str = "📊 평가 점수";
pub const FEEDBACK_HEADER: &str = "🔍 AI 피드백";
pub const ABOUT_HEADER: &str = "ℹ️ 서비스 소개";
pub const ABOUT_TEXT: &str = "이 툴은 Phillip.Hong 에 의해 개발되었습니다.";
pub const SPINNER_TEXT: &str = "AI가 피드백을 생성 중입니다...";

const CATEGORY_COLUMN: &str = "항목";
const SCORE_COLUMN: &str = "점수(1-10)";

/// `8.0` renders as `8`, `7.5` stays `7.5`.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

/// Score table with a header row; only the header when `rows` is empty.
///
/// Columns are padded by terminal display width, so Hangul (two columns per
/// syllable) and ASCII categories line up.
#[must_use]
pub fn format_score_table(rows: &[ScoreRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.category.width())
        .chain(std::iter::once(CATEGORY_COLUMN.width()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("{} | {}\n", pad(CATEGORY_COLUMN, width), SCORE_COLUMN));
    out.push_str(&format!(
        "{}-+-{}\n",
        "-".repeat(width),
        "-".repeat(SCORE_COLUMN.width())
    ));
    for row in rows {
        out.push_str(&format!("{} | {}\n", pad(&row.category, width), format_score(row.score)));
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Result block: score table (successful requests only), then the feedback text.
#[must_use]
pub fn format_outcome(outcome: &FeedbackOutcome) -> String {
    let mut out = String::new();
    if outcome.is_success() {
        out.push_str(SCORES_HEADER);
        out.push('\n');
        out.push_str(&format_score_table(outcome.scores()));
        out.push('\n');
    }
    out.push_str(FEEDBACK_HEADER);
    out.push('\n');
    out.push_str(outcome.text());
    out.push('\n');
    out
}

#[must_use]
pub fn format_canvas(canvas: &CanvasInput) -> String {
    let mut out = String::new();
    out.push_str(INPUT_HEADER);
    out.push('\n');
    for (section, value) in canvas.sections() {
        out.push_str(&format!("\n{}\n", section.label()));
        for line in value.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out
}

#[must_use]
pub fn format_about() -> String {
    format!("{}\n{}\n", ABOUT_HEADER, ABOUT_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeedbackResponse;

    fn row(category: &str, score: f64) -> ScoreRow {
        ScoreRow {
            category: category.to_string(),
            score,
        }
    }

    #[test]
    fn scores_drop_trailing_zero() {
        assert_eq!(format_score(8.0), "8");
        assert_eq!(format_score(7.5), "7.5");
        assert_eq!(format_score(-1.0), "-1");
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let table = format_score_table(&[row("A", 8.0)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("항목"));
        assert!(lines[0].ends_with("점수(1-10)"));
        assert_eq!(lines[2], "A    | 8");
    }

    #[test]
    fn mixed_hangul_and_ascii_rows_align() {
        let table = format_score_table(&[row("문제 정의", 7.0), row("MVP", 5.0)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "항목      | 점수(1-10)");
        assert_eq!(lines[1], "----------+-----------");
        assert_eq!(lines[2], "문제 정의 | 7");
        assert_eq!(lines[3], "MVP       | 5");

        let bar = |line: &str| line.split('|').next().unwrap().width();
        assert!(lines.iter().all(|l| bar(l) == bar(lines[0]) || l.starts_with('-')));
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(format_score_table(&[]).lines().count(), 2);
    }

    #[test]
    fn failed_outcome_has_no_score_section() {
        let failed = FeedbackOutcome::Failed {
            request_id: "r".into(),
            message: "오류 발생: network error: refused".into(),
        };
        let text = format_outcome(&failed);
        assert!(!text.contains(SCORES_HEADER));
        assert!(text.contains("오류 발생: network error: refused"));
    }

    #[test]
    fn successful_outcome_shows_table_before_feedback() {
        let ok = FeedbackOutcome::Success {
            request_id: "r".into(),
            response: FeedbackResponse {
                feedback: "좋은 시작입니다".into(),
                scores: vec![row("문제 정의", 7.0)],
            },
        };
        let text = format_outcome(&ok);
        let scores_at = text.find(SCORES_HEADER).unwrap();
        let feedback_at = text.find(FEEDBACK_HEADER).unwrap();
        assert!(scores_at < feedback_at);
        assert!(text.contains("문제 정의 | 7"));
    }

    #[test]
    fn canvas_lists_all_labels() {
        let text = format_canvas(&CanvasInput::default());
        assert!(text.contains("1.문제 정의"));
        assert!(text.contains("9.수익 모델"));
    }
}
