//! The nine Lean Canvas sections and the in-memory form snapshot.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One of the nine fixed Lean Canvas sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasSection {
    Problem,
    Solution,
    KeyMetrics,
    UniqueValue,
    UnfairAdvantage,
    CustomerSegment,
    Channels,
    CostStructure,
    RevenueStreams,
}

impl CanvasSection {
    pub const ALL: [CanvasSection; 9] = [
        CanvasSection::Problem,
        CanvasSection::Solution,
        CanvasSection::KeyMetrics,
        CanvasSection::UniqueValue,
        CanvasSection::UnfairAdvantage,
        CanvasSection::CustomerSegment,
        CanvasSection::Channels,
        CanvasSection::CostStructure,
        CanvasSection::RevenueStreams,
    ];

    /// Field key used in canvas files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::KeyMetrics => "key_metrics",
            Self::UniqueValue => "unique_value",
            Self::UnfairAdvantage => "unfair_advantage",
            Self::CustomerSegment => "customer_segment",
            Self::Channels => "channels",
            Self::CostStructure => "cost_structure",
            Self::RevenueStreams => "revenue_streams",
        }
    }

    /// Section name as it appears in the prompt (no number prefix).
    pub fn title(self) -> &'static str {
        match self {
            Self::Problem => "문제 정의",
            Self::Solution => "솔루션",
            Self::KeyMetrics => "핵심 지표",
            Self::UniqueValue => "경쟁력",
            Self::UnfairAdvantage => "차별점",
            Self::CustomerSegment => "고객 세그먼트",
            Self::Channels => "채널",
            Self::CostStructure => "비용 구조",
            Self::RevenueStreams => "수익 모델",
        }
    }

    /// Numbered form label, e.g. `1.문제 정의`.
    pub fn label(self) -> String {
        format!("{}.{}", self.number(), self.title())
    }

    /// 1-based position on the form.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Guidance text the input starts with.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Problem => "타겟 고객이 겪고 있는 핵심 문제를 입력하세요.",
            Self::Solution => "제안하는 해결책을 입력하세요.",
            Self::KeyMetrics => "비즈니스 성과를 측정할 주요 지표를 입력하세요.",
            Self::UniqueValue => "경쟁사와 차별화되는 핵심 가치를 입력하세요.",
            Self::UnfairAdvantage => "다른 경쟁사가 쉽게 모방할 수 없는 장점을 입력하세요.",
            Self::CustomerSegment => "타겟 고객층을 구체적으로 입력하세요.",
            Self::Channels => "고객에게 다가갈 방법(예: SNS, 광고, 파트너십 등)을 입력하세요.",
            Self::CostStructure => "운영에 필요한 주요 비용 항목을 입력하세요.",
            Self::RevenueStreams => "수익을 창출하는 방식(예: 구독료, 광고, 판매 등)을 입력하세요.",
        }
    }

    /// Longer hint shown next to the input.
    pub fn help(self) -> &'static str {
        match self {
            Self::Problem => "예: 기존 시장에서 해결되지 않는 주요 고객 문제를 설명하세요.",
            Self::Solution => {
                "예: 고객 문제를 해결하기 위한 제품 또는 서비스의 핵심 기능을 설명하세요."
            }
            Self::KeyMetrics => "예: 매출 성장률, 사용자 유지율, 고객 획득 비용 등을 기재하세요.",
            Self::UniqueValue => "예: 경쟁사 대비 차별화되는 경쟁력을 설명하세요.",
            Self::UnfairAdvantage => "예: 경쟁사와 차별화되는 요소를 설명하세요.",
            Self::CustomerSegment => "예: 주 사용 고객의 연령, 직업, 관심사 등을 기재하세요.",
            Self::Channels => "예: 제품이나 서비스를 고객에게 알리고 판매하는 방법을 설명하세요.",
            Self::CostStructure => "예: 개발 비용, 마케팅 비용, 운영 비용 등을 기재하세요.",
            Self::RevenueStreams => {
                "예: 제품 판매, 광고 수익, 구독 기반 모델 등의 수익 구조를 설명하세요."
            }
        }
    }

    /// Parse a field key (`key_metrics`) or a 1-based section number (`3`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.iter().copied().find(|sec| sec.key() == s)
    }
}

impl std::fmt::Display for CanvasSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Current values of the nine sections for one session.
///
/// Fields are independent; any string (including empty) is accepted.
/// Fields missing from a canvas file keep their placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasInput {
    pub problem: String,
    pub solution: String,
    pub key_metrics: String,
    pub unique_value: String,
    pub unfair_advantage: String,
    pub customer_segment: String,
    pub channels: String,
    pub cost_structure: String,
    pub revenue_streams: String,
}

impl Default for CanvasInput {
    fn default() -> Self {
        Self {
            problem: CanvasSection::Problem.placeholder().to_string(),
            solution: CanvasSection::Solution.placeholder().to_string(),
            key_metrics: CanvasSection::KeyMetrics.placeholder().to_string(),
            unique_value: CanvasSection::UniqueValue.placeholder().to_string(),
            unfair_advantage: CanvasSection::UnfairAdvantage.placeholder().to_string(),
            customer_segment: CanvasSection::CustomerSegment.placeholder().to_string(),
            channels: CanvasSection::Channels.placeholder().to_string(),
            cost_structure: CanvasSection::CostStructure.placeholder().to_string(),
            revenue_streams: CanvasSection::RevenueStreams.placeholder().to_string(),
        }
    }
}

impl CanvasInput {
    pub fn get(&self, section: CanvasSection) -> &str {
        match section {
            CanvasSection::Problem => &self.problem,
            CanvasSection::Solution => &self.solution,
            CanvasSection::KeyMetrics => &self.key_metrics,
            CanvasSection::UniqueValue => &self.unique_value,
            CanvasSection::UnfairAdvantage => &self.unfair_advantage,
            CanvasSection::CustomerSegment => &self.customer_segment,
            CanvasSection::Channels => &self.channels,
            CanvasSection::CostStructure => &self.cost_structure,
            CanvasSection::RevenueStreams => &self.revenue_streams,
        }
    }

    pub fn set(&mut self, section: CanvasSection, value: impl Into<String>) {
        let slot = match section {
            CanvasSection::Problem => &mut self.problem,
            CanvasSection::Solution => &mut self.solution,
            CanvasSection::KeyMetrics => &mut self.key_metrics,
            CanvasSection::UniqueValue => &mut self.unique_value,
            CanvasSection::UnfairAdvantage => &mut self.unfair_advantage,
            CanvasSection::CustomerSegment => &mut self.customer_segment,
            CanvasSection::Channels => &mut self.channels,
            CanvasSection::CostStructure => &mut self.cost_structure,
            CanvasSection::RevenueStreams => &mut self.revenue_streams,
        };
        *slot = value.into();
    }

    /// Sections paired with their current values, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (CanvasSection, &str)> + '_ {
        CanvasSection::ALL.iter().map(move |s| (*s, self.get(*s)))
    }

    /// Sections still holding their untouched placeholder text.
    pub fn untouched(&self) -> Vec<CanvasSection> {
        self.sections()
            .filter(|(s, v)| *v == s.placeholder())
            .map(|(s, _)| s)
            .collect()
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("failed to parse canvas YAML")
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("failed to serialize canvas")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read canvas file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid canvas file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write canvas file {}", path.display()))
    }
}
