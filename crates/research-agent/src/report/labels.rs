//! Localized report text.

use crate::config::Locale;

/// Every fixed string the report and chart emit.
#[derive(Debug)]
pub struct Labels {
    /// `{topic}` is replaced with the research topic.
    pub report_title: &'static str,
    pub overview_heading: &'static str,
    /// `{topic}` is replaced with the research topic.
    pub overview_body: &'static str,
    pub papers_heading: &'static str,
    /// Title, authors, year, citations, link.
    pub table_columns: [&'static str; 5],
    pub visualization_heading: &'static str,
    pub no_year_data: &'static str,
    pub visualization_failed: &'static str,
    pub chart_title: &'static str,
    pub chart_x_label: &'static str,
    pub chart_y_label: &'static str,
    pub trend_heading: &'static str,
    pub references_heading: &'static str,
    pub link: &'static str,
}

const EN: Labels = Labels {
    report_title: "'{topic}' Research Topic Analysis",
    overview_heading: "Research Overview",
    overview_body: "This document presents an analysis of research papers on '{topic}'.",
    papers_heading: "Key Papers",
    table_columns: ["Title", "Authors", "Year", "Citations", "Link"],
    visualization_heading: "Research Trend Visualization",
    no_year_data: "Not enough year data to build a visualization.",
    visualization_failed: "The visualization could not be generated.",
    chart_title: "Papers Published per Year",
    chart_x_label: "Year",
    chart_y_label: "Papers",
    trend_heading: "Research Trend Analysis",
    references_heading: "References",
    link: "Link",
};

const KO: Labels = Labels {
    report_title: "'{topic}' 연구 주제 분석",
    overview_heading: "연구 개요",
    overview_body: "이 문서는 '{topic}' 주제에 관한 연구 논문들을 분석한 결과입니다.",
    papers_heading: "주요 논문 목록",
    table_columns: ["제목", "저자", "연도", "인용 수", "링크"],
    visualization_heading: "연구 트렌드 시각화",
    no_year_data: "시각화를 위한 충분한 연도 데이터가 없습니다.",
    visualization_failed: "시각화를 생성할 수 없습니다.",
    chart_title: "연도별 발행 논문 수",
    chart_x_label: "연도",
    chart_y_label: "논문 수",
    trend_heading: "연구 흐름 분석",
    references_heading: "참고 문헌",
    link: "링크",
};

impl Labels {
    /// Labels for a locale.
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &EN,
            Locale::Ko => &KO,
        }
    }

    /// Report title for a topic.
    #[must_use]
    pub fn title_for(&self, topic: &str) -> String {
        self.report_title.replace("{topic}", topic)
    }

    /// Overview paragraph for a topic.
    #[must_use]
    pub fn overview_for(&self, topic: &str) -> String {
        self.overview_body.replace("{topic}", topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_substitution() {
        let labels = Labels::for_locale(Locale::En);
        assert_eq!(labels.title_for("RAG"), "'RAG' Research Topic Analysis");
        assert!(labels.overview_for("RAG").contains("'RAG'"));
    }

    #[test]
    fn test_korean_labels() {
        let labels = Labels::for_locale(Locale::Ko);
        assert_eq!(labels.title_for("그래프"), "'그래프' 연구 주제 분석");
        assert_eq!(labels.table_columns[3], "인용 수");
    }
}
