//! Papers-per-year bar chart rendered with `plotters`.
//!
//! Text needs a registered font. With [`ChartConfig::font_path`] unset (or
//! unusable) the chart is drawn without caption or axis labels.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use super::Labels;
use crate::config::ChartConfig;
use crate::error::ReportError;

const FONT_FAMILY: &str = "report-font";

/// The one font registration per process: the path tried and its outcome.
static FONT: OnceLock<(PathBuf, Result<(), String>)> = OnceLock::new();

/// Register the font at `path`, returning the path whose font is actually in use.
///
/// Only the first path is ever registered; later calls with another path keep it.
fn ensure_font(path: &Path) -> Result<&'static Path, ReportError> {
    let (active, outcome) = FONT.get_or_init(|| {
        let outcome = std::fs::read(path).map_err(|e| e.to_string()).and_then(|bytes| {
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            register_font(FONT_FAMILY, FontStyle::Normal, bytes)
                .map_err(|_| "not a TrueType/OpenType font".to_string())
        });
        (path.to_path_buf(), outcome)
    });

    if active != path {
        tracing::warn!(
            requested = %path.display(),
            active = %active.display(),
            "Chart font already registered, keeping the first"
        );
    }

    outcome
        .clone()
        .map(|()| active.as_path())
        .map_err(|message| ReportError::Font { path: active.clone(), message })
}

/// Count papers per year, ascending by year.
#[must_use]
pub fn year_counts(years: impl IntoIterator<Item = i32>) -> BTreeMap<i32, u32> {
    let mut counts = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
}

/// Render `counts` as a PNG bar chart at `path`.
pub fn render_year_chart(
    path: &Path,
    counts: &BTreeMap<i32, u32>,
    config: &ChartConfig,
    labels: &Labels,
) -> Result<(), ReportError> {
    if counts.is_empty() {
        return Err(ReportError::chart("no data points"));
    }

    let labeled = match &config.font_path {
        Some(font) => match ensure_font(font) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Drawing chart without labels");
                false
            }
        },
        None => false,
    };

    let years: Vec<i32> = counts.keys().copied().collect();
    let max_count = counts.values().copied().max().unwrap_or(1);

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(ReportError::chart)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labeled {
        builder
            .caption(labels.chart_title, (FONT_FAMILY, 28))
            .x_label_area_size(50)
            .y_label_area_size(60);
    }

    let mut chart = builder
        .build_cartesian_2d((0u32..years.len() as u32).into_segmented(), 0u32..max_count + 1)
        .map_err(ReportError::chart)?;

    if labeled {
        let year_label = |v: &SegmentValue<u32>| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                years.get(*i as usize).map(ToString::to_string).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(labels.chart_x_label)
            .y_desc(labels.chart_y_label)
            .x_label_formatter(&year_label)
            .label_style((FONT_FAMILY, 14))
            .axis_desc_style((FONT_FAMILY, 18))
            .draw()
            .map_err(ReportError::chart)?;
    }

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(10)
                .data(counts.values().enumerate().map(|(i, count)| (i as u32, *count))),
        )
        .map_err(ReportError::chart)?;

    root.present().map_err(ReportError::chart)?;
    Ok(())
}
