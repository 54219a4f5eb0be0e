//! SVG rendering for CSV line charts and concept maps.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::concept_map::ConceptGraph;
use crate::error::RenderError;
use crate::tabular::Table;

const CHART_SIZE: (u32, u32) = (960, 540);
const MAP_SIZE: (u32, u32) = (800, 800);

/// What the chart renderer did with a table and a column selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Drawn { path: PathBuf, columns: Vec<String> },
    NoNumericColumns,
    NoSelection,
}

fn drawing_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn ensure_parent(path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Contiguous runs of finite points; empty or non-finite cells break the line.
fn segments(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (row, value) in values.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => current.push((row as f64, *v)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Draw a line chart of `selected` columns to `path`.
///
/// Only numeric columns are drawn; the x axis is the row index.
pub fn render(table: &Table, selected: &[String], path: &Path) -> Result<ChartOutcome, RenderError> {
    let numeric = table.numeric_columns();
    if numeric.is_empty() {
        return Ok(ChartOutcome::NoNumericColumns);
    }
    let columns: Vec<String> = selected.iter().filter(|c| numeric.contains(*c)).cloned().collect();
    if columns.is_empty() {
        return Ok(ChartOutcome::NoSelection);
    }

    let mut series = Vec::with_capacity(columns.len());
    for name in &columns {
        let values = table.numeric_values(name).map_err(drawing_err)?;
        series.push((name.clone(), segments(&values)));
    }

    let (mut y_min, mut y_max) = series
        .iter()
        .flat_map(|(_, runs)| runs.iter().flatten().map(|(_, y)| *y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    } else if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let x_max = table.row_count().saturating_sub(1).max(1) as f64;

    ensure_parent(path)?;
    {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(drawing_err)?;
        chart.configure_mesh().x_desc("row").draw().map_err(drawing_err)?;

        for (i, (name, runs)) in series.iter().enumerate() {
            let style = Palette99::pick(i).stroke_width(2);
            for (n, run) in runs.iter().enumerate() {
                let drawn = chart
                    .draw_series(LineSeries::new(run.iter().copied(), style))
                    .map_err(drawing_err)?;
                if n == 0 {
                    drawn
                        .label(name.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                }
            }
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(drawing_err)?;
        root.present().map_err(drawing_err)?;
    }

    info!(path = %path.display(), columns = columns.len(), "Rendered line chart");
    Ok(ChartOutcome::Drawn { path: path.to_path_buf(), columns })
}

/// Draw `graph` with the center in the middle and leaves on a circle.
pub fn render_concept_map(graph: &ConceptGraph, path: &Path) -> Result<PathBuf, RenderError> {
    ensure_parent(path)?;
    {
        let root = SVGBackend::new(path, MAP_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_err)?;

        let center = (MAP_SIZE.0 as i32 / 2, MAP_SIZE.1 as i32 / 2);
        let radius = f64::from(MAP_SIZE.0.min(MAP_SIZE.1)) * 0.36;
        let count = graph.leaves().len().max(1) as f64;
        let positions: Vec<(i32, i32)> = (0..graph.leaves().len())
            .map(|i| {
                let angle = TAU * i as f64 / count;
                (
                    center.0 + (radius * angle.cos()).round() as i32,
                    center.1 + (radius * angle.sin()).round() as i32,
                )
            })
            .collect();

        for pos in &positions {
            root.draw(&PathElement::new(vec![center, *pos], BLACK.stroke_width(1)))
                .map_err(drawing_err)?;
        }

        let label = ("sans-serif", 16)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let nodes = std::iter::once((center, graph.center())).chain(
            positions
                .iter()
                .copied()
                .zip(graph.leaves().iter().map(String::as_str)),
        );
        for (pos, name) in nodes {
            root.draw(&Circle::new(pos, 30, BLUE.mix(0.3).filled()))
                .map_err(drawing_err)?;
            root.draw(&Text::new(name.to_string(), pos, label.clone()))
                .map_err(drawing_err)?;
        }
        root.present().map_err(drawing_err)?;
    }

    info!(path = %path.display(), nodes = graph.node_count(), "Rendered concept map");
    Ok(path.to_path_buf())
}
