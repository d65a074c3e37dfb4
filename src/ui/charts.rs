use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use superstore_dashboard::data::aggregate::{Aggregation, MONTH};
use superstore_dashboard::data::model::{YearMonth, CATEGORY, SALES};

use super::format_currency;
use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Category bar chart
// ---------------------------------------------------------------------------

pub fn category_bars(ui: &mut Ui, agg: &Aggregation<String>, colors: &ColorMap) {
    let labels: Vec<String> = agg.rows.iter().map(|r| r.key.clone()).collect();
    let bars: Vec<Bar> = agg
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.sales)
                .name(format!("{}: {}", r.key, format_currency(r.sales)))
                .fill(colors.color_for(&r.key))
                .width(0.6)
        })
        .collect();

    Plot::new("category_chart")
        .height(350.0)
        .x_axis_label(CATEGORY)
        .y_axis_label(SALES)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Region donut
// ---------------------------------------------------------------------------

/// Donut of each region's share of sales, labelled outside the ring.
pub fn region_donut(ui: &mut Ui, agg: &Aggregation<String>, colors: &ColorMap) {
    let size = Vec2::new(ui.available_width(), 350.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let text_color = ui.visuals().text_color();

    let total = agg.total();
    if total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No sales in the current selection",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let center = rect.center();
    let outer = (rect.width().min(rect.height()) * 0.5 - 40.0).max(20.0);
    let inner = outer * 0.5;

    let mut angle = -FRAC_PI_2;
    for row in &agg.rows {
        let sweep = (row.sales / total) as f32 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let color = colors.color_for(&row.key);

        // Ring segments are not convex; paint them as thin quads.
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for s in 0..steps {
            let a0 = angle + sweep * s as f32 / steps as f32;
            let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![
                    polar(center, outer, a0),
                    polar(center, outer, a1),
                    polar(center, inner, a1),
                    polar(center, inner, a0),
                ],
                color,
                Stroke::NONE,
            ));
        }

        let mid = angle + sweep / 2.0;
        let anchor = if mid.cos() >= 0.0 {
            Align2::LEFT_CENTER
        } else {
            Align2::RIGHT_CENTER
        };
        painter.text(
            polar(center, outer + 10.0, mid),
            anchor,
            format!("{} {:.1}%", row.key, row.sales / total * 100.0),
            FontId::proportional(13.0),
            text_color,
        );
        angle += sweep;
    }
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::angled(angle) * radius
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

pub fn time_series(ui: &mut Ui, agg: &Aggregation<YearMonth>) {
    let labels: Vec<String> = agg.rows.iter().map(|r| r.key.to_string()).collect();
    let points: Vec<[f64; 2]> = agg
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| [i as f64, r.sales])
        .collect();

    Plot::new("time_series_chart")
        .height(500.0)
        .x_axis_label(MONTH)
        .y_axis_label("Amount")
        .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())).name(SALES).width(2.0));
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0).name(SALES));
        });
}

/// Axis label for an integer grid position; blank between keys.
fn label_at(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}
