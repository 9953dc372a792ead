use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::stats::MonthPoint;

const INCOME_COLOR: RGBColor = RGBColor(19, 236, 91);
const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);
const NET_COLOR: RGBColor = RGBColor(16, 34, 22);
const LABEL_COLOR: RGBColor = RGBColor(97, 137, 111);

#[derive(Properties, PartialEq)]
pub struct MonthlyChartProps {
    pub points: Vec<MonthPoint>,
    pub currency_symbol: &'static str,
}

/// Income and expense bars per month with the running net as a line.
pub struct MonthlyChart {
    canvas_ref: NodeRef,
}

impl Component for MonthlyChart {
    type Message = ();
    type Properties = MonthlyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if !props.points.is_empty() && self.draw(&props.points, props.currency_symbol).is_none() {
            log::warn!("monthly chart could not be drawn");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().points.is_empty() {
            return html! {
                <div class="h-[300px] flex items-center justify-center">
                    <p class="text-xs opacity-50 italic">{"Registra movimientos para ver la evolución mensual."}</p>
                </div>
            };
        }

        html! {
            <div class="flex flex-col gap-3">
                <canvas ref={self.canvas_ref.clone()} class="w-full" width="800" height="300"></canvas>
                <div class="flex gap-6 text-[10px] font-black uppercase tracking-widest opacity-70">
                    <span class="flex items-center gap-2"><span class="size-3 rounded-full bg-[#13ec5b]"></span>{"Ingresos"}</span>
                    <span class="flex items-center gap-2"><span class="size-3 rounded-full bg-red-500"></span>{"Gastos"}</span>
                    <span class="flex items-center gap-2"><span class="size-3 rounded-full bg-[#102216] dark:bg-white"></span>{"Patrimonio acumulado"}</span>
                </div>
            </div>
        }
    }
}

impl MonthlyChart {
    fn draw(&self, points: &[MonthPoint], symbol: &str) -> Option<()> {
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        let backend = CanvasBackend::with_canvas_object(canvas)?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).ok()?;

        let labels: Vec<String> = points.iter().map(MonthPoint::label).collect();
        let (y_min, y_max) = y_bounds(points);
        let x_max = points.len() as f64 - 0.5;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .ok()?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(points.len() * 2 + 1)
            .x_label_formatter(&|x| month_label(&labels, *x))
            .y_label_formatter(&|y| format!("{}{:.0}", symbol, y))
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(240, 240, 240))
            .light_line_style(&RGBColor(250, 250, 250))
            .y_labels(6)
            .draw()
            .ok()?;

        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                let x = i as f64;
                Rectangle::new([(x - 0.35, 0.0), (x, as_f64(p.income))], INCOME_COLOR.filled())
            }))
            .ok()?;
        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                let x = i as f64;
                Rectangle::new([(x, 0.0), (x + 0.35, as_f64(p.expense))], EXPENSE_COLOR.filled())
            }))
            .ok()?;
        chart
            .draw_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i as f64, as_f64(p.cumulative_net))),
                NET_COLOR.stroke_width(3),
            ))
            .ok()?;

        root.present().ok()
    }
}

fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Only whole x positions carry a month name.
fn month_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if rounded < 0.0 || (x - rounded).abs() > 0.01 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Y range covering every bar and the net line, padded by a tenth. The axis
/// always includes zero.
fn y_bounds(points: &[MonthPoint]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .flat_map(|p| [p.income, p.expense, p.cumulative_net])
        .map(as_f64)
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = (hi - lo).max(1.0) * 0.1;
    let bottom = if lo < 0.0 { lo - pad } else { 0.0 };
    (bottom, hi + pad)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn drawing_without_a_canvas_is_a_no_op() {
        let chart = MonthlyChart {
            canvas_ref: NodeRef::default(),
        };
        assert!(chart
            .draw(&[MonthPoint {
                year: 2024,
                month: 3,
                income: Decimal::ONE_HUNDRED,
                expense: Decimal::TEN,
                cumulative_net: Decimal::from(90),
            }], "$")
            .is_none());
    }
}
