use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::models::content::ThreatVolume;

const BAR: RGBColor = RGBColor(74, 222, 128);
const BACKGROUND: RGBColor = RGBColor(15, 23, 42);
const LABEL: RGBColor = RGBColor(148, 163, 184);

/// Upper bound of the y axis: the busiest day plus 10% headroom.
pub fn y_ceiling(data: &[ThreatVolume]) -> u32 {
    let max = data.iter().map(|point| point.blocked).max().unwrap_or(0);
    max + (max / 10).max(1)
}

fn draw(canvas: HtmlCanvasElement, caption: &str, data: &[ThreatVolume]) -> Result<(), String> {
    canvas.set_width(600);
    canvas.set_height(320);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(caption, ("sans-serif", 18).into_font().color(&WHITE))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..data.len(), 0..y_ceiling(data))
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|x| data.get(*x).map(|point| point.day.to_string()).unwrap_or_default())
        .label_style(("sans-serif", 12).into_font().color(&LABEL))
        .axis_style(LABEL.stroke_width(1))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(data.iter().enumerate().map(|(i, point)| {
            Rectangle::new([(i, 0), (i + 1, point.blocked)], BAR.filled())
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub caption: AttrValue,
    pub data: &'static [ThreatVolume],
}

#[function_component]
pub fn ThreatGraph(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let caption = props.caption.clone();
        let data = props.data;
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw(canvas, &caption, data) {
                    log::error!("Failed to draw threat chart: {}", e);
                }
            }
            || ()
        }, props.caption.clone());
    }

    html! {
        <div class="threat-graph">
            <canvas
                ref={canvas_ref}
                width="600"
                height="320"
                style="max-width: 100%;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WEEKLY_THREATS;

    #[test]
    fn test_y_ceiling_adds_headroom() {
        assert_eq!(y_ceiling(WEEKLY_THREATS), 29);
    }

    #[test]
    fn test_y_ceiling_empty() {
        assert_eq!(y_ceiling(&[]), 1);
    }
}
