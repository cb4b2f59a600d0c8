use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub points: &'static [f64],
    pub color: (u8, u8, u8),
    #[prop_or(220)]
    pub width: u32,
    #[prop_or(64)]
    pub height: u32,
}

fn draw_sparkline(
    canvas: HtmlCanvasElement,
    points: &[f64],
    (r, g, b): (u8, u8, u8),
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();

    let min = points.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = points.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Flat series still need a non-empty y range.
    let pad = ((max - min) * 0.1).max(0.5);

    let mut chart = ChartBuilder::on(&root)
        .margin(4)
        .build_cartesian_2d(0f64..(points.len() - 1) as f64, (min - pad)..(max + pad))?;

    let stroke = RGBColor(r, g, b);
    chart.draw_series(AreaSeries::new(
        points.iter().enumerate().map(|(i, v)| (i as f64, *v)),
        min - pad,
        stroke.mix(0.12),
    ))?;
    chart.draw_series(LineSeries::new(
        points.iter().enumerate().map(|(i, v)| (i as f64, *v)),
        stroke.stroke_width(3),
    ))?;
    root.present()?;
    Ok(())
}

/// Small trend line for one impact metric, drawn once on mount.
#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let points = props.points;
        let color = props.color;
        let (width, height) = (props.width, props.height);
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(width);
                    canvas.set_height(height);
                    if points.len() >= 2 {
                        if let Err(e) = draw_sparkline(canvas, points, color) {
                            warn!("Could not draw sparkline: {}", e);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="sparkline" width={props.width.to_string()} height={props.height.to_string()} />
    }
}
