use yew::prelude::*;

use crate::theme::ChartViewport;

/// Polyline geometry for a series drawn inside a fixed viewport
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub points: Vec<(f64, f64)>,
}

impl ChartGeometry {
    /// Normalizes `values` against their maximum (never less than 1).
    ///
    /// Points are spread evenly from x = 0 to x = width; y = height is the
    /// baseline. Fewer than two values yield a flat baseline segment.
    pub fn from_values(values: &[f64], width: f64, height: f64) -> Self {
        if values.len() < 2 {
            return Self {
                width,
                height,
                points: vec![(0.0, height), (width, height)],
            };
        }

        let max = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(1.0_f64, f64::max);
        let last = (values.len() - 1) as f64;

        let points = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
                let x = i as f64 / last * width;
                let y = height - (value / max) * height;
                (x, y)
            })
            .collect();

        Self { width, height, points }
    }

    /// Open path for the stroke: `M x,y L x,y ...`
    pub fn line_path(&self) -> String {
        let coords: Vec<String> = self.points.iter().map(|(x, y)| coord(*x, *y)).collect();
        format!("M{}", coords.join(" L"))
    }

    /// Closed path down to the baseline, for the gradient fill
    pub fn area_path(&self) -> String {
        let segments: Vec<String> = self
            .points
            .iter()
            .map(|(x, y)| format!("L{}", coord(*x, *y)))
            .collect();
        format!(
            "M{} {} L{} Z",
            coord(0.0, self.height),
            segments.join(" "),
            coord(self.width, self.height)
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn coord(x: f64, y: f64) -> String {
    format!("{},{}", round2(x), round2(y))
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub data_points: Vec<f64>,
    pub viewport: ChartViewport,
    pub color: AttrValue,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let viewport = props.viewport;
    let geometry = ChartGeometry::from_values(&props.data_points, viewport.width, viewport.height);

    html! {
        <div class="chart-container w-full">
            <svg
                class="w-full overflow-visible"
                height={viewport.height.to_string()}
                viewBox={format!("0 0 {} {}", viewport.width, viewport.height)}
                preserveAspectRatio="none"
            >
                <defs>
                    <linearGradient id="trend-gradient" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0" stop-color={props.color.clone()} stop-opacity="0.3" />
                        <stop offset="1" stop-color={props.color.clone()} stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path d={geometry.area_path()} fill="url(#trend-gradient)" stroke="none" />
                <path
                    d={geometry.line_path()}
                    stroke={props.color.clone()}
                    stroke-width={viewport.stroke_width.to_string()}
                    stroke-linejoin="round"
                    fill="none"
                />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_zero_series_sits_on_baseline() {
        let geometry = ChartGeometry::from_values(&[0.0; 7], 320.0, 100.0);
        assert_eq!(geometry.points.len(), 7);
        assert!(geometry.points.iter().all(|(_, y)| *y == 100.0));
        assert!(geometry.points.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn test_points_are_normalized_to_max() {
        let geometry = ChartGeometry::from_values(&[3.0, 5.0, 2.0, 8.0, 6.0, 4.0, 7.0], 320.0, 100.0);
        assert_eq!(geometry.points[0], (0.0, 62.5));
        assert_eq!(geometry.points[3], (160.0, 0.0));
        assert_eq!(geometry.points[6], (320.0, 12.5));
    }

    #[test]
    fn test_small_values_use_unit_denominator() {
        let geometry = ChartGeometry::from_values(&[0.0, 0.5], 100.0, 100.0);
        assert_eq!(geometry.points[1], (100.0, 50.0));
    }

    #[test]
    fn test_single_point_is_flat_baseline() {
        let geometry = ChartGeometry::from_values(&[9.0], 320.0, 100.0);
        assert_eq!(geometry.points, vec![(0.0, 100.0), (320.0, 100.0)]);
        assert_eq!(geometry.line_path(), "M0,100 L320,100");

        let empty = ChartGeometry::from_values(&[], 320.0, 100.0);
        assert_eq!(empty.points, geometry.points);
    }

    #[test]
    fn test_paths() {
        let geometry = ChartGeometry::from_values(&[0.0, 4.0, 2.0], 200.0, 100.0);
        assert_eq!(geometry.line_path(), "M0,100 L100,0 L200,50");
        assert_eq!(geometry.area_path(), "M0,100 L0,100 L100,0 L200,50 L200,100 Z");
    }
}
