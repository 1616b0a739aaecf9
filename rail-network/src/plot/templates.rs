//! Askama SVG templates and their view models.

use askama::Template;

use super::projection::Frame;

/// Marker colours, cycled per region.
pub const COLOURS: [&str; 7] = [
    "blue",
    "red",
    "green",
    "darkcyan",
    "magenta",
    "goldenrod",
    "black",
];

/// Marker shapes, advanced each time the colours wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
}

impl MarkerShape {
    pub const ALL: [MarkerShape; 4] = [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::Triangle,
        MarkerShape::Diamond,
    ];

    /// Colour and shape for the `idx`-th region. Distinct for the first
    /// `COLOURS.len() * ALL.len()` regions.
    pub fn style(idx: usize) -> (&'static str, MarkerShape) {
        let colour = COLOURS[idx % COLOURS.len()];
        let shape = Self::ALL[(idx / COLOURS.len()) % Self::ALL.len()];
        (colour, shape)
    }

    pub fn is_circle(&self) -> bool {
        *self == MarkerShape::Circle
    }

    /// Polygon `points` of radius `r` centred on `(x, y)`. Empty for circles.
    pub fn points(&self, x: f64, y: f64, r: f64) -> String {
        let h = r * 3f64.sqrt() / 2.0;
        let corners = match self {
            MarkerShape::Circle => vec![],
            MarkerShape::Square => vec![(x - r, y - r), (x + r, y - r), (x + r, y + r), (x - r, y + r)],
            MarkerShape::Triangle => vec![(x, y - r), (x + h, y + r / 2.0), (x - h, y + r / 2.0)],
            MarkerShape::Diamond => vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)],
        };

        corners
            .into_iter()
            .map(|(cx, cy)| format!("{},{}", px(cx), px(cy)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Station map coloured and shaped by region.
#[derive(Template)]
#[template(path = "network.svg", escape = "html")]
pub struct NetworkTemplate {
    pub frame: Frame,
    pub radius: f64,
    pub markers: Vec<MarkerView>,
    pub legend: Vec<LegendView>,
}

/// A planned route drawn over the network.
#[derive(Template)]
#[template(path = "journey.svg", escape = "html")]
pub struct JourneyTemplate {
    pub frame: Frame,
    pub title: String,
    pub network: Vec<MarkerView>,
    pub stops: Vec<MarkerView>,
    /// SVG polyline `points` attribute
    pub path: String,
}

/// Histogram of fares to one station.
#[derive(Template)]
#[template(path = "fare_histogram.svg", escape = "html")]
pub struct FareHistogramTemplate {
    pub frame: Frame,
    pub title: String,
    pub bars: Vec<BarView>,
    pub ticks: Vec<TickView>,
}

/// A station marker on a map.
#[derive(Debug, Clone)]
pub struct MarkerView {
    pub x: String,
    pub y: String,
    pub colour: &'static str,
    pub shape: MarkerShape,
    /// Polygon outline when `shape` is not a circle
    pub points: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct LegendView {
    pub marker: MarkerView,
    pub text_x: f64,
    pub text_y: f64,
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct BarView {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub label: String,
}

/// An x-axis label.
#[derive(Debug, Clone)]
pub struct TickView {
    pub x: String,
    pub y: f64,
    pub label: String,
}

/// Format a canvas coordinate for SVG output.
pub fn px(value: f64) -> String {
    format!("{value:.1}")
}

impl FareHistogramTemplate {
    pub fn default_frame() -> Frame {
        Frame::new(640.0, 400.0, "Fare (£)", "Number of stations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_rounds_to_one_decimal() {
        assert_eq!(px(12.345), "12.3");
        assert_eq!(px(40.0), "40.0");
    }

    #[test]
    fn escapes_labels() {
        let template = NetworkTemplate {
            frame: Frame::map(),
            radius: 5.0,
            markers: vec![MarkerView {
                x: px(1.0),
                y: px(2.0),
                colour: COLOURS[0],
                shape: MarkerShape::Circle,
                points: String::new(),
                label: "Stoke <& Trent>".into(),
            }],
            legend: vec![],
        };

        let svg = template.render().unwrap();
        assert!(svg.contains("Stoke &lt;&amp; Trent&gt;"));
        assert!(!svg.contains("Stoke <&"));
    }

    #[test]
    fn styles_cycle_colour_then_shape() {
        assert_eq!(MarkerShape::style(0), ("blue", MarkerShape::Circle));
        assert_eq!(MarkerShape::style(6), ("black", MarkerShape::Circle));
        assert_eq!(MarkerShape::style(7), ("blue", MarkerShape::Square));
        assert_eq!(MarkerShape::style(15), ("red", MarkerShape::Triangle));
        assert_eq!(MarkerShape::style(28), ("blue", MarkerShape::Circle));

        let styles: std::collections::HashSet<_> = (0..28).map(MarkerShape::style).collect();
        assert_eq!(styles.len(), 28);
    }

    #[test]
    fn polygon_points() {
        assert_eq!(MarkerShape::Circle.points(10.0, 10.0, 2.0), "");
        assert_eq!(
            MarkerShape::Square.points(10.0, 10.0, 2.0),
            "8.0,8.0 12.0,8.0 12.0,12.0 8.0,12.0"
        );
        assert_eq!(
            MarkerShape::Diamond.points(10.0, 10.0, 2.0),
            "10.0,8.0 12.0,10.0 10.0,12.0 8.0,10.0"
        );
        assert_eq!(MarkerShape::Triangle.points(0.0, 0.0, 2.0).split(' ').count(), 3);
    }
}
