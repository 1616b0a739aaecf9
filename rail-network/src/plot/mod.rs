//! SVG rendering of the network, planned journeys and fare distributions.
//!
//! Plotting only reads from a [`RailNetwork`]; it never changes it, and the
//! planner never calls into here.

mod projection;
mod templates;

use askama::Template;

use crate::network::{FareHistogram, NetworkError, RailNetwork};

pub use projection::{Frame, Projection};
pub use templates::*;

/// Errors from rendering a plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// The plotted query failed
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Map of every station, one colour and marker shape per region.
///
/// Regions take styles in sorted order: colours cycle through [`COLOURS`],
/// and the shape advances each time they wrap.
pub fn render_network(network: &RailNetwork, marker_size: u32) -> Result<String, PlotError> {
    let frame = Frame::map();
    let projection = Projection::fit(network.stations(), &frame);
    let regions: Vec<&str> = network.regions().into_iter().collect();

    let radius = f64::from(marker_size.max(1)) / 2.0;

    let styled = |region: &str, x: f64, y: f64, size: f64, label: String| {
        let idx = regions.iter().position(|r| *r == region).unwrap_or(0);
        let (colour, shape) = MarkerShape::style(idx);
        MarkerView {
            x: px(x),
            y: px(y),
            colour,
            shape,
            points: shape.points(x, y, size),
            label,
        }
    };

    let markers = network
        .stations()
        .map(|station| {
            let (x, y) = projection.project(station);
            styled(station.region(), x, y, radius, station.to_string())
        })
        .collect();

    let legend = regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let y = frame.top + 16.0 * i as f64 + 5.0;
            LegendView {
                marker: styled(*region, frame.right - 135.0, y, 5.0, String::new()),
                text_x: frame.right - 125.0,
                text_y: y + 4.0,
                region: (*region).to_string(),
            }
        })
        .collect();

    let template = NetworkTemplate {
        frame,
        radius,
        markers,
        legend,
    };

    Ok(template.render()?)
}

/// The planned route from `start` to `dest` drawn over the network.
pub fn render_journey(network: &RailNetwork, start: &str, dest: &str) -> Result<String, PlotError> {
    let route = network.journey_planner(start, dest)?;

    let frame = Frame::map();
    let projection = Projection::fit(network.stations(), &frame);
    let marker = |station: &crate::domain::Station, colour| {
        let (x, y) = projection.project(station);
        MarkerView {
            x: px(x),
            y: px(y),
            colour,
            shape: MarkerShape::Circle,
            points: String::new(),
            label: station.to_string(),
        }
    };

    let stops: Vec<MarkerView> = route
        .stations()
        .iter()
        .copied()
        .map(|s| marker(s, "red"))
        .collect();
    let path = stops
        .iter()
        .map(|m| format!("{},{}", m.x, m.y))
        .collect::<Vec<_>>()
        .join(" ");

    let template = JourneyTemplate {
        title: format!(
            "Journey from {} to {}",
            route.origin().name(),
            route.destination().name()
        ),
        network: network.stations().map(|s| marker(s, "blue")).collect(),
        stops,
        path,
        frame,
    };

    Ok(template.render()?)
}

/// Histogram of fares from every reachable station to `dest`.
pub fn render_fares_to(network: &RailNetwork, dest: &str, bins: usize) -> Result<String, PlotError> {
    let fares = network.fares_to(dest)?;
    let name = network
        .station(dest)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| dest.to_string());

    let values: Vec<f64> = fares.iter().map(|f| f.fare).collect();
    let histogram = FareHistogram::new(&values, bins);

    let frame = FareHistogramTemplate::default_frame();
    let bar_width = frame.plot_width() / histogram.bins().len().max(1) as f64;
    let unit_height = frame.plot_height() / histogram.max_count().max(1) as f64;

    let bars = histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let height = bin.count as f64 * unit_height;
            BarView {
                x: px(frame.left + bar_width * i as f64),
                y: px(frame.bottom - height),
                width: px(bar_width),
                height: px(height),
                label: format!("£{:.2}-£{:.2}: {}", bin.lower, bin.upper, bin.count),
            }
        })
        .collect();

    let ticks = histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(i, bin)| TickView {
            x: px(frame.left + bar_width * (i as f64 + 0.5)),
            y: frame.bottom + 14.0,
            label: format!("{:.0}", (bin.lower + bin.upper) / 2.0),
        })
        .collect();

    let template = FareHistogramTemplate {
        title: format!("Fares to {name}"),
        bars,
        ticks,
        frame,
    };

    Ok(template.render()?)
}
