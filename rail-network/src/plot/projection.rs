//! Mapping from geographic coordinates to SVG canvas positions.

use crate::domain::Station;

/// Canvas size and margins shared by every plot.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub title_x: f64,
    pub x_label_y: f64,
    pub y_label_y: f64,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl Frame {
    /// A `width` x `height` canvas with room for a title and axis labels.
    pub fn new(width: f64, height: f64, x_label: &'static str, y_label: &'static str) -> Self {
        let (left, right, top, bottom) = (40.0, width - 20.0, 40.0, height - 40.0);
        Self {
            width,
            height,
            left,
            right,
            top,
            bottom,
            title_x: width / 2.0,
            x_label_y: height - 10.0,
            y_label_y: (top + bottom) / 2.0,
            x_label,
            y_label,
        }
    }

    /// Frame for a map of Great Britain-shaped data: tall and narrow.
    pub fn map() -> Self {
        Self::new(500.0, 900.0, "Longitude (degrees)", "Latitude (degrees)")
    }

    pub fn plot_width(&self) -> f64 {
        self.right - self.left
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Equirectangular projection fitted to a set of stations.
///
/// Longitude is scaled by the cosine of the mid latitude so distances look
/// roughly right at UK latitudes. The aspect ratio is preserved.
#[derive(Debug, Clone)]
pub struct Projection {
    min_lon: f64,
    max_lat: f64,
    lon_scale: f64,
    scale: f64,
    left: f64,
    top: f64,
}

/// Padding around the data, in degrees.
const PADDING_DEG: f64 = 0.25;

/// Bounds used when there is nothing to fit.
const DEFAULT_BOUNDS: (f64, f64, f64, f64) = (49.9, 58.7, -8.0, 2.0);

impl Projection {
    pub fn fit<'a>(stations: impl IntoIterator<Item = &'a Station>, frame: &Frame) -> Self {
        let bounds = stations.into_iter().fold(None, |acc, s| {
            let (lat, lon) = (s.latitude(), s.longitude());
            Some(match acc {
                None => (lat, lat, lon, lon),
                Some((min_lat, max_lat, min_lon, max_lon)) => (
                    f64::min(min_lat, lat),
                    f64::max(max_lat, lat),
                    f64::min(min_lon, lon),
                    f64::max(max_lon, lon),
                ),
            })
        });

        let (min_lat, max_lat, min_lon, max_lon) = bounds.unwrap_or(DEFAULT_BOUNDS);
        let (min_lat, max_lat) = (min_lat - PADDING_DEG, max_lat + PADDING_DEG);
        let (min_lon, max_lon) = (min_lon - PADDING_DEG, max_lon + PADDING_DEG);

        let lon_scale = ((min_lat + max_lat) / 2.0).to_radians().cos();
        let data_width = (max_lon - min_lon) * lon_scale;
        let data_height = max_lat - min_lat;
        let scale = f64::min(
            frame.plot_width() / data_width,
            frame.plot_height() / data_height,
        );

        Self {
            min_lon,
            max_lat,
            lon_scale,
            scale,
            left: frame.left,
            top: frame.top,
        }
    }

    /// Canvas position of a station; y grows downwards.
    pub fn project(&self, station: &Station) -> (f64, f64) {
        let x = self.left + (station.longitude() - self.min_lon) * self.lon_scale * self.scale;
        let y = self.top + (self.max_lat - station.latitude()) * self.scale;
        (x, y)
    }
}
