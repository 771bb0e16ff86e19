//! Map widget geometry
//!
//! A single pin on an OpenStreetMap view centered on the hunt location.

pub const DEFAULT_ZOOM: u8 = 13;
pub const MAP_HEIGHT_PX: u32 = 400;
pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

const TILE_SIZE_PX: f64 = 256.0;
/// Widest the widget is expected to render
const VIEWPORT_WIDTH_PX: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl MapView {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// `(min_lon, min_lat, max_lon, max_lat)` visible at the zoom level
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let degrees_per_tile = 360.0 / f64::from(1u32 << self.zoom);
        let lon_half = degrees_per_tile * (VIEWPORT_WIDTH_PX / 2.0) / TILE_SIZE_PX;
        let lat_half = degrees_per_tile * (f64::from(MAP_HEIGHT_PX) / 2.0) / TILE_SIZE_PX
            * self.latitude.to_radians().cos();

        (
            self.longitude - lon_half,
            (self.latitude - lat_half).max(-85.0511),
            self.longitude + lon_half,
            (self.latitude + lat_half).min(85.0511),
        )
    }

    /// Embeddable map page with one marker at the center
    pub fn embed_url(&self) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.bounding_box();
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.6}%2C{:.6}%2C{:.6}%2C{:.6}&layer=mapnik&marker={:.6}%2C{:.6}",
            min_lon, min_lat, max_lon, max_lat, self.latitude, self.longitude
        )
    }

    /// Full map page for the same view
    pub fn link_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={:.6}&mlon={:.6}#map={}/{:.6}/{:.6}",
            self.latitude, self.longitude, self.zoom, self.latitude, self.longitude
        )
    }
}
