use crate::aspect::ImageSize;
use crate::bbox::BoundingBox;
use crate::config::Config;

const MAPBOX_STYLES_URL: &str = "https://api.mapbox.com/styles/v1";

/// Request for a static background image covering exactly `bbox`
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapRequest {
    pub bbox: BoundingBox,
    pub image: ImageSize,
    pub style: String,
    pub retina: bool,
}

impl StaticMapRequest {
    pub fn new(bbox: BoundingBox, config: &Config) -> StaticMapRequest {
        StaticMapRequest {
            bbox,
            image: config.image,
            style: config.style.clone(),
            retina: config.retina,
        }
    }

    /// `[lon_min,lat_min,lon_max,lat_max]` as expected by the static images API
    pub fn bbox_param(&self) -> String {
        format!(
            "[{},{},{},{}]",
            self.bbox.long_min, self.bbox.lat_min, self.bbox.long_max, self.bbox.lat_max
        )
    }

    pub fn resolution_param(&self) -> String {
        let suffix = if self.retina { "@2x" } else { "" };
        format!("{}x{}{}", self.image.width, self.image.height, suffix)
    }

    pub fn url(&self, access_token: &str) -> String {
        format!(
            "{}/{}/static/{}/{}?logo=false&padding=0&access_token={}&attribution=false",
            MAPBOX_STYLES_URL,
            self.style,
            self.bbox_param(),
            self.resolution_param(),
            access_token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url() {
        let bbox = BoundingBox::new(4.99, 5.11, 51.98, 52.07);
        let request = StaticMapRequest::new(bbox, &Config::default());

        assert_eq!(
            request.url("pk.test"),
            "https://api.mapbox.com/styles/v1/mapbox/light-v11/static/[4.99,51.98,5.11,52.07]/600x700@2x\
             ?logo=false&padding=0&access_token=pk.test&attribution=false"
        );
    }

    #[test]
    fn custom_style_without_retina() {
        let config = Config {
            style: "edriessen/clnymoa2t005101qx2du81zcr".to_string(),
            image: ImageSize::new(900, 700),
            retina: false,
            ..Config::default()
        };
        let request = StaticMapRequest::new(BoundingBox::new(-1.5, 1.5, -2., 2.), &config);

        assert_eq!(request.bbox_param(), "[-1.5,-2,1.5,2]");
        assert_eq!(request.resolution_param(), "900x700");
        assert!(request.url("t").starts_with("https://api.mapbox.com/styles/v1/edriessen/clnymoa2t005101qx2du81zcr/static/"));
    }
}
