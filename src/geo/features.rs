//! Point-feature extraction from GeoJSON documents.
//!
//! Only `Point` geometries become markers; every other geometry type is
//! skipped. That is a filtering rule, not an error.

use geo_types::Coord;
use geojson::{Feature, GeoJson, Value};

/// Fallback for features without a `name` property.
const UNNAMED_POINT: &str = "Unnamed Point";

/// A point of interest parsed from a feature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Geographic position (`x` = longitude, `y` = latitude).
    pub coord: Coord<f64>,
    pub name: String,
}

/// Parses a GeoJSON document into point features.
///
/// Accepts a FeatureCollection, a single Feature, or a bare Point geometry.
/// Returns an error only when the document itself fails to parse.
pub fn parse_point_features(geojson_str: &str) -> Result<Vec<PointFeature>, String> {
    let geojson: GeoJson = geojson_str
        .parse()
        .map_err(|e| format!("Failed to parse GeoJSON: {}", e))?;

    match geojson {
        GeoJson::FeatureCollection(fc) => {
            Ok(fc.features.iter().filter_map(convert_feature).collect())
        }
        GeoJson::Feature(feature) => Ok(convert_feature(&feature).into_iter().collect()),
        GeoJson::Geometry(geometry) => {
            Ok(point_coord(&geometry.value)
                .map(|coord| PointFeature {
                    coord,
                    name: UNNAMED_POINT.to_string(),
                })
                .into_iter()
                .collect())
        }
    }
}

fn convert_feature(feature: &Feature) -> Option<PointFeature> {
    let coord = point_coord(&feature.geometry.as_ref()?.value)?;

    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("name"))
        .and_then(|v| v.as_str())
        .unwrap_or(UNNAMED_POINT)
        .to_string();

    Some(PointFeature { coord, name })
}

fn point_coord(value: &Value) -> Option<Coord<f64>> {
    match value {
        Value::Point(coords) if coords.len() >= 2 => Some(Coord {
            x: coords[0],
            y: coords[1],
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_features_are_extracted_with_names() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [136.8816, 35.1709]},
                    "properties": {"name": "Nagoya Station"}
                }
            ]
        }"#;

        let features = parse_point_features(doc).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Nagoya Station");
        assert_eq!(
            features[0].coord,
            Coord {
                x: 136.8816,
                y: 35.1709
            }
        );
    }

    #[test]
    fn test_non_point_geometries_are_skipped() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [136.9, 35.18]},
                    "properties": {"name": "Keep"}
                },
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    },
                    "properties": {"name": "Skip"}
                }
            ]
        }"#;

        let features = parse_point_features(doc).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Keep");
    }

    #[test]
    fn test_missing_name_falls_back_to_default() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [136.9, 35.18]},
                    "properties": {}
                }
            ]
        }"#;

        let features = parse_point_features(doc).unwrap();
        assert_eq!(features[0].name, "Unnamed Point");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_point_features("not geojson").is_err());
        assert!(parse_point_features(r#"{"type": "FeatureCollection""#).is_err());
    }
}
