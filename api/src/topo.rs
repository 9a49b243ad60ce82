//! Minimal TopoJSON decoding: enough to turn a world-atlas `countries` object
//! into named polygons in longitude/latitude.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::ApiError;

/// Longitude/latitude pairs. The first ring of a polygon is the exterior.
pub type Ring = Vec<[f64; 2]>;
pub type Polygon = Vec<Ring>;

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: BTreeMap<String, Geometry>,
}

/// Quantization transform; when present arcs are delta-encoded integers.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Option<String>,
    pub name: String,
    pub polygons: Vec<Polygon>,
}

/// Decoded country features, shared read-only by every map render.
#[derive(Debug, Clone, Default)]
pub struct WorldAtlas(Arc<Vec<Feature>>);

impl WorldAtlas {
    pub fn new(features: Vec<Feature>) -> Self {
        Self(Arc::new(features))
    }

    pub fn features(&self) -> &[Feature] {
        self.0.as_slice()
    }
}

impl Deref for WorldAtlas {
    type Target = [Feature];

    fn deref(&self) -> &Self::Target {
        self.features()
    }
}

impl PartialEq for WorldAtlas {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Topology {
    /// Features of the `countries` object, as published by world-atlas.
    pub fn countries(&self) -> Result<WorldAtlas, ApiError> {
        self.object("countries")
    }

    pub fn object(&self, name: &str) -> Result<WorldAtlas, ApiError> {
        let geometry = self
            .objects
            .get(name)
            .ok_or_else(|| ApiError::Geometry(format!("missing object `{name}`")))?;

        let arcs = self.decoded_arcs();
        let mut features = Vec::new();
        collect_features(geometry, &arcs, &mut features)?;
        Ok(WorldAtlas::new(features))
    }

    fn decoded_arcs(&self) -> Vec<Vec<[f64; 2]>> {
        self.arcs
            .iter()
            .map(|arc| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .filter(|position| position.len() >= 2)
                    .map(|position| match self.transform {
                        Some(transform) => {
                            x += position[0];
                            y += position[1];
                            [
                                x * transform.scale[0] + transform.translate[0],
                                y * transform.scale[1] + transform.translate[1],
                            ]
                        }
                        None => [position[0], position[1]],
                    })
                    .collect()
            })
            .collect()
    }
}

fn collect_features(
    geometry: &Geometry,
    arcs: &[Vec<[f64; 2]>],
    out: &mut Vec<Feature>,
) -> Result<(), ApiError> {
    match geometry {
        Geometry::GeometryCollection { geometries } => {
            for child in geometries {
                collect_features(child, arcs, out)?;
            }
        }
        Geometry::Polygon {
            arcs: rings,
            id,
            properties,
        } => {
            let polygon = stitch_polygon(rings, arcs)?;
            out.push(feature(id, properties, vec![polygon]));
        }
        Geometry::MultiPolygon {
            arcs: polygons,
            id,
            properties,
        } => {
            let polygons = polygons
                .iter()
                .map(|rings| stitch_polygon(rings, arcs))
                .collect::<Result<Vec<_>, _>>()?;
            out.push(feature(id, properties, polygons));
        }
        Geometry::Other => {}
    }
    Ok(())
}

fn feature(id: &Option<Value>, properties: &Option<Properties>, polygons: Vec<Polygon>) -> Feature {
    let id = id.as_ref().and_then(|value| match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    });
    let name = properties
        .as_ref()
        .and_then(|props| props.name.clone())
        .or_else(|| id.clone())
        .unwrap_or_default();
    Feature { id, name, polygons }
}

fn stitch_polygon(rings: &[Vec<i64>], arcs: &[Vec<[f64; 2]>]) -> Result<Polygon, ApiError> {
    rings.iter().map(|ring| stitch_ring(ring, arcs)).collect()
}

/// Concatenate arcs into a ring. Consecutive arcs share an endpoint, so the
/// previous arc's last point is dropped; a negative index `!i` walks arc `i`
/// backwards.
fn stitch_ring(indices: &[i64], arcs: &[Vec<[f64; 2]>]) -> Result<Ring, ApiError> {
    let mut ring: Ring = Vec::new();
    for &index in indices {
        let (slot, reversed) = if index < 0 {
            (!index as usize, true)
        } else {
            (index as usize, false)
        };
        let arc = arcs
            .get(slot)
            .ok_or_else(|| ApiError::Geometry(format!("arc {slot} out of range")))?;

        ring.pop();
        if reversed {
            ring.extend(arc.iter().rev().copied());
        } else {
            ring.extend(arc.iter().copied());
        }
    }
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_topology() -> Topology {
        // Two arcs forming a unit square, quantized with a 0.5 scale.
        serde_json::from_str(
            r#"{
                "type": "Topology",
                "transform": {"scale": [0.5, 0.5], "translate": [10, 20]},
                "arcs": [
                    [[0, 0], [2, 0], [0, 2]],
                    [[2, 2], [-2, 0], [0, -2]]
                ],
                "objects": {
                    "countries": {
                        "type": "GeometryCollection",
                        "geometries": [
                            {"type": "Polygon", "id": "250", "arcs": [[0, 1]], "properties": {"name": "France"}},
                            {"type": "MultiPolygon", "id": 392, "arcs": [[[-1]]], "properties": {"name": "Japan"}},
                            {"type": "Point", "coordinates": [0, 0]}
                        ]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_quantized_square() {
        let atlas = square_topology().countries().unwrap();
        let france = &atlas[0];
        assert_eq!(france.name, "France");
        assert_eq!(france.id.as_deref(), Some("250"));

        let ring = &france.polygons[0][0];
        assert_eq!(
            ring,
            &vec![[10.0, 20.0], [11.0, 20.0], [11.0, 21.0], [10.0, 21.0], [10.0, 20.0]]
        );
    }

    #[test]
    fn negative_index_reverses_arc() {
        let atlas = square_topology().countries().unwrap();
        let japan = &atlas[1];
        assert_eq!(japan.id.as_deref(), Some("392"));
        assert_eq!(
            japan.polygons[0][0],
            vec![[11.0, 21.0], [11.0, 20.0], [10.0, 20.0]]
        );
    }

    #[test]
    fn missing_object_is_reported() {
        let err = square_topology().object("land").unwrap_err();
        assert!(matches!(err, ApiError::Geometry(_)));
    }

    #[test]
    fn out_of_range_arc_is_reported() {
        let topology: Topology = serde_json::from_str(
            r#"{"arcs": [], "objects": {"countries": {"type": "Polygon", "arcs": [[3]]}}}"#,
        )
        .unwrap();
        assert!(topology.countries().is_err());
    }
}
