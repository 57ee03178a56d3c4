//! Shape descriptors produced by the creation session.

use crate::geo::{Bounds, Geometry, LayerHandle, Point};

/// A polygon ring needs at least this many vertices
pub const MIN_POLYGON_VERTICES: usize = 3;

/// The kinds of shape that can be drawn. Also used as the creation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Box, ShapeKind::Circle, ShapeKind::Polygon]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box { northeast: Point, southwest: Point },
    Circle { center: Point, radius_m: f64 },
    Polygon { vertices: Vec<Point> },
}

impl Shape {
    /// Box spanning two opposite corners, in any order
    pub fn box_from_corners(a: Point, b: Point) -> Self {
        let bounds = Bounds::from_corners(a, b);
        Shape::Box {
            northeast: bounds.northeast,
            southwest: bounds.southwest,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Shape::Box {
                northeast,
                southwest,
            } => Geometry::Rectangle(Bounds {
                northeast: *northeast,
                southwest: *southwest,
            }),
            Shape::Circle { center, radius_m } => Geometry::Circle {
                center: *center,
                radius_m: *radius_m,
            },
            Shape::Polygon { vertices } => Geometry::Polygon(vertices.clone()),
        }
    }

    /// Human readable description, one line per fact
    pub fn info_lines(&self) -> Vec<String> {
        match self {
            Shape::Box {
                northeast,
                southwest,
            } => {
                let bounds = Bounds {
                    northeast: *northeast,
                    southwest: *southwest,
                };
                vec![
                    format!("NW: {}", bounds.northwest()),
                    format!("NE: {}", bounds.northeast),
                    format!("SE: {}", bounds.southeast()),
                    format!("SW: {}", bounds.southwest),
                ]
            }
            Shape::Circle { center, radius_m } => vec![
                format!("Center: {}", center),
                format!("Radius: {:.2} meters", radius_m),
            ],
            Shape::Polygon { vertices } => vertices
                .iter()
                .enumerate()
                .map(|(i, p)| format!("Point {}: {}", i + 1, p))
                .collect(),
        }
    }
}

/// A finalized shape together with the surface layer that renders it
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub shape: Shape,
    pub layer: LayerHandle,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// List title such as "Circle 2" (`index` is zero-based)
    pub fn title(&self, index: usize) -> String {
        format!("{} {}", self.kind().name(), index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_from_corners_any_order() {
        let a = Shape::box_from_corners(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Shape::box_from_corners(Point::new(1.0, 1.0), Point::new(0.0, 0.0));
        let c = Shape::box_from_corners(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
        let expected = Shape::Box {
            northeast: Point::new(1.0, 1.0),
            southwest: Point::new(0.0, 0.0),
        };
        assert_eq!(a, expected);
        assert_eq!(b, expected);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_box_info_lists_all_corners() {
        let shape = Shape::box_from_corners(Point::new(51.5, -0.1), Point::new(51.6, -0.2));
        assert_eq!(
            shape.info_lines(),
            vec![
                "NW: 51.6000, -0.2000",
                "NE: 51.6000, -0.1000",
                "SE: 51.5000, -0.1000",
                "SW: 51.5000, -0.2000",
            ]
        );
    }

    #[test]
    fn test_circle_info() {
        let shape = Shape::Circle {
            center: Point::new(51.505, -0.09),
            radius_m: 123.456,
        };
        assert_eq!(
            shape.info_lines(),
            vec!["Center: 51.5050, -0.0900", "Radius: 123.46 meters"]
        );
    }

    #[test]
    fn test_polygon_info_is_one_based() {
        let shape = Shape::Polygon {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
            ],
        };
        let lines = shape.info_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Point 1: 0.0000, 0.0000");
        assert_eq!(lines[2], "Point 3: 1.0000, 1.0000");
    }

    #[test]
    fn test_geometry_matches_kind() {
        let circle = Shape::Circle {
            center: Point::new(1.0, 2.0),
            radius_m: 50.0,
        };
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert_eq!(
            circle.geometry(),
            Geometry::Circle {
                center: Point::new(1.0, 2.0),
                radius_m: 50.0
            }
        );
    }

    #[test]
    fn test_descriptor_title() {
        let descriptor = ShapeDescriptor {
            shape: Shape::Polygon { vertices: vec![] },
            layer: LayerHandle(7),
        };
        assert_eq!(descriptor.title(0), "Polygon 1");
        assert_eq!(descriptor.title(4), "Polygon 5");
    }

    #[test]
    fn test_all_kinds() {
        let all = ShapeKind::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&ShapeKind::Box));
        assert!(all.contains(&ShapeKind::Circle));
        assert!(all.contains(&ShapeKind::Polygon));
    }
}
