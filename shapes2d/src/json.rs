// JSON shape documents: tagged by "kind", points as {"x","y"} objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ShapeError, ShapeResult};
use crate::geometry::limits;
use crate::model::Point;
use crate::shapes::arc::{Arc, Sector};
use crate::shapes::circle::Circle;
use crate::shapes::ellipse::Ellipse;
use crate::shapes::polygon::{Polygon, PolygonKind};
use crate::shapes::segment::Segment;
use crate::shapes::shape::Shape;

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ShapeDoc {
    Segment { p1: Point, p2: Point },
    Polygon { vertices: Vec<Point> },
    Triangle { vertices: Vec<Point> },
    Quadrilateral { vertices: Vec<Point> },
    Rect { location: Point, width: f64, height: f64 },
    Square { location: Point, width: f64 },
    Circle { center: Point, radius: f64 },
    Ellipse { center: Point, width: f64, height: f64 },
    Arc { from: Point, to: Point, center: Point },
    Sector { from: Point, to: Point, center: Point },
}

pub fn shape_to_json(shape: &Shape) -> Value {
    let doc = match shape {
        Shape::Segment(s) => ShapeDoc::Segment { p1: s.p1, p2: s.p2 },
        Shape::Polygon(p) => {
            let vertices = p.vertices().to_vec();
            match p.kind() {
                PolygonKind::Generic => ShapeDoc::Polygon { vertices },
                PolygonKind::Triangle => ShapeDoc::Triangle { vertices },
                PolygonKind::Quadrilateral => ShapeDoc::Quadrilateral { vertices },
                PolygonKind::Rect { width, height } => ShapeDoc::Rect { location: vertices[0], width, height },
                PolygonKind::Square { width } => ShapeDoc::Square { location: vertices[0], width },
            }
        }
        Shape::Circle(c) => ShapeDoc::Circle { center: c.center, radius: c.radius },
        Shape::Ellipse(e) => ShapeDoc::Ellipse { center: e.center, width: e.width, height: e.height },
        Shape::Arc(a) => ShapeDoc::Arc { from: a.from, to: a.to, center: a.center },
        Shape::Sector(s) => ShapeDoc::Sector { from: s.arc.from, to: s.arc.to, center: s.arc.center },
    };
    // Only f64 fields and enums: serialization cannot fail
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

fn check_point(p: &Point, param: &'static str) -> ShapeResult<()> {
    if !p.is_finite() {
        return Err(ShapeError::NonFinite(param));
    }
    for v in [p.x, p.y] {
        if !limits::in_coord_bounds(v) {
            return Err(ShapeError::OutOfBounds { param, got: v });
        }
    }
    Ok(())
}

fn check_extent(v: f64, param: &'static str) -> ShapeResult<()> {
    if !v.is_finite() {
        return Err(ShapeError::NonFinite(param));
    }
    if !limits::in_extent_bounds(v) {
        return Err(ShapeError::OutOfBounds { param, got: v });
    }
    Ok(())
}

// Ellipse axes must be strictly positive; a zero axis collapses the conic onto a line.
fn check_axis(v: f64, param: &'static str) -> ShapeResult<()> {
    check_extent(v, param)?;
    if v == 0.0 {
        return Err(ShapeError::OutOfBounds { param, got: v });
    }
    Ok(())
}

fn check_vertices(vertices: &[Point]) -> ShapeResult<()> {
    if vertices.len() > limits::MAX_POLYGON_VERTICES {
        return Err(ShapeError::CapsExceeded { what: "vertices", max: limits::MAX_POLYGON_VERTICES, got: vertices.len() });
    }
    vertices.iter().try_for_each(|p| check_point(p, "vertex"))
}

/// Parse and validate a shape document: bounds, caps, then the structural checks of
/// the shape constructors.
pub fn shape_from_json_strict(v: Value) -> ShapeResult<Shape> {
    let doc: ShapeDoc = serde_json::from_value(v).map_err(|e| {
        tracing::debug!(error = %e, "rejected shape document");
        ShapeError::from(e)
    })?;
    let shape = match doc {
        ShapeDoc::Segment { p1, p2 } => {
            check_point(&p1, "p1")?;
            check_point(&p2, "p2")?;
            Shape::Segment(Segment::new(p1, p2))
        }
        ShapeDoc::Polygon { vertices } => {
            check_vertices(&vertices)?;
            Shape::Polygon(Polygon::new(vertices)?)
        }
        ShapeDoc::Triangle { vertices } => {
            check_vertices(&vertices)?;
            Shape::Polygon(Polygon::triangle(vertices)?)
        }
        ShapeDoc::Quadrilateral { vertices } => {
            check_vertices(&vertices)?;
            Shape::Polygon(Polygon::quadrilateral(vertices)?)
        }
        ShapeDoc::Rect { location, width, height } => {
            check_point(&location, "location")?;
            check_extent(width, "width")?;
            check_extent(height, "height")?;
            Shape::Polygon(Polygon::rect(location, width, height))
        }
        ShapeDoc::Square { location, width } => {
            check_point(&location, "location")?;
            check_extent(width, "width")?;
            Shape::Polygon(Polygon::square(location, width))
        }
        ShapeDoc::Circle { center, radius } => {
            check_point(&center, "center")?;
            check_extent(radius, "radius")?;
            Shape::Circle(Circle::new(center, radius))
        }
        ShapeDoc::Ellipse { center, width, height } => {
            check_point(&center, "center")?;
            check_axis(width, "width")?;
            check_axis(height, "height")?;
            Shape::Ellipse(Ellipse::new(center, width, height))
        }
        ShapeDoc::Arc { from, to, center } => {
            check_point(&from, "from")?;
            check_point(&to, "to")?;
            check_point(&center, "center")?;
            Shape::Arc(Arc::new(from, to, center))
        }
        ShapeDoc::Sector { from, to, center } => {
            check_point(&from, "from")?;
            check_point(&to, "to")?;
            check_point(&center, "center")?;
            Shape::Sector(Sector::new(from, to, center))
        }
    };
    Ok(shape)
}

/// Like [`shape_from_json_strict`] but only a segment document is accepted.
pub fn segment_from_json_strict(v: Value) -> ShapeResult<Segment> {
    match shape_from_json_strict(v)? {
        Shape::Segment(s) => Ok(s),
        other => Err(ShapeError::UnexpectedKind { expected: "segment", got: other.kind().as_str() }),
    }
}

/// Parse from text, then validate as [`shape_from_json_strict`].
pub fn shape_from_str(s: &str) -> ShapeResult<Shape> { shape_from_json_strict(serde_json::from_str(s)?) }
