use shapes2d::{intersection_points, Arc, Circle, Ellipse, Point, Polygon, Sector, Segment, Shape};
use std::time::Instant;

// Cycles through every kind so each dispatcher branch gets exercised.
fn build_shapes(count: usize) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(count);
    for k in 0..count {
        let x = (k % 40) as f64 * 7.5;
        let y = ((k / 40) % 40) as f64 * 6.25;
        let c = Point::new(x, y);
        let shape = match k % 7 {
            0 => Shape::Segment(Segment::new(c, Point::new(x + 20.0, y + 13.0))),
            1 => Shape::Circle(Circle::new(c, 9.0)),
            2 => Shape::Ellipse(Ellipse::new(c, 24.0, 11.0)),
            3 => Shape::Polygon(Polygon::rect(c, 14.0, 9.0)),
            4 => Shape::Polygon(Polygon::square(c, 10.0)),
            5 => Shape::Arc(Arc::new(Point::new(x + 10.0, y), Point::new(x, y + 10.0), c)),
            _ => Shape::Sector(Sector::new(Point::new(x + 12.0, y), Point::new(x, y + 7.0), c)),
        };
        shapes.push(shape);
    }
    shapes
}

// Per-pair timings in milliseconds, sorted once for the quantiles.
struct Timings(Vec<f64>);

impl Timings {
    fn new(mut ms: Vec<f64>) -> Timings {
        ms.sort_by(|a, b| a.total_cmp(b));
        Timings(ms)
    }

    // nearest-rank quantile, q in [0, 1]
    fn quantile(&self, q: f64) -> f64 {
        match self.0.len() {
            0 => 0.0,
            n => self.0[((n - 1) as f64 * q).round() as usize],
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut shapes = 400usize;
    let mut pairs = 20000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--shapes=") { if let Ok(v) = val.parse() { shapes = v; } }
        else if let Some(val) = a.strip_prefix("--pairs=") { if let Ok(v) = val.parse() { pairs = v; } }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }
    let shapes = shapes.max(2);

    let set = build_shapes(shapes);
    let mut times_ms: Vec<f64> = Vec::with_capacity(pairs);
    let start_all = Instant::now();
    let mut points = 0usize;
    let mut hits = 0usize;
    for k in 0..pairs {
        // neighbours in the grid overlap most of the time
        let a = &set[k % shapes];
        let b = &set[(k * 7 + 1) % shapes];
        let t0 = Instant::now();
        let found = intersection_points(a, b);
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(dt);
        if !found.is_empty() { hits += 1; }
        points += found.len();
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    let timings = Timings::new(times_ms);
    let (med, p90, p99) = (timings.quantile(0.5), timings.quantile(0.9), timings.quantile(0.99));
    println!(
        "shapes={} pairs={} hits={} points={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        shapes, pairs, hits, points, dur_all, med, p90, p99
    );
    if let Some(th) = assert_ms {
        if med > th {
            eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th);
            std::process::exit(1);
        }
    }
}
