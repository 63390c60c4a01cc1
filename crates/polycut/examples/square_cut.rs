//! Cut a square and a U-shaped polygon and print the pieces.
//!
//! Usage:
//!   cargo run -p polycut --example square_cut

use polycut::geom2::{split_polygon, Point2, Polygon};

fn main() {
    let square = Polygon::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
        .expect("square");
    let u = Polygon::from_xy(&[
        (0.0, 0.0),
        (30.0, 0.0),
        (30.0, 30.0),
        (20.0, 30.0),
        (20.0, 10.0),
        (10.0, 10.0),
        (10.0, 30.0),
        (0.0, 30.0),
    ])
    .expect("u shape");

    let cases = [
        ("square", square, Point2::new(5.0, -5.0), Point2::new(5.0, 15.0)),
        ("u-shape", u, Point2::new(-5.0, 20.0), Point2::new(35.0, 20.0)),
    ];
    for (name, poly, start, end) in cases {
        match split_polygon(start, end, &poly) {
            Ok(res) => {
                println!("{name}: {} piece(s)", res.pieces.len());
                for (i, piece) in res.pieces.iter().enumerate() {
                    let pts: Vec<_> = piece.vertices().iter().map(|p| (p.x, p.y)).collect();
                    println!("  piece {i}: area={:.3} {:?}", piece.area(), pts);
                }
                if let (Some(a), Some(b)) = (res.nearest(), res.farthest()) {
                    println!("  extremes: ({}, {}) -> ({}, {})", a.x, a.y, b.x, b.y);
                }
            }
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
}
