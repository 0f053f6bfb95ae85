//! Builds a tree over a handful of city coordinates and finds the nearest city to a
//! few query points.
//!
//! Grounded on kiddo's own `examples/cities.rs`, adapted to this crate's flat
//! `Vec<[f64; 2]>` layout instead of an opaque `KdTree` struct.

use flatkd::{build_tree, find_closest_point, TreeError};

fn main() -> Result<(), TreeError> {
    let mut cities: Vec<[f64; 2]> = vec![
        [51.5072, -0.1276],  // London
        [48.8566, 2.3522],   // Paris
        [52.5200, 13.4050],  // Berlin
        [41.9028, 12.4964],  // Rome
        [40.4168, -3.7038],  // Madrid
        [59.3293, 18.0686],  // Stockholm
        [47.3769, 8.5417],   // Zurich
        [50.0755, 14.4378],  // Prague
    ];

    build_tree::<[f64; 2], 2>(&mut cities);

    let queries = [
        ("near Brussels", [50.8503, 4.3517]),
        ("near Vienna", [48.2082, 16.3738]),
    ];

    for (label, query) in queries {
        let nearest =
            find_closest_point::<[f64; 2], 2>(&query, &cities).ok_or(TreeError::EmptyTree)?;
        println!("{label}: nearest city is {:?}", cities[nearest]);
    }

    Ok(())
}
