use crate::map::{compute_distance, make_tag, CityMap, GeoLocation, Location};
use std::collections::HashMap;

/// Length of one grid step (0.001 degrees) along the equator, in metres.
pub const GRID_STEP_METRES: f64 = 111.194_926_644_558_75;

/// Four locations with directed edges `A->B (1)`, `B->D (1)`, `A->C (5)` and
/// `C->D (1)`. `D` is tagged `end=yes`, `C` is tagged `amenity=food`.
pub fn diamond_map() -> CityMap {
    let mut city_map = CityMap::new();
    let [a, b, c, d] = ["A", "B", "C", "D"].map(Location::new);
    city_map
        .add_location(a, GeoLocation::new(0., 0.), [make_tag("landmark", "start")])
        .unwrap();
    city_map
        .add_location(b, GeoLocation::new(0., 0.001), [])
        .unwrap();
    city_map
        .add_location(c, GeoLocation::new(0.001, 0.), [make_tag("amenity", "food")])
        .unwrap();
    city_map
        .add_location(d, GeoLocation::new(0.001, 0.001), [make_tag("end", "yes")])
        .unwrap();
    city_map.add_edge(a, b, Some(1.)).unwrap();
    city_map.add_edge(b, d, Some(1.)).unwrap();
    city_map.add_edge(a, c, Some(5.)).unwrap();
    city_map.add_edge(c, d, Some(1.)).unwrap();
    city_map
}

fn grid_location(row: usize, col: usize) -> Location {
    Location::new(&format!("{row},{col}"))
}

/// Build a `rows x cols` grid of locations named `"row,col"`, placed 0.001
/// degrees apart starting at the origin and tagged `row=<row>` and
/// `col=<col>`. Neighbouring cells are joined in both directions with the
/// cost returned by `edge_cost`.
fn build_grid(
    rows: usize,
    cols: usize,
    edge_cost: impl Fn(&GeoLocation, &GeoLocation, usize) -> f64,
) -> CityMap {
    let mut city_map = CityMap::new();
    for row in 0..rows {
        for col in 0..cols {
            city_map
                .add_location(
                    grid_location(row, col),
                    GeoLocation::new(row as f64 * 0.001, col as f64 * 0.001),
                    [
                        make_tag("row", &row.to_string()),
                        make_tag("col", &col.to_string()),
                    ],
                )
                .unwrap();
        }
    }
    let mut edge_index = 0;
    for row in 0..rows {
        for col in 0..cols {
            let here = grid_location(row, col);
            let neighbours = [(row + 1, col), (row, col + 1)];
            for (next_row, next_col) in neighbours {
                if next_row >= rows || next_col >= cols {
                    continue;
                }
                edge_index += 1;
                let there = grid_location(next_row, next_col);
                let cost = edge_cost(
                    city_map.geo_location(here).unwrap(),
                    city_map.geo_location(there).unwrap(),
                    edge_index,
                );
                city_map.connect(here, there, Some(cost)).unwrap();
            }
        }
    }
    city_map
}

/// Grid with unit cost edges.
pub fn grid_map(rows: usize, cols: usize) -> CityMap {
    build_grid(rows, cols, |_, _, _| 1.)
}

/// Grid whose edge costs are the straight-line distance scaled by a factor
/// in `[1.05, 1.95)`. The factors follow the golden ratio sequence, so
/// distinct routes practically never tie.
pub fn weighted_grid_map(rows: usize, cols: usize) -> CityMap {
    build_grid(rows, cols, |from, to, edge_index| {
        let factor = 1.05 + 0.9 * (edge_index as f64 * 0.618_033_988_749_895).fract();
        compute_distance(from, to) * factor
    })
}

/// Floyd-Warshall over the whole map, as a reference for search results.
pub fn all_pairs_shortest_paths(city_map: &CityMap) -> HashMap<(Location, Location), f64> {
    let locations: Vec<Location> = city_map.locations().keys().copied().collect();
    let mut distances = HashMap::new();
    for &from in &locations {
        for &to in &locations {
            let distance = if from == to {
                0.
            } else {
                city_map
                    .neighbours(from)
                    .unwrap()
                    .get(&to)
                    .copied()
                    .unwrap_or(f64::INFINITY)
            };
            distances.insert((from, to), distance);
        }
    }
    for &via in &locations {
        for &from in &locations {
            for &to in &locations {
                let through = distances[&(from, via)] + distances[&(via, to)];
                if through < distances[&(from, to)] {
                    distances.insert((from, to), through);
                }
            }
        }
    }
    distances
}

/// Every ordering of `items`.
pub fn permutations<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![vec![]];
    }
    let mut result = vec![];
    for (index, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}
