//! Line-oriented readers for the adjacency and coordinate files.
//!
//! Adjacency lines are whitespace-separated: `<location> <neighbor> ...`.
//! Coordinate lines are comma-separated: `<location>,<lat>,<lon>`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::WrapErr;

use crate::{
    geo::{Coordinate, CoordinateStore},
    graph::Graph,
};

pub fn read_adjacency(path: impl AsRef<Path>) -> eyre::Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open adjacency file {}", path.display()))?;

    parse_adjacency(BufReader::new(file))
        .wrap_err_with(|| format!("failed to read adjacency file {}", path.display()))
}

/// Blank lines are skipped. A line with a single token registers that
/// location without adding edges.
pub fn parse_adjacency(reader: impl BufRead) -> eyre::Result<Graph> {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.wrap_err_with(|| format!("line {}", index + 1))?;
        let mut tokens = line.split_whitespace();

        let Some(location) = tokens.next() else {
            log::trace!("adjacency line {} is blank", index + 1);
            continue;
        };

        graph.add_record(location, tokens);
    }

    log::debug!(
        "parsed {} locations, {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

pub fn read_coordinates(path: impl AsRef<Path>) -> eyre::Result<CoordinateStore> {
    let path = path.as_ref();
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open coordinates file {}", path.display()))?;

    parse_coordinates(BufReader::new(file))
        .wrap_err_with(|| format!("failed to read coordinates file {}", path.display()))
}

pub fn parse_coordinates(reader: impl BufRead) -> eyre::Result<CoordinateStore> {
    let mut store = CoordinateStore::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.wrap_err_with(|| format!("line {}", number))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, lat, lon] = fields.as_slice() else {
            eyre::bail!(
                "line {}: expected `location,lat,lon`, got {:?}",
                number,
                line
            );
        };

        let lat: f64 = lat
            .parse()
            .wrap_err_with(|| format!("line {}: invalid latitude {:?}", number, lat))?;
        let lon: f64 = lon
            .parse()
            .wrap_err_with(|| format!("line {}: invalid longitude {:?}", number, lon))?;

        if store.insert(*name, Coordinate::new(lat, lon)).is_some() {
            log::warn!("line {}: coordinates for {} replaced", number, name);
        }
    }

    log::debug!("parsed coordinates for {} locations", store.len());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_lines_become_symmetric_edges() {
        let input = "Anthony Bluff_City Argonia\n\nArgonia Rago\n   \nMayfield\n";
        let graph = parse_adjacency(input.as_bytes()).unwrap();

        assert_eq!(graph.len(), 5);
        assert!(graph.contains("Mayfield"));

        let rago = graph.lookup("Rago").unwrap();
        let argonia = graph.lookup("Argonia").unwrap();
        assert_eq!(graph.neighbors(rago), [argonia]);
        assert_eq!(graph.neighbors(argonia).len(), 2);
    }

    #[test]
    fn tokens_are_trimmed_and_case_sensitive() {
        let graph = parse_adjacency("  Wichita\tDerby  \nwichita Derby\n".as_bytes()).unwrap();

        assert!(graph.contains("Wichita"));
        assert!(graph.contains("wichita"));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn coordinate_lines_parse() {
        let input = "Abilene,38.9220277,-97.2666667\n\n Andale , 37.7944000 , -97.6293000\n";
        let store = parse_coordinates(input.as_bytes()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("Abilene"), Some(Coordinate::new(38.9220277, -97.2666667)));
        assert_eq!(store.get("Andale"), Some(Coordinate::new(37.7944, -97.6293)));
    }

    #[test]
    fn wrong_field_count_names_the_line() {
        let err = parse_coordinates("A,1,2\nB,3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn bad_number_names_the_line() {
        let err = parse_coordinates("A,north,2\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid latitude \"north\"");
    }

    #[test]
    fn later_coordinates_win() {
        let store = parse_coordinates("A,1,2\nA,3,4\n".as_bytes()).unwrap();
        assert_eq!(store.get("A"), Some(Coordinate::new(3.0, 4.0)));
    }
}
