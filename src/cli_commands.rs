use std::fs::File;
use std::io::{self, Write};
use wktlib::serialization::{read, read_each};
use wktlib::{Geometry, Wkt, WktConfig};

// Resolve the input argument: `-` reads standard input
fn load_input(input: String) -> Result<String, String> {
    if input == "-" {
        io::read_to_string(io::stdin()).map_err(|e| format!("Failed to read stdin: {e}"))
    } else {
        Ok(input)
    }
}

fn describe(geom: &Geometry) -> String {
    match geom {
        Geometry::Point(c) => format!("coordinates ({}, {})", c.x, c.y),
        Geometry::Polygon(rings) => format!(
            "{} ring(s), {} vertices in the outer ring",
            rings.len(),
            rings.first().map_or(0, Vec::len)
        ),
        Geometry::GeometryCollection(members) => {
            let kinds: Vec<String> = members.iter().map(|m| m.kind().to_string()).collect();
            format!("{} member(s): {}", members.len(), kinds.join(", "))
        }
        _ => format!(
            "{} component(s), {} coordinates",
            geom.num_components(),
            geom.num_coordinates()
        ),
    }
}

/// Parse an input document and print some details about each geometry
pub fn inspect(input: String, config: WktConfig) -> Result<(), String> {
    let document = load_input(input)?;
    let results = read_each(&document, &config);
    let total = results.len();
    let mut failed = 0;

    for (idx, res) in results.iter().enumerate() {
        match res {
            Ok(geom) => {
                let state = if geom.is_empty() { " (empty)" } else { "" };
                println!("Geometry {idx}: {}{state}", geom.kind());
                println!("  {}", describe(geom));
            }
            Err(e) => {
                failed += 1;
                println!("Geometry {idx}: failed to parse WKT: {e}");
            }
        }
    }

    if failed > 0 {
        Err(format!("{failed} of {total} geometries could not be parsed"))
    } else {
        Ok(())
    }
}

/// Parse an input document and write it back in canonical form, optionally to a file
pub fn normalize(input: String, output_path: Option<String>, config: WktConfig) -> Result<(), String> {
    let document = load_input(input)?;
    let mut wkt = Wkt::with_config(config).map_err(|e| e.to_string())?;
    wkt.read(&document)
        .map_err(|e| format!("Failed to parse WKT: {e}"))?;
    let normalized = wkt.write();

    match output_path {
        None => {
            println!("{normalized}");
            Ok(())
        }
        Some(ref fp) => {
            let mut file = match File::create(fp) {
                Ok(f) => f,
                Err(e) => return Err(format!("Failed to create file: {}", e)),
            };
            match file.write_all(normalized.as_bytes()) {
                Err(e) => Err(format!("Failed to write to file: {e}")),
                Ok(_) => {
                    log::info!("Wrote {} geometries to '{fp}'", wkt.components.len());
                    Ok(())
                }
            }
        }
    }
}

/// Parse an input document and print each geometry as GeoJSON
pub fn geojson(input: String, config: WktConfig) -> Result<(), String> {
    let document = load_input(input)?;
    let geoms = read(&document, &config).map_err(|e| format!("Failed to parse WKT: {e}"))?;
    for geom in &geoms {
        println!("{}", geom.to_geojson());
    }
    Ok(())
}
