// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load a CityJSON file and print mesh statistics.
//!
//! Pass a file path as the first argument, or run without arguments to use
//! the bundled two-cube fixture. Rendering is out of scope for this crate;
//! the printed mesh is what a visualization collaborator would consume.
//!
//! ```text
//! cargo run --example mesh_stats -- data/rotterdam.city.json
//! ```

use cityjson_lite_geometry::CityJsonReader;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join("twocube.city.json")
    });

    let reader = match CityJsonReader::open(&path) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", path.display());
            process::exit(1);
        }
    };

    let document = reader.document();
    let mesh = reader.mesh();

    println!("=== {} ===", path.display());
    println!(
        "CityJSON version: {}",
        document.version.as_deref().unwrap_or("unspecified")
    );
    println!("City objects: {}", document.object_count());
    println!("Points: {}", mesh.point_count());
    println!("Polygons: {}", mesh.polygon_count());

    if mesh.polygon_count() > 0 {
        let mut per_type: BTreeMap<&str, usize> = BTreeMap::new();
        for kind in mesh.object_types() {
            *per_type.entry(kind).or_default() += 1;
        }
        println!("Polygons by object type:");
        for (kind, count) in &per_type {
            println!("  {kind}: {count}");
        }
    }

    if mesh.point_count() > 0 {
        let (min, max) = mesh.bounds();
        println!(
            "Bounds: min=({:.2}, {:.2}, {:.2}), max=({:.2}, {:.2}, {:.2})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
}
