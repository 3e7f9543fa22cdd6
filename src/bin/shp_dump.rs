//! Diagnostic: decode shapefiles and print one WKT line per record.
//!
//! Usage: shp_dump [--failsafe] [--parallel] FILE.shp...

use anyhow::{bail, Context};
use shprust::{ShpReader, ShpReaderConfiguration};

fn main() -> anyhow::Result<()> {
    let mut failsafe = false;
    let mut parallel = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--failsafe" => failsafe = true,
            "--parallel" => parallel = true,
            _ => paths.push(arg),
        }
    }
    if paths.is_empty() {
        bail!("usage: shp_dump [--failsafe] [--parallel] FILE.shp...");
    }

    for path in &paths {
        let reader = ShpReader::from_file(path)
            .with_context(|| format!("failed to open {path}"))?
            .with_configuration(ShpReaderConfiguration { failsafe });
        let dataset = if parallel {
            reader.read_parallel()
        } else {
            reader.read()
        }
        .with_context(|| format!("failed to decode {path}"))?;

        let header = dataset.header();
        println!(
            "# {path}: type={} records={} bbox={}",
            header.shape_type,
            dataset.len(),
            header.bounding_box
        );
        for record in &dataset {
            match record.wkt() {
                Some(wkt) => println!("{}\t{}", record.record_number(), wkt),
                None => println!("{}\t<{}>", record.record_number(), record.shape_type()),
            }
        }
        for notification in dataset.notifications() {
            eprintln!("  {notification}");
        }
    }

    Ok(())
}
