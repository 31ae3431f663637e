//! Geo point reduction tool
//!
//! Reads geographic points from CSV files, groups nearby points into
//! density-based clusters, and writes one representative point per cluster.

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;

mod cluster;

#[cfg(test)]
mod main_test;

use cluster::{Point, PointList, ReduceError, reduce};

#[derive(Parser)]
#[command(name = "geo_reduce")]
#[command(about = "Geo point reduction tool", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns
    #[arg(short, long, default_value = "points.csv")]
    input: PathBuf,

    /// Output CSV file with representative points (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Clustering radius in kilometers (points within this great-circle
    /// distance are grouped together)
    #[arg(short, long, default_value_t = 0.01)]
    radius: f64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let points = match read_points(&args.input) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };

    if points.is_empty() {
        eprintln!("No points found in CSV file");
        std::process::exit(1);
    }

    if args.debug {
        println!("Read {} points from {:?}", points.len(), args.input);
        println!("Reducing with radius {:.4} km", args.radius);
    }

    let reduced = match reduce(&points, args.radius) {
        Ok(reduced) => reduced,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.debug {
        println!(
            "Reduced {} points to {} representatives",
            points.len(),
            reduced.len()
        );
    }

    match args.output {
        None => {
            // Output to stdout as simple list of points
            for point in &reduced {
                println!("{},{}", point.lat, point.lng);
            }
        }
        Some(output_file) => {
            if let Err(e) = write_points_to_csv(&output_file, &reduced) {
                eprintln!("Error writing CSV: {}", e);
                std::process::exit(1);
            }
            if args.debug {
                println!("Representative points written to {:?}", output_file);
            }
        }
    }
}

/// Reads points from a CSV file
///
/// Expected format: `latitude,longitude` (header row is optional)
fn read_points(filename: &PathBuf) -> Result<PointList, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    if records.is_empty() {
        return Ok(PointList::new());
    }

    // Determine if first row is header
    let has_header = records[0][0].trim().parse::<f64>().is_err();
    let start_idx = if has_header { 1 } else { 0 };

    let mut points = PointList::new();
    for (row, record) in records.iter().enumerate().skip(start_idx) {
        points.push(parse_record(record, row + 1)?);
    }

    Ok(points)
}

/// Parses a single CSV record into a point
///
/// A record must hold exactly two numeric fields; anything else is a
/// malformed entry and fails the whole run
fn parse_record(record: &csv::StringRecord, row: usize) -> Result<Point, ReduceError> {
    if record.len() != 2 {
        return Err(ReduceError::InvalidInput(format!(
            "row {}: expected 2 fields, got {}",
            row,
            record.len()
        )));
    }

    let lat = record[0].trim().parse::<f64>().map_err(|_| {
        ReduceError::InvalidInput(format!(
            "row {}: latitude {:?} is not a number",
            row, &record[0]
        ))
    })?;
    let lng = record[1].trim().parse::<f64>().map_err(|_| {
        ReduceError::InvalidInput(format!(
            "row {}: longitude {:?} is not a number",
            row, &record[1]
        ))
    })?;

    Ok(Point::new(lat, lng))
}

/// Writes representative points to output CSV
///
/// Format: `latitude,longitude` with a header row
fn write_points_to_csv(
    output_file: &PathBuf,
    points: &PointList,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);

    writer.write_record(["latitude", "longitude"])?;
    for point in points {
        writer.write_record([point.lat.to_string(), point.lng.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
