#[cfg(test)]
mod tests {
    use crate::cluster::{Point, reduce};
    use crate::{parse_record, read_points};
    use csv::StringRecord;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_main_pipeline() {
        // Create a test CSV file
        let test_csv = "latitude,longitude
40.7128,-74.0060
40.7130,-74.0062
40.7132,-74.0064
40.7500,-73.9900
40.7502,-73.9902
41.0000,-74.0000";

        let test_file = PathBuf::from("test_points_geo_reduce.csv");
        fs::write(&test_file, test_csv).expect("Failed to create test CSV");

        let points = read_points(&test_file).expect("Failed to read CSV");
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(40.7128, -74.0060));

        // Two tight groups of pings plus one lone point
        let reduced = reduce(&points, 0.1).expect("Failed to reduce points");
        assert_eq!(reduced.len(), 3);
        for point in &reduced {
            assert!(points.contains(point));
        }
        assert_eq!(reduced[2], Point::new(41.0, -74.0));

        // Clean up
        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_without_header() {
        let test_csv = "1.0,2.0\n3.0,4.0\n";
        let test_file = PathBuf::from("test_points_no_header.csv");
        fs::write(&test_file, test_csv).expect("Failed to create test CSV");

        let points = read_points(&test_file).expect("Failed to read CSV");
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);

        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_empty_file() {
        let test_file = PathBuf::from("test_points_empty.csv");
        fs::write(&test_file, "").expect("Failed to create test CSV");

        let points = read_points(&test_file).expect("Failed to read CSV");
        assert!(points.is_empty());

        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_malformed_row_fails() {
        // Second row is missing the longitude field
        let test_csv = "40.0,-73.0\n40.1\n";
        let test_file = PathBuf::from("test_points_malformed.csv");
        fs::write(&test_file, test_csv).expect("Failed to create test CSV");

        let result = read_points(&test_file);
        assert!(result.is_err());

        fs::remove_file(&test_file).ok();
    }

    #[test]
    fn test_read_points_missing_file() {
        let result = read_points(&PathBuf::from("no_such_points_file.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_record() {
        let record = StringRecord::from(vec!["40.7128", " -74.0060 "]);
        let point = parse_record(&record, 1).expect("Failed to parse record");
        assert_eq!(point, Point::new(40.7128, -74.0060));

        let too_many = StringRecord::from(vec!["40.0", "-73.0", "extra"]);
        assert!(parse_record(&too_many, 1).is_err());

        let not_a_number = StringRecord::from(vec!["40.0", "east"]);
        assert!(parse_record(&not_a_number, 1).is_err());
    }
}
