//! Tests for command-line parsing and target processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use simplelog::LevelFilter;
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tileseam::io::cli::{Cli, PuzzleProcessor};
    use tileseam::io::configuration::{ACCURACY_FACTOR, BORDER_THICKNESS, DEFAULT_SEED};
    use tileseam::io::image::{export_png, save_tiles};
    use tileseam::spatial::grid::GridShape;
    use tileseam::spatial::synthetic::{seam_image, seam_tiles};

    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "puzzle.png"]);

        assert_eq!(cli.target, PathBuf::from("puzzle.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.thickness, BORDER_THICKNESS);
        assert_eq!(cli.accuracy, ACCURACY_FACTOR);
        assert!(!cli.exclude_self);
        assert!(!cli.quiet);
        assert!(cli.output.is_none());
        assert!(cli.save_tiles.is_none());
        assert!(cli.should_show_progress());
        assert_eq!(cli.shape().unwrap(), None);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "pieces",
            "--rows",
            "2",
            "--cols",
            "5",
            "--seed",
            "9",
            "--thickness",
            "3",
            "--accuracy",
            "95.5",
            "--exclude-self",
            "--output",
            "out.png",
            "--save-tiles",
            "tiles",
            "--quiet",
        ]);

        assert_eq!(cli.seed, 9);
        assert_eq!(cli.thickness, 3);
        assert_eq!(cli.accuracy, 95.5);
        assert!(cli.exclude_self);
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.save_tiles, Some(PathBuf::from("tiles")));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.shape().unwrap(), Some(GridShape::new(2, 5).unwrap()));

        let config = cli.config(cli.shape().unwrap());
        assert_eq!(config.border_thickness, 3);
        assert!(config.exclude_self);
    }

    // A single dimension implies a square grid
    #[test]
    fn test_single_dimension_is_square() {
        let rows_only = Cli::parse_from(["program", "a.png", "-r", "3"]);
        let cols_only = Cli::parse_from(["program", "a.png", "-c", "4"]);
        let zero = Cli::parse_from(["program", "a.png", "-r", "0"]);

        assert_eq!(rows_only.shape().unwrap(), Some(GridShape::new(3, 3).unwrap()));
        assert_eq!(cols_only.shape().unwrap(), Some(GridShape::new(4, 4).unwrap()));
        assert!(zero.shape().is_err());
    }

    #[test]
    fn test_log_level_flags() {
        assert_eq!(Cli::parse_from(["p", "a.png"]).log_level(), LevelFilter::Info);
        assert_eq!(Cli::parse_from(["p", "a.png", "-v"]).log_level(), LevelFilter::Debug);
        assert_eq!(Cli::parse_from(["p", "a.png", "-vv"]).log_level(), LevelFilter::Trace);
        assert_eq!(Cli::parse_from(["p", "a.png", "-q", "-v"]).log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_output_path_beside_target() {
        assert_eq!(
            PuzzleProcessor::get_output_path(Path::new("dir/photo.png")),
            PathBuf::from("dir/photo_result.png")
        );
        assert_eq!(
            PuzzleProcessor::get_output_path(Path::new("pieces")),
            PathBuf::from("pieces_result.png")
        );
    }

    // An image target is sliced, scrambled, solved and written back out
    #[test]
    fn test_process_image_target() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("seams.png");
        let shape = GridShape::new(3, 3).unwrap();
        export_png(&seam_image(shape, 16).unwrap(), &source).unwrap();

        let tiles_dir = temp.path().join("tiles");
        let cli = Cli::parse_from([
            OsStr::new("program"),
            source.as_os_str(),
            OsStr::new("--rows"),
            OsStr::new("3"),
            OsStr::new("--save-tiles"),
            tiles_dir.as_os_str(),
            OsStr::new("--quiet"),
        ]);
        let outcome = PuzzleProcessor::new(cli).process().unwrap();

        assert_eq!(outcome.solved, Some(true));
        assert!(outcome.complete);
        assert_eq!(outcome.output, temp.path().join("seams_result.png"));
        assert!(outcome.output.exists());
        assert!(tiles_dir.join("image_9.png").exists());

        let rebuilt = image::open(&outcome.output).unwrap().to_rgb8();
        assert_eq!(rebuilt, seam_image(shape, 16).unwrap());
    }

    #[test]
    fn test_process_directory_target() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pieces");
        save_tiles(&seam_tiles(GridShape::new(2, 2).unwrap(), 16).unwrap(), &dir).unwrap();

        let output = temp.path().join("out").join("solved.png");
        let cli = Cli::parse_from([
            OsStr::new("program"),
            dir.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
            OsStr::new("-q"),
        ]);
        let outcome = PuzzleProcessor::new(cli).process().unwrap();

        assert_eq!(outcome.order, vec![0, 1, 2, 3]);
        assert_eq!(outcome.solved, None);
        assert!(output.exists());
    }

    #[test]
    fn test_process_rejects_missing_or_foreign_targets() {
        let temp = TempDir::new().unwrap();
        let text = temp.path().join("notes.txt");
        std::fs::write(&text, "not an image").unwrap();

        let absent = temp.path().join("nope");

        let missing = Cli::parse_from([OsStr::new("p"), absent.as_os_str(), OsStr::new("-q")]);
        let foreign = Cli::parse_from([OsStr::new("p"), text.as_os_str(), OsStr::new("-q")]);

        assert!(PuzzleProcessor::new(missing).process().is_err());
        assert!(PuzzleProcessor::new(foreign).process().is_err());
    }
}
