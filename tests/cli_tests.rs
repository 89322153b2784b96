//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::TempDir;

    use approxmatch::cli::commands::{cmd_check, cmd_distance, run_match};
    use approxmatch::cli::{Cli, Commands, RunArgs};
    use approxmatch::config::RunConfig;
    use approxmatch::distance::DistanceModel;
    use approxmatch::report::ReportFormat;
    use approxmatch::verify::{extract_total, Verification};

    fn write_inputs(dir: &TempDir) -> (PathBuf, PathBuf) {
        let dict = dir.path().join("dict.txt");
        let patterns = dir.path().join("patterns.txt");
        fs::write(&dict, "cat\ncot\ndog\ncat\nkitten\n").unwrap();
        fs::write(&patterns, "cat\nsitting\ndot\n").unwrap();
        (dict, patterns)
    }

    fn run_to_string(run: &RunConfig, format: ReportFormat) -> (usize, String) {
        let mut out = Vec::new();
        let total = run_match(run, format, false, &mut out).unwrap();
        (total, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_match_hamming_report() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);

        let run = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            distance_model: Some(DistanceModel::Hamming),
            k: Some(1),
            show_matches: Some(true),
            ..RunConfig::default()
        };
        let (total, report) = run_to_string(&run, ReportFormat::Text);

        // cat -> cat, cot, cat; sitting -> none; dot -> cot, dog
        assert_eq!(total, 5);
        assert!(report.starts_with("Using distance: hamming\nRead #words = 5\nRead #patterns = 3\n"));
        assert!(report.contains("Pattern: cat (1/3)\n#matches = 3\nMatches: [(0, cat), (1, cot), (3, cat)]"));
        assert!(report.contains("Pattern: sitting (2/3)\n#matches = 0\n"));
        assert_eq!(extract_total(&report, 1), Ok(5));
    }

    #[test]
    fn test_match_levenshtein_with_pattern_limit() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);

        let run = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            distance_model: Some(DistanceModel::Levenshtein),
            k: Some(3),
            pattern_limit: Some(2),
            ..RunConfig::default()
        };
        let (total, report) = run_to_string(&run, ReportFormat::Text);

        // cat -> cat, cot, dog, cat; sitting -> kitten
        assert_eq!(total, 5);
        assert!(report.contains("#patterns = 2, k = 3"));
        assert!(!report.contains("Pattern: dot"));
    }

    #[test]
    fn test_match_json_report() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);

        let run = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            k: Some(0),
            ..RunConfig::default()
        };
        let (total, report) = run_to_string(&run, ReportFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(total, 2);
        assert_eq!(value["totalMatches"], 2);
        assert_eq!(value["patternCount"], 3);
        assert_eq!(value["sets"][0]["matches"][1]["index"], 3);
    }

    #[test]
    fn test_config_file_merged_with_overrides() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);
        let config_path = dir.path().join("run.json");
        let file = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            distance_model: Some(DistanceModel::Levenshtein),
            k: Some(3),
            ..RunConfig::default()
        };
        fs::write(&config_path, serde_json::to_string_pretty(&file).unwrap()).unwrap();

        let overrides = RunConfig::from(RunArgs {
            distance_model: Some(DistanceModel::Hamming),
            k: Some(0),
            ..RunArgs::default()
        });
        let run = RunConfig::load_from(&config_path).unwrap().merge(&overrides);
        let (total, _) = run_to_string(&run, ReportFormat::Text);

        assert_eq!(run.distance_model, Some(DistanceModel::Hamming));
        assert_eq!(total, 2);
    }

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (_, patterns) = write_inputs(&dir);

        let run = RunConfig {
            dict: Some(dir.path().join("missing.txt")),
            patterns: Some(patterns),
            ..RunConfig::default()
        };
        let mut out = Vec::new();
        let err = run_match(&run, ReportFormat::Text, false, &mut out).unwrap_err();

        assert!(format!("{:#}", err).contains("missing.txt"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_paths_rejected() {
        let mut out = Vec::new();
        assert!(run_match(&RunConfig::default(), ReportFormat::Text, false, &mut out).is_err());
    }

    #[test]
    fn test_check_report_file() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);
        let run = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            k: Some(1),
            ..RunConfig::default()
        };
        let (total, report) = run_to_string(&run, ReportFormat::Text);
        let report_path = dir.path().join("res.txt");
        fs::write(&report_path, report).unwrap();

        assert_eq!(
            cmd_check(&report_path, total, 1).unwrap(),
            Verification::Match { actual: total }
        );
        assert_eq!(
            cmd_check(&report_path, total + 1, 1).unwrap(),
            Verification::Mismatch {
                actual: total,
                expected: total + 1
            }
        );
        assert!(cmd_check(&dir.path().join("nope.txt"), 0, 1).is_err());
    }

    #[test]
    fn test_parse_match_arguments() {
        let cli = Cli::try_parse_from([
            "approxmatch", "match", "dict.txt", "q.txt", "-D", "lev", "-k", "2", "-p", "-1", "--show-matches",
        ])
        .unwrap();

        match cli.command {
            Commands::Match { run, format, .. } => {
                assert_eq!(format, ReportFormat::Text);

                let run = RunConfig::from(run);
                assert_eq!(run.dict, Some(PathBuf::from("dict.txt")));
                assert_eq!(run.patterns, Some(PathBuf::from("q.txt")));
                assert_eq!(run.distance_model, Some(DistanceModel::Levenshtein));
                assert_eq!(run.k, Some(2));
                assert_eq!(run.pattern_limit, Some(-1));
                assert_eq!(run.show_matches, Some(true));
                assert_eq!(run.word_limit, None);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_show_matches_flag_absent_leaves_config_value() {
        let cli = Cli::try_parse_from(["approxmatch", "match", "-c", "run.json"]).unwrap();

        match cli.command {
            Commands::Match { run, config, .. } => {
                assert_eq!(config, Some(PathBuf::from("run.json")));
                let run = RunConfig::from(run);
                assert_eq!(run.show_matches, None);
                assert_eq!(run.dict, None);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_match_zero_pattern_limit_processes_all() {
        let dir = TempDir::new().unwrap();
        let (dict, patterns) = write_inputs(&dir);

        let run = RunConfig {
            dict: Some(dict),
            patterns: Some(patterns),
            k: Some(1),
            pattern_limit: Some(0),
            ..RunConfig::default()
        };
        let (total, report) = run_to_string(&run, ReportFormat::Text);

        assert_eq!(total, 5);
        assert!(report.contains("#patterns = 3, k = 1"));
    }

    #[test]
    fn test_distance_command() {
        assert_eq!(cmd_distance("kitten", "sitting", DistanceModel::Levenshtein).unwrap(), 3);
        assert_eq!(cmd_distance("cat", "cot", DistanceModel::Hamming).unwrap(), 1);

        let err = cmd_distance("cat", "cats", DistanceModel::Hamming).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Cannot compare \"cat\" and \"cats\""));
        assert!(message.contains("equal lengths, got 3 and 4"));
    }

    #[test]
    fn test_parse_rejects_unknown_model() {
        assert!(Cli::try_parse_from(["approxmatch", "distance", "a", "b", "-D", "jaro"]).is_err());
    }
}
