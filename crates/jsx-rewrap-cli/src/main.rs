use anyhow::Result;
use jsx_rewrap_config::Config;
use jsx_rewrap_engine::{io, rewrite_file, timeline_toast_rules};
use std::{env, path::PathBuf, process};

const CONFIRMATION: &str = "✅ Wrapped Timeline render calls in ToastProvider";

fn main() -> Result<()> {
    // Determine test file from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let test_file;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        test_file = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                test_file = config.test_file;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No test file provided and no config file found");
                eprintln!("Usage: {} <test-file-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <test-file-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [test-file-path]", args[0]);
        process::exit(1);
    };

    // Validate the target using engine
    if let Err(e) = io::validate_source_file(&test_file) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Test file '{}'{} is invalid: {e}",
            test_file.display(),
            source
        );
        process::exit(1);
    }

    rewrite_file(&test_file, &timeline_toast_rules())?;
    println!("{CONFIRMATION}");

    Ok(())
}
