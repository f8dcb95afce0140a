use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    env_logger::init();

    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("expand")
                .about("Expands a template directory into per-run directories with substitutions")
                .arg(
                    Arg::new("template")
                        .help("template directory holding the files to substitute")
                        .required(true),
                )
                .arg(
                    Arg::new("destination")
                        .help("directory under which the run directories are created")
                        .required(true),
                )
                .arg(
                    Arg::new("common")
                        .help("JSON file with the substitutions shared by every run")
                        .required(true),
                )
                .arg(
                    Arg::new("overrides")
                        .help("JSON file with the ordered list of per-run override substitutions")
                        .required(true),
                )
                .arg(
                    Arg::new("prefix")
                        .help("prefix for the generated run directory names")
                        .short('p')
                        .long("prefix")
                        .default_value(sweepgen::DEFAULT_RUN_PREFIX),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Lists the distinct substitution keys found in a template directory")
                .arg(
                    Arg::new("template")
                        .help("template directory to scan")
                        .required(true),
                ),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    match matches.subcommand() {
        Some(("expand", args)) => {
            handle_expand(args, is_verbose)?;
        }
        Some(("scan", args)) => {
            handle_scan(args, is_verbose)?;
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn handle_expand(args: &ArgMatches, is_verbose: bool) -> Result<(), sweepgen::SweepError> {
    let template = args
        .get_one::<String>("template")
        .expect("template required");
    let destination = args
        .get_one::<String>("destination")
        .expect("destination required");
    let common = args.get_one::<String>("common").expect("common required");
    let overrides = args
        .get_one::<String>("overrides")
        .expect("overrides required");
    let prefix = args.get_one::<String>("prefix").expect("prefix has default");

    if is_verbose {
        println!("executing in verbose mode");
    }

    sweepgen::expand_template(template, destination, common, overrides, prefix)
}

fn handle_scan(args: &ArgMatches, is_verbose: bool) -> Result<(), sweepgen::SweepError> {
    let template = args
        .get_one::<String>("template")
        .expect("template required");

    if is_verbose {
        println!("executing in verbose mode");
    }

    let keys = sweepgen::scan_template(template)?;

    for key in &keys {
        println!("{}", key);
    }

    Ok(())
}
