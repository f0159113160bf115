//! Command-line definition
//!
//! The argument set is shared by the binary and the command tests.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `studiosite` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("studiosite")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Claudio Hideki Yoshida")
        .about("Crop image borders and build the AI Universal Studio page")
        .arg(
            Arg::new("input")
                .help("Input image, or site manifest with --build")
                .required_unless_present("default-site")
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crop")
                .short('c')
                .long("crop")
                .help("Crop the uniform border of the input image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("build")
                .short('b')
                .long("build")
                .help("Build a static site from the input manifest")
                .action(ArgAction::SetTrue)
                .conflicts_with("crop"),
        )
        .arg(
            Arg::new("default-site")
                .long("default-site")
                .help("Build the embedded studio page; the input, if given, is the image directory")
                .action(ArgAction::SetTrue)
                .conflicts_with("crop"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file (--crop) or output directory (--build)")
                .value_name("PATH")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Operation log file")
                .value_name("FILE")
                .default_value("studiosite.log"),
        )
}
