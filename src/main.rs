//! # whatsarchive CLI
//!
//! Command-line interface for the whatsarchive library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use whatsarchive::ArchiveError;
use whatsarchive::cli::{Args, DEFAULT_OUTPUT, init_tracing};
use whatsarchive::format::{OutputFormat, write_to_format};
use whatsarchive::parser::ArchiveParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ArchiveError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    println!("whatsarchive v{}", env!("CARGO_PKG_VERSION"));
    println!("----------------------------------");
    println!("Input:   {}", args.input);
    println!("Output:  {output_path}");
    println!("Format:  {format}");
    println!();

    let parser = ArchiveParser::with_config(args.archive_config());
    println!("Parsing transcript...");
    let parse_start = Instant::now();
    let conversation = parser.parse(&args.input)?;
    let parse_time = parse_start.elapsed();
    println!(
        "   Found {} messages ({:.2}s)",
        conversation.len(),
        parse_time.as_secs_f64()
    );

    println!("Writing {format}...");
    let write_start = Instant::now();
    write_to_format(&conversation, &output_path, format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("Done! Output saved to {output_path}");

    let stats = &conversation.stats;
    println!();
    println!("Summary:");
    println!("   Conversation: {}", conversation.name);
    println!("   Records:      {}", stats.records);
    println!("   Messages:     {}", stats.messages);
    println!("   Authors:      {}", conversation.authors().len());
    if stats.unrecognized > 0 {
        println!("   Unrecognized: {}", stats.unrecognized);
    }
    if stats.skipped_timestamps > 0 {
        println!("   Bad dates:    {}", stats.skipped_timestamps);
    }
    if stats.malformed {
        println!("   Warning:      no CR LF record boundaries found");
    }

    println!();
    println!(
        "Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    format!("archive.{}", format.extension())
}
