use clap::{Parser, Subcommand};
use log::info;
use recfile::record::{Record, ScaledDecimal};
use recfile::{ops, VERSION};
use std::path::Path;

#[derive(Parser)]
#[command(name = "recfile")]
#[command(version = VERSION)]
#[command(about = "Fixed-layout record files and elementary file I/O helpers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration sequence
    Demo,

    /// Show system information
    Info,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        unsafe { std::env::set_var("RUST_LOG", "debug") };
    } else {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    recfile::init()?;

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Info => show_info(),
    }

    Ok(())
}

/// Run every example once, working-directory relative. Each step reports a
/// failure and moves on to the next unrelated example rather than aborting.
fn run_demo() {
    info!("Running recfile demonstration");

    println!("recfile demonstration");
    println!("=====================");

    demo_write_text();
    demo_read_text();
    demo_write_record();
    demo_read_record();
    demo_append();
    demo_copy();
    demo_file_info();

    println!("\nAll examples completed.");
}

fn demo_write_text() {
    println!("\n--- Example 1: write text ---");
    let path = Path::new("example1.txt");
    let message = "Hello, this is my first recfile example!";
    match ops::write_text(path, message) {
        Ok(()) => {
            println!("✓ Written to {}", path.display());
            println!("  Message: {message}");
            println!("  Bytes written: {}", message.len());
        }
        Err(e) => println!("✗ Write failed: {e}"),
    }
}

fn demo_read_text() {
    println!("\n--- Example 2: read text ---");
    let path = Path::new("example1.txt");
    match ops::read_text(path) {
        Ok(message) => {
            println!("✓ Read from {}", path.display());
            println!("  Message: {message}");
            println!("  Bytes read: {}", message.len());
        }
        Err(e) => println!("✗ Read failed: {e}"),
    }
}

fn demo_write_record() {
    println!("\n--- Example 3: write binary record ---");
    let path = Path::new("numbers.dat");
    // 99.99 as a scaled decimal: mantissa 9999, scale 2
    let amount = match ScaledDecimal::new(9999, false, 2) {
        Ok(amount) => amount,
        Err(e) => {
            println!("✗ Building decimal failed: {e}");
            return;
        }
    };
    let record = Record::new(12345, amount, true);
    match ops::write_record(path, &record) {
        Ok(()) => {
            println!("✓ Record written to {}", path.display());
            println!("  Integer: {}", record.id);
            println!("  Decimal: {}", record.amount);
            println!("  Boolean: {}", record.active);
        }
        Err(e) => println!("✗ Write failed: {e}"),
    }
}

fn demo_read_record() {
    println!("\n--- Example 4: read binary record ---");
    let path = Path::new("numbers.dat");
    match ops::read_record(path) {
        Ok(record) => {
            println!("✓ Record read from {}", path.display());
            println!("  Integer: {}", record.id);
            println!("  Decimal: {}", record.amount);
            println!("  Boolean: {}", record.active);
        }
        Err(e) => println!("✗ Read failed: {e}"),
    }
}

fn demo_append() {
    println!("\n--- Example 5: append to file ---");
    let path = Path::new("log.txt");
    match ops::append_log_entry(path, "New log entry added") {
        Ok(()) => println!("✓ Appended to {}", path.display()),
        Err(e) => {
            println!("✗ Append failed: {e}");
            return;
        }
    }
    match ops::read_text(path) {
        Ok(content) => {
            println!("  Current file contents:");
            for line in content.lines() {
                println!("  {line}");
            }
        }
        Err(e) => println!("✗ Readback failed: {e}"),
    }
}

fn demo_copy() {
    println!("\n--- Example 6: copy file ---");
    let src = Path::new("example1.txt");
    let dst = Path::new("example1_copy.txt");
    match ops::copy_file_verified(src, dst, ops::DEFAULT_CHUNK_SIZE) {
        Ok(copied) => {
            println!("✓ Copied {} -> {}", src.display(), dst.display());
            println!("  Bytes copied: {copied}");
            println!("✓ Copy verified, files are identical");
        }
        Err(e) => println!("✗ Copy failed: {e}"),
    }
}

fn demo_file_info() {
    println!("\n--- Example 7: file info ---");
    for name in ["example1.txt", "numbers.dat", "log.txt", "example1_copy.txt"] {
        let path = Path::new(name);
        match ops::file_info(path) {
            Ok(info) => {
                println!("  {name}");
                println!("    Size: {}", ops::format_file_size(info.size));
                println!("    Modified: {}", ops::format_timestamp(info.modified));
                if let Some(created) = info.created {
                    println!("    Created: {}", ops::format_timestamp(created));
                }
            }
            Err(e) => println!("  {name}: {e}"),
        }
    }
}

fn show_info() {
    println!("recfile - Fixed-layout record files and elementary file I/O helpers");
    println!("Version: {VERSION}");
    println!();
    println!("Usage:");
    println!("  recfile demo    - Run the demonstration sequence");
    println!("  recfile info    - Show this information");
}
