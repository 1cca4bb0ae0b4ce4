use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use dis6502::disassembler::formatter::{PROGRAM_NAME, RELEASE_DATE, VERSION};
use dis6502::loader::{
    c64_defaults, load_label_definitions, parse_address, parse_hex, read_binary,
};
use dis6502::{dissect, Dialect, DissectConfig, RenderOptions, SourceInfo};

/// Disassemble 6502 machine code into an ACME or Kick Assembler listing.
#[derive(Parser)]
#[command(
    version,
    after_help = "Example: dis6502 test.prg test.a 2000 --label-file c64labels.json -o 2 -l 100 -t acme --dump --labels --illegals --cycles"
)]
struct Args {
    /// Binary input file
    input: PathBuf,

    /// Source code output file
    output: PathBuf,

    /// Load address of the first byte, in hex
    start_address: String,

    /// Label definitions JSON file (defaults to the built-in C64 memory map)
    #[arg(long)]
    label_file: Option<PathBuf>,

    /// Number of bytes to skip at the start of the input, in hex
    #[arg(short, long, default_value = "0")]
    offset: String,

    /// Maximum number of bytes to disassemble, in hex (0 = no limit)
    #[arg(short = 'l', long, default_value = "0")]
    limit: String,

    /// Assembler syntax: acme or kickass
    #[arg(short = 't', long, default_value = "acme")]
    asm_type: Dialect,

    /// Show a memory dump before the disassembly
    #[arg(short, long)]
    dump: bool,

    /// Print illegal opcodes as mnemonics instead of byte directives
    #[arg(short, long)]
    illegals: bool,

    /// Append the list of generated labels
    #[arg(long)]
    labels: bool,

    /// Show cycle counts
    #[arg(short, long)]
    cycles: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("{} v{} [{}]", PROGRAM_NAME, VERSION, RELEASE_DATE);

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let load_address = parse_address("address", &args.start_address)?;
    let offset = parse_hex("offset", &args.offset)?;
    let limit = parse_hex("limit", &args.limit)?;

    let bytes = read_binary(&args.input, offset, limit)?;
    let definitions = match &args.label_file {
        Some(path) => load_label_definitions(path)?,
        None => c64_defaults()?,
    };

    let config = DissectConfig {
        source: SourceInfo {
            name: args.input.display().to_string(),
            load_address,
            offset,
            length: bytes.len(),
        },
        render: RenderOptions {
            dialect: args.asm_type,
            show_memory_dump: args.dump,
            show_label_list: args.labels,
            show_cycles: args.cycles,
            allow_illegal: args.illegals,
        },
    };
    let result = dissect(&bytes, &definitions, &config);
    if !result.labels.warnings().is_empty() {
        warn!(
            "{} label(s) could not be aligned to an instruction",
            result.labels.warnings().len()
        );
    }

    info!("Opening file \"{}\" for writing...", args.output.display());
    fs::write(&args.output, &result.text)
        .with_context(|| format!("Unable to write {}", args.output.display()))?;

    info!("done.");
    Ok(())
}
