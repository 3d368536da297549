use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use v30env::bus::BusKind;
use v30env::io::PeripheralMap;
use v30env::parse::parse_script;
use v30env::sim::{
    BusMaster, DEFAULT_CYCLES, IdleMaster, ScriptMaster, SimEnv,
    load_boot_image,
};

//===========================================================================//

#[derive(Parser)]
#[clap(author, about, long_about = None, version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs a boot image in the bus environment.
    Run {
        /// The boot image to load into ROM.
        rom: PathBuf,
        /// The stimulus script to replay, or none to leave the bus idle.
        script: Option<PathBuf>,
        /// The maximum number of cycles to run.
        #[clap(long, default_value_t = DEFAULT_CYCLES)]
        cycles: u64,
        /// Prints the EEPROM contents at the end of the run.
        #[clap(long)]
        dump_eeprom: bool,
    },
}

//===========================================================================//

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run { rom, script, cycles, dump_eeprom } => {
            run(&rom, script.as_deref(), cycles, dump_eeprom)
        }
    }
}

fn run(
    rom_path: &Path,
    script_path: Option<&Path>,
    cycles: u64,
    dump_eeprom: bool,
) -> anyhow::Result<()> {
    let rom = {
        let file = File::open(rom_path).with_context(|| {
            format!("failed to open {}", rom_path.display())
        })?;
        load_boot_image(io::BufReader::new(file))
            .with_context(|| format!("failed to load {}", rom_path.display()))?
    };
    let Some(script_path) = script_path else {
        let mut env = SimEnv::new(IdleMaster, rom, PeripheralMap::new());
        print!("{}", env.description());
        report(&mut env, cycles, dump_eeprom);
        return Ok(());
    };
    let source = fs::read(script_path).with_context(|| {
        format!("failed to read {}", script_path.display())
    })?;
    let stmts = match parse_script(&source) {
        Ok(stmts) => stmts,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}:{error}", script_path.display());
            }
            bail!("{} error(s) in {}", errors.len(), script_path.display());
        }
    };
    let mut env =
        SimEnv::new(ScriptMaster::new(stmts), rom, PeripheralMap::new());
    print!("{}", env.description());
    report(&mut env, cycles, dump_eeprom);
    let failures = env.master().failures();
    for failure in failures {
        let actual = match failure.actual {
            Some(data) => format!("{data:#06x}"),
            None => "no read".to_string(),
        };
        println!(
            "{}:{}: expected {:#06x}, got {actual}",
            script_path.display(),
            failure.line,
            failure.expected
        );
    }
    if !failures.is_empty() {
        bail!("{} expectation(s) failed", failures.len());
    }
    Ok(())
}

fn report<P: BusMaster>(env: &mut SimEnv<P>, cycles: u64, dump_eeprom: bool) {
    let summary = env.run(cycles);
    let ending =
        if summary.finished { "master finished" } else { "budget exhausted" };
    println!("ran {} cycles ({ending})", summary.cycles);
    println!("transactions: {}", summary.stats);
    println!("memory writes: {}", summary.stats.count(BusKind::MemWrite));
    if dump_eeprom {
        let cells = env.arbiter().io().eeprom().cells();
        for (row, chunk) in cells.chunks(8).enumerate() {
            let words: Vec<String> =
                chunk.iter().map(|word| format!("{word:04x}")).collect();
            println!("eeprom {:02x}: {}", row * 8, words.join(" "));
        }
    }
}

//===========================================================================//
