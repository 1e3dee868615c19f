use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;

use crate::cli::{Cli, Command, ConfigCommand, DecodeArgs, EncodeArgs, MkdirArgs};

pub fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Config { command } => handle_config(command, out),
        Command::Mkdir(args) => handle_mkdir(&args),
        Command::Size { path } => {
            let size = fsbox::file_size_kb(&path).with_context(|| format!("sizing {}", path))?;
            writeln!(out, "{size}")?;
            Ok(())
        }
        Command::Encode(args) => handle_encode(&args, out),
        Command::Decode(args) => handle_decode(&args),
    }
}

fn handle_config(command: ConfigCommand, out: &mut impl Write) -> Result<()> {
    match command {
        ConfigCommand::Show { path } => {
            let config = load(&path)?;
            out.write_all(&fsbox::json::to_pretty_json(&config)?)?;
            writeln!(out)?;
        }
        ConfigCommand::Get { path, key } => {
            let config = load(&path)?;
            let value = config
                .lookup(&key)
                .ok_or_else(|| anyhow!("`{}` not found in {}", key, path))?;
            match value.as_str() {
                Some(text) => writeln!(out, "{text}")?,
                None => {
                    out.write_all(&fsbox::json::to_pretty_json(value)?)?;
                    writeln!(out)?;
                }
            }
        }
        ConfigCommand::Convert { path, output } => {
            let config = load(&path)?;
            fsbox::save_json(&output, &config).with_context(|| format!("writing {}", output))?;
        }
    }
    Ok(())
}

fn load(path: &Utf8Path) -> Result<fsbox::ConfigBox> {
    fsbox::read_config(path).with_context(|| format!("reading config {}", path))
}

fn handle_mkdir(args: &MkdirArgs) -> Result<()> {
    fsbox::create_directories(&args.paths, !args.quiet).context("creating directories")
}

fn handle_encode(args: &EncodeArgs, out: &mut impl Write) -> Result<()> {
    let encoded = fsbox::encode_image_to_base64(&args.input)
        .with_context(|| format!("encoding {}", args.input))?;
    match &args.output {
        Some(output) => fs::write(output, encoded).with_context(|| format!("writing {}", output))?,
        None => writeln!(out, "{encoded}")?,
    }
    Ok(())
}

fn handle_decode(args: &DecodeArgs) -> Result<()> {
    let encoded = if args.input == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("reading base64 from stdin")?;
        buffer
    } else {
        fs::read(&args.input).with_context(|| format!("reading {}", args.input))?
    };

    fsbox::decode_image(&encoded, &args.output)
        .with_context(|| format!("decoding into {}", args.output))
}
