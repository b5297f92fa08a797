/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of properuri.
 *
 * properuri is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * properuri is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with properuri. If not, see <https://www.gnu.org/licenses/>.
 */

use std::io::{self, BufRead, BufWriter, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use properuri::encode::{encode_str, encode_to_string, try_encode_to_string};
use properuri::{ExceptionSet, URI, URI_COMPONENT};

/// Percent-encode text for use in a URI, following RFC 3986 and RFC 5987.
///
/// Each TEXT argument is encoded and printed on its own line. Without
/// arguments, each line of standard input is encoded separately, unless
/// --whole or --utf16 is given.
#[derive(Parser)]
#[command(name = "properuri", author, about, version)]
struct CliArgs {
    /// Encode as a URI component: only ! ' ( ) * and unreserved characters
    /// are left unescaped
    #[arg(short, long)]
    component: bool,

    /// With --utf16, fail on malformed surrogate sequences instead of
    /// encoding them
    #[arg(short, long, requires = "utf16")]
    strict: bool,

    /// Encode all of standard input as one value, line terminators included
    #[arg(short, long, conflicts_with = "text")]
    whole: bool,

    /// Read standard input as UTF-16LE code units and encode it as one value;
    /// unpaired surrogates are allowed
    #[arg(short, long, conflicts_with_all = ["text", "whole"])]
    utf16: bool,

    /// Log progress to standard error
    #[arg(short, long)]
    verbose: bool,

    /// Values to encode
    #[arg(value_name = "TEXT")]
    text: Vec<String>,
}

struct Encoder {
    exceptions: ExceptionSet<'static>,
    strict: bool,
}

impl Encoder {
    fn encode(&self, text: &str) -> String {
        encode_str(text, &self.exceptions)
    }

    fn encode_utf16(&self, units: &[u16]) -> Result<String> {
        if !self.strict {
            return Ok(encode_to_string(units.iter().copied(), &self.exceptions));
        }
        try_encode_to_string(units.iter().copied(), &self.exceptions)
            .context("could not encode UTF-16 input")
    }
}

fn utf16le_units(bytes: &[u8]) -> Result<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        anyhow::bail!("UTF-16 input has an odd number of bytes ({})", bytes.len());
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        if io::stderr().is_terminal() {
            simplelog::ColorChoice::Auto
        } else {
            simplelog::ColorChoice::Never
        },
    )
    .or_else(|_| {
        simplelog::WriteLogger::init(
            level,
            simplelog::Config::default(),
            io::stderr(),
        )
    })
    .map_err(|e| anyhow::anyhow!("couldn't initialize logger: {}", e))
}

fn split_terminator(line: &str) -> (&str, &str) {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_at(body.len())
}

fn encode_lines(
    encoder: &Encoder,
    mut input: impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut line = String::new();
    let mut count = 0_usize;
    loop {
        line.clear();
        if input.read_line(&mut line).context("could not read input")? == 0 {
            break;
        }
        let (body, terminator) = split_terminator(&line);
        write!(output, "{}{}", encoder.encode(body), terminator)
            .context("could not write to standard output")?;
        count += 1;
    }
    debug!("encoded {} line(s)", count);
    Ok(())
}

fn run(args: CliArgs) -> Result<()> {
    let encoder = Encoder {
        exceptions: if args.component { URI_COMPONENT } else { URI },
        strict: args.strict,
    };
    info!(
        "encoding as a URI{} ({} mode)",
        if args.component { " component" } else { "" },
        if args.strict { "strict" } else { "lenient" },
    );

    let mut output = BufWriter::new(io::stdout().lock());
    if !args.text.is_empty() {
        debug!("encoding {} argument(s)", args.text.len());
        for text in &args.text {
            writeln!(output, "{}", encoder.encode(text))
                .context("could not write to standard output")?;
        }
    } else if args.utf16 {
        let mut input = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut input)
            .context("could not read standard input")?;
        let units = utf16le_units(&input)?;
        debug!("encoding {} UTF-16 code unit(s)", units.len());
        write!(output, "{}", encoder.encode_utf16(&units)?)
            .context("could not write to standard output")?;
    } else if args.whole {
        let mut input = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut input)
            .context("could not read standard input")?;
        debug!("encoding {} byte(s) of input", input.len());
        write!(output, "{}", encoder.encode(&input))
            .context("could not write to standard output")?;
    } else {
        encode_lines(&encoder, io::stdin().lock(), &mut output)?;
    }
    output.flush().context("could not write to standard output")
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose)?;
    run(args)
}
