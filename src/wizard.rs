use crate::core::session::{BilingualExposure, FirmSize, HiringPressure, Region, SessionInput};
use anyhow::{Result, bail};
use clap::ValueEnum;
use std::io::{self, BufRead, Write};

const TOTAL_STEPS: usize = 4;

pub fn collect() -> Result<SessionInput> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    collect_from(&mut stdin.lock(), &mut stdout.lock())
}

fn collect_from<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<SessionInput> {
    let firm_size = choose(reader, writer, 1, "firm size", FirmSize::label)?;
    let bilingual_exposure = choose(
        reader,
        writer,
        2,
        "bilingual exposure",
        BilingualExposure::label,
    )?;
    let region = choose(reader, writer, 3, "region", Region::display_name)?;
    let hiring_pressure = choose(reader, writer, 4, "hiring pressure", HiringPressure::label)?;

    Ok(SessionInput {
        firm_size: Some(firm_size),
        bilingual_exposure: Some(bilingual_exposure),
        region: Some(region),
        hiring_pressure: Some(hiring_pressure),
    })
}

fn choose<T, R, W, F>(
    reader: &mut R,
    writer: &mut W,
    step: usize,
    title: &str,
    label_of: F,
) -> Result<T>
where
    T: ValueEnum + Copy,
    R: BufRead,
    W: Write,
    F: Fn(T) -> &'static str,
{
    let variants = T::value_variants();

    writeln!(writer)?;
    writeln!(
        writer,
        "step {step}/{TOTAL_STEPS} {} {title}",
        progress_bar(step, TOTAL_STEPS)
    )?;
    for (idx, variant) in variants.iter().enumerate() {
        let name = variant
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        writeln!(writer, "  {}) {} - {}", idx + 1, name, label_of(*variant))?;
    }

    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("input closed before all selections were made");
        }

        if let Some(choice) = parse_choice::<T>(&line) {
            return Ok(choice);
        }

        writeln!(
            writer,
            "enter a number between 1 and {} or one of the listed names",
            variants.len()
        )?;
    }
}

// accepts a 1-based option number or a value name, case-insensitive.
fn parse_choice<T: ValueEnum + Copy>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let variants = T::value_variants();
    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=variants.len()).contains(&index) {
            return Some(variants[index - 1]);
        }
        return None;
    }

    variants.iter().copied().find(|variant| {
        variant
            .to_possible_value()
            .is_some_and(|value| value.get_name().eq_ignore_ascii_case(trimmed))
    })
}

fn progress_bar(step: usize, total: usize) -> String {
    const WIDTH: usize = 12;
    let filled = (step * WIDTH) / total;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
