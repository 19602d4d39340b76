//! Interactive tax-claim estimator for a depreciating vehicle.
//!
//! Prompts for the vehicle's last valuation, depreciation rate, business-use
//! fraction, and years since valuation, then prints the current value and the
//! claimable amount for the past year.

use std::io::{self, BufRead, Write};
use std::process;

use linr::valuation::Vehicle;

fn prompt_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<f64> {
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("rejected input {:?}: {err}", line.trim());
                writeln!(output, "Please enter a number.")?;
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(
        output,
        "This tool tells you the current value of your car according to HMRC \
         and how much tax you can claim for last year.\n"
    )?;

    let value = prompt_f64(&mut input, &mut output, "How much is your car worth? (Numbers only)")?;
    let rate = prompt_f64(
        &mut input,
        &mut output,
        "What is the rate of depreciation? (Percentage / 100 e.g. 18% = 0.18)",
    )?;
    let business = prompt_f64(
        &mut input,
        &mut output,
        "What percentage of your use is for your business? (Percentage / 100 e.g. 95% = 0.95)",
    )?;
    let years = prompt_f64(
        &mut input,
        &mut output,
        "How many years ago was your vehicle last valued? (Integers only)",
    )?;

    let vehicle = match Vehicle::new(value, rate, business, years) {
        Ok(vehicle) => vehicle,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    log::debug!(
        "value={value} rate={rate} business={business} years={years} current={}",
        vehicle.current_value()
    );

    writeln!(output, "\nYour car is currently worth £{:.2}", vehicle.current_value())?;
    match vehicle.claim_amount() {
        Some(claim) => writeln!(output, "You can claim £{claim:.2}")?,
        None => writeln!(output, "You cannot claim anything")?,
    }

    Ok(())
}
