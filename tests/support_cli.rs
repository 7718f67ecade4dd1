use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `qpress` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_qpress<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = qpress_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run qpress failed: {}", err))
}

fn qpress_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_qpress").map_or_else(
        || Err("CARGO_BIN_EXE_qpress missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Parse one press output line into (start, elapsed) seconds.
///
/// # Errors
///
/// Returns an error when the line does not match `<start> -- <elapsed>`.
pub fn parse_press_line(line: &str) -> Result<(f64, f64), String> {
    let (start, elapsed) = line
        .split_once(" -- ")
        .ok_or_else(|| format!("malformed press line: {}", line))?;
    let start: f64 = start
        .parse()
        .map_err(|err| format!("bad start in '{}': {}", line, err))?;
    let elapsed: f64 = elapsed
        .parse()
        .map_err(|err| format!("bad elapsed in '{}': {}", line, err))?;
    Ok((start, elapsed))
}
