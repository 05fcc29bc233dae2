//! Argument handling, prompting and printing shared by every binary.

use crate::commands::Utility;
use crate::error::{Result, VectorError};
use clap::Parser;
use log::{debug, error, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Logging is switched on by setting this variable to an `env_logger` filter.
pub const LOG_ENV: &str = "VECALG_LOG";
pub const LOG_STYLE_ENV: &str = "VECALG_LOG_STYLE";

const EXIT_COMMAND: &str = "exit";

/// Raw vector components. With none given the utility prompts on stdin.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct VectorArgs {
    /// Vector components; negative numbers and `;` separators are taken as-is
    #[arg(
        value_name = "COMPONENT",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub components: Vec<String>,
}

pub fn init_logging() {
    if std::env::var(LOG_ENV).is_ok() {
        let e = env_logger::Env::new()
            .filter(LOG_ENV)
            .write_style(LOG_STYLE_ENV);
        env_logger::init_from_env(e);
    }
}

/// Runs one utility against the real stdin/stdout.
pub fn run(utility: Utility, components: &[String]) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = if components.is_empty() {
        let stdin = io::stdin();
        interact(utility, &mut stdin.lock(), &mut out).map(|()| 0)
    } else {
        evaluate_args(utility, components, &mut out)
    };
    match status {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!("{} failed on console i/o: {err}", utility.name());
            ExitCode::FAILURE
        }
    }
}

/// Evaluates command-line components and returns the process exit status.
///
/// Validation errors are printed to `out` like results. Only the magnitude
/// utility turns them into a non-zero status.
pub fn evaluate_args<W: Write>(utility: Utility, components: &[String], out: &mut W) -> io::Result<u8> {
    let result = if utility == Utility::Magnitude && components.iter().any(|c| c.trim().is_empty()) {
        // an empty argument is not a number, even though joining would hide it
        Err(VectorError::NotNumeric)
    } else {
        utility.evaluate(&components.join(" "))
    };
    let failed = result.is_err();
    report(utility, result, out)?;
    if failed && utility == Utility::Magnitude {
        return Ok(1);
    }
    Ok(0)
}

/// Prompts on `out` and answers from `input`.
pub fn interact<R: BufRead, W: Write>(utility: Utility, input: &mut R, out: &mut W) -> io::Result<()> {
    if utility == Utility::Magnitude {
        return magnitude_loop(input, out);
    }
    writeln!(out, "{}", utility.prompt())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    report(utility, utility.evaluate(&line), out)
}

fn magnitude_loop<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        write!(out, "{}", Utility::Magnitude.prompt())?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return writeln!(out);
        }
        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            return writeln!(out, "Exiting the program.");
        }
        match Utility::Magnitude.evaluate(&line) {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => {
                warn!("magnitude: {err}");
                writeln!(out, "{err} Please try again.")?;
            }
        }
    }
}

fn report<W: Write>(utility: Utility, result: Result<String>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(message) => writeln!(out, "{message}"),
        Err(err) => {
            warn!("{}: {err}", utility.name());
            writeln!(out, "{err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    fn run_args(utility: Utility, s: &str) -> (u8, String) {
        let mut out = Vec::new();
        let code = evaluate_args(utility, &args(s), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    fn run_interactive(utility: Utility, stdin: &str) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        interact(utility, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_vector_args_accept_negative_numbers() {
        let parsed = VectorArgs::try_parse_from(["vector-angle", "-1", "0", ";", "0", "-2.5"]).unwrap();
        assert_eq!(parsed.components, args("-1 0 ; 0 -2.5"));

        let empty = VectorArgs::try_parse_from(["vector-angle"]).unwrap();
        assert!(empty.components.is_empty());
    }

    #[test]
    fn test_magnitude_args_exit_status() {
        let (code, out) = run_args(Utility::Magnitude, "3 4");
        assert_eq!(code, 0);
        assert_eq!(out, "The magnitude of the vector [3.0, 4.0] is 5.0\n");

        let (code, out) = run_args(Utility::Magnitude, "3 four");
        assert_eq!(code, 1);
        assert_eq!(out, "All components must be numbers (int or float).\n");
    }

    #[test]
    fn test_magnitude_rejects_blank_argument() {
        for components in [vec![String::new()], vec!["3".to_string(), " ".to_string()]] {
            let mut out = Vec::new();
            let code = evaluate_args(Utility::Magnitude, &components, &mut out).unwrap();
            assert_eq!(code, 1);
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "All components must be numbers (int or float).\n"
            );
        }
    }

    #[test]
    fn test_magnitude_loop_accepts_empty_line() {
        let out = run_interactive(Utility::Magnitude, "\nexit\n");
        let prompt = Utility::Magnitude.prompt();
        assert_eq!(
            out,
            format!("{prompt}The magnitude of the vector [] is 0.0\n{prompt}Exiting the program.\n")
        );
    }

    #[test]
    fn test_other_utilities_report_errors_with_success_status() {
        let (code, out) = run_args(Utility::Projection, "3 4 0 0");
        assert_eq!(code, 0);
        assert_eq!(out, "The magnitude of vector_v is zero. Cannot project onto a zero vector.\n");

        let (code, out) = run_args(Utility::Cross, "1 2");
        assert_eq!(code, 0);
        assert_eq!(out, "The input must contain exactly 6 components to form two 3D vectors.\n");
    }

    #[test]
    fn test_args_are_joined_before_parsing() {
        let (_, out) = run_args(Utility::Product, "1 2 3; 4 5 6");
        assert_eq!(out, "The cumulative dot product of the vectors is 32.0\n");

        let (_, out) = run_args(Utility::Angle, "1 0 ; 0 1");
        assert_eq!(out, "The angle between the vectors [1.0, 0.0] and [0.0, 1.0] is 90.00 degrees\n");
    }

    #[test]
    fn test_interactive_single_shot() {
        let out = run_interactive(Utility::Orthogonal, "1 x 2 3\n");
        assert_eq!(
            out,
            format!(
                "{}\nThe value of the missing component 'x' is -0.67\n",
                Utility::Orthogonal.prompt()
            )
        );
    }

    #[test]
    fn test_interactive_end_of_input() {
        let out = run_interactive(Utility::Angle, "");
        assert_eq!(out, format!("{}\nPlease provide exactly two vectors.\n", Utility::Angle.prompt()));
    }

    #[test]
    fn test_magnitude_loop_retries_until_exit() {
        let out = run_interactive(Utility::Magnitude, "3 4\nthree\n  EXIT \n1 1\n");
        let prompt = Utility::Magnitude.prompt();
        assert_eq!(
            out,
            format!(
                "{prompt}The magnitude of the vector [3.0, 4.0] is 5.0\n\
                 {prompt}All components must be numbers (int or float). Please try again.\n\
                 {prompt}Exiting the program.\n"
            )
        );
    }

    #[test]
    fn test_magnitude_loop_stops_at_end_of_input() {
        let out = run_interactive(Utility::Magnitude, "0 0 0\n");
        let prompt = Utility::Magnitude.prompt();
        assert_eq!(
            out,
            format!("{prompt}The magnitude of the vector [0.0, 0.0, 0.0] is 0.0\n{prompt}\n")
        );
    }
}
