//! Yes/no confirmation before destructive actions.

use std::io::{BufRead, Write};

/// Whether a response confirms the action.
///
/// Only `y` and `yes` (case-sensitive) confirm; surrounding whitespace,
/// including the line terminator, is ignored.
///
/// # Examples
///
/// ```
/// use epghelper::prompt::is_affirmative;
///
/// assert!(is_affirmative("y\n"));
/// assert!(is_affirmative("yes"));
/// assert!(!is_affirmative("Y"));
/// assert!(!is_affirmative(""));
/// ```
#[must_use]
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim(), "y" | "yes")
}

/// Print `message (y/n): ` to `output` and read one line from `input`.
///
/// End of input and read failures count as a decline.
///
/// # Examples
///
/// ```
/// use epghelper::prompt::confirm;
///
/// let mut output = Vec::new();
/// assert!(confirm(&mut "yes\n".as_bytes(), &mut output, "Delete 5432?"));
/// assert_eq!(output, b"Delete 5432? (y/n): ");
///
/// assert!(!confirm(&mut "".as_bytes(), &mut Vec::new(), "Delete 5432?"));
/// ```
pub fn confirm<R, W>(input: &mut R, output: &mut W, message: &str) -> bool
where
    R: BufRead,
    W: Write,
{
    if write!(output, "{message} (y/n): ")
        .and_then(|()| output.flush())
        .is_err()
    {
        return false;
    }

    let mut response = String::new();
    match input.read_line(&mut response) {
        Ok(0) => {
            log::debug!("confirmation input closed");
            let _ = writeln!(output);
            false
        }
        Ok(_) => is_affirmative(&response),
        Err(e) => {
            log::debug!("failed to read confirmation: {e}");
            let _ = writeln!(output);
            false
        }
    }
}
