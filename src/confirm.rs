//! User confirmation gate in front of any mutation

use std::io;

use tracing::info;

/// Prompt for confirmation over standard input.
///
/// Returns `false` without prompting when there is nothing to mutate.
pub fn confirm(count: usize) -> bool {
    confirm_with(count, |prompt| {
        println!("{}", prompt);
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    })
}

/// Like [`confirm`], with the console read injected so tests can supply a
/// fixed response.
///
/// Only a case-insensitive `y` or `yes` (after trimming) proceeds.
/// Anything else declines, including an empty line or a failed read;
/// decline is logged as "Aborted" and is not an error.
pub fn confirm_with<F>(count: usize, read_response: F) -> bool
where
    F: FnOnce(&str) -> io::Result<String>,
{
    if count == 0 {
        return false;
    }

    let prompt = format!(
        "{} messages matched. Are you sure you want to delete/trash them? (yes/No)",
        count
    );

    let accepted = match read_response(&prompt) {
        Ok(line) => {
            let answer = line.trim().to_lowercase();
            answer == "y" || answer == "yes"
        }
        Err(_) => false,
    };

    if !accepted {
        info!("Aborted");
    }

    accepted
}
