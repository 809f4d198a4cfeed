//! Interactive prompt for the lexical front end.
//!
//! Each entered line is scanned independently; an error on one line
//! never carries over to the next.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::run;

/// Run the read-scan-print loop until Ctrl-D or an editor failure.
pub fn run_prompt() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(trimmed);
                run(trimmed, "repl");
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
