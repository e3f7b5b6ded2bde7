use crate::error::AppError;
use crate::model::{NO_DESCRIPTION, Priority, Task};
use std::io::{BufRead, Write};

/// Reads one line, trailing newline stripped. `None` means end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buffer = String::new();
    let bytes = input.read_line(&mut buffer)?;
    if bytes == 0 {
        return Ok(None);
    }
    while buffer.ends_with('\n') || buffer.ends_with('\r') {
        buffer.pop();
    }
    Ok(Some(buffer))
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, AppError> {
    write!(output, "{question}")?;
    output.flush()?;
    read_line(input)?.ok_or_else(|| AppError::io("unexpected end of input"))
}

/// Prompts for each task field in turn and returns the constructed task
/// without adding it anywhere. An empty title or an unknown priority token
/// fails the creation; the caller decides whether to retry.
pub fn read_new_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Task, AppError> {
    let title = read_answer(input, output, "Enter the task title: ")?;
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::invalid_input("title is required"));
    }

    let description = read_answer(input, output, "Enter a description (press Enter for none): ")?;
    let description = match description.trim() {
        "" => NO_DESCRIPTION.to_string(),
        other => other.to_string(),
    };

    // The due date is a format hint only; it is stored as entered.
    let due_date = read_answer(input, output, "Enter a due date (MM/DD/YYYY): ")?;

    let priority: Priority =
        read_answer(input, output, "Enter a priority (LOW, MEDIUM, HIGH): ")?.parse()?;

    Ok(Task::new(title, description, due_date.trim(), priority))
}
