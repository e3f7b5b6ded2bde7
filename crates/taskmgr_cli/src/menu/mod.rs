use std::io::{BufRead, Write};
use taskmgr_core::config::Palette;
use taskmgr_core::error::AppError;
use taskmgr_core::manager::TaskManager;
use taskmgr_core::prompt;

const WELCOME: &str = "Welcome to the task manager. Select an option:";
const CONTINUATION: &str = "What would you like to do?";
const OPTIONS: &str =
    "1) Add Task\n2) List Tasks\n3) Update Task\n4) Remove Task\n5) Complete Task\n6) Exit";
const FAREWELL: &str = "Now exiting the task manager.";
const SEPARATOR: &str = "----------------------------------------";
const INVALID_CHOICE_MSG: &str = "Invalid input, please try again.";
const INVALID_INDEX_MSG: &str = "Invalid index, please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Remove,
    Complete,
    Exit,
}

pub fn parse_choice(line: &str) -> Result<MenuChoice, AppError> {
    let number: u32 = line
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_choice("menu choice must be a number"))?;

    match number {
        1 => Ok(MenuChoice::Add),
        2 => Ok(MenuChoice::List),
        3 => Ok(MenuChoice::Update),
        4 => Ok(MenuChoice::Remove),
        5 => Ok(MenuChoice::Complete),
        6 => Ok(MenuChoice::Exit),
        other => Err(AppError::invalid_choice(format!(
            "menu choice {other} must be between 1 and 6"
        ))),
    }
}

/// Blocking read-dispatch-repeat loop. Ends on the Exit choice or on end of
/// input; every recoverable error is reported on `output` and the loop keeps
/// going. Only I/O failures propagate.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<(), AppError> {
    let mut first = true;

    loop {
        let header = if first { WELCOME } else { CONTINUATION };
        first = false;
        writeln!(output)?;
        writeln!(output, "{}", palette.accentize(header))?;
        writeln!(output, "{OPTIONS}")?;

        let Some(line) = prompt::read_line(input)? else {
            break;
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "{INVALID_CHOICE_MSG}")?;
                continue;
            }
        };

        match choice {
            MenuChoice::Add => handle_add(manager, input, output)?,
            MenuChoice::List => list_tasks(manager, output, palette)?,
            MenuChoice::Update => handle_update(manager, input, output, palette)?,
            MenuChoice::Remove => handle_remove(manager, input, output, palette)?,
            MenuChoice::Complete => handle_complete(manager, input, output, palette)?,
            MenuChoice::Exit => {
                writeln!(output, "{FAREWELL}")?;
                break;
            }
        }
    }

    Ok(())
}

fn list_tasks<W: Write>(
    manager: &TaskManager,
    output: &mut W,
    palette: &Palette,
) -> Result<(), AppError> {
    writeln!(output, "{}", palette.mutedize(SEPARATOR))?;
    for entry in manager.entries() {
        writeln!(output, "{entry}")?;
    }
    writeln!(output, "{}", palette.mutedize(SEPARATOR))?;
    Ok(())
}

fn handle_add<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let Some(task) = read_task_or_report(input, output)? else {
        return Ok(());
    };

    let title = task.title.clone();
    let total = manager.add(task);
    writeln!(
        output,
        "Added task \"{title}\" to your task manager (total tasks: {total})."
    )?;
    Ok(())
}

fn handle_update<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<(), AppError> {
    if manager.is_empty() {
        writeln!(output, "There are no tasks to update.")?;
        return Ok(());
    }

    list_tasks(manager, output, palette)?;
    // Bounds are settled before the user is asked for replacement fields.
    let Some(index) = read_index(
        input,
        output,
        "Which task would you like to update? ",
        manager.len(),
    )?
    else {
        return Ok(());
    };

    let Some(replacement) = read_task_or_report(input, output)? else {
        return Ok(());
    };

    let title = replacement.title.clone();
    manager.update_at(index, replacement)?;
    writeln!(output, "Updated task \"{title}\" at position {}.", index + 1)?;
    Ok(())
}

fn handle_remove<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<(), AppError> {
    if manager.is_empty() {
        writeln!(output, "There are no tasks to remove.")?;
        return Ok(());
    }

    list_tasks(manager, output, palette)?;
    let Some(index) = read_index(
        input,
        output,
        "Which task would you like to remove? ",
        manager.len(),
    )?
    else {
        return Ok(());
    };

    let removed = manager.remove_at(index)?;
    writeln!(
        output,
        "Removed task \"{}\" from your task manager (total tasks: {}).",
        removed.title,
        manager.len()
    )?;
    Ok(())
}

fn handle_complete<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<(), AppError> {
    if manager.is_empty() {
        writeln!(output, "There are no tasks to complete.")?;
        return Ok(());
    }

    list_tasks(manager, output, palette)?;
    let Some(index) = read_index(
        input,
        output,
        "Which task would you like to mark as complete? ",
        manager.len(),
    )?
    else {
        return Ok(());
    };

    let outcome = manager.complete_at(index)?;
    if outcome.already_completed {
        writeln!(
            output,
            "Task \"{}\" has already been set as complete.",
            outcome.title
        )?;
    } else {
        writeln!(output, "Marked task \"{}\" as complete.", outcome.title)?;
    }
    Ok(())
}

/// Prompts for a new task; a recoverable creation failure is reported and
/// turned into `None` so the menu re-prompts, while I/O failures propagate.
fn read_task_or_report<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<taskmgr_core::model::Task>, AppError> {
    match prompt::read_new_task(input, output) {
        Ok(task) => Ok(Some(task)),
        Err(err @ AppError::Io(_)) => Err(err),
        Err(err) => {
            writeln!(output, "ERROR: {err}")?;
            Ok(None)
        }
    }
}

/// Asks for a 1-based position and converts it to a zero-based index.
/// Non-numeric or out-of-range input is reported and yields `None`; nothing
/// is mutated in that case.
fn read_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    len: usize,
) -> Result<Option<usize>, AppError> {
    write!(output, "{question}")?;
    output.flush()?;

    let Some(line) = prompt::read_line(input)? else {
        return Err(AppError::io("unexpected end of input"));
    };

    let position: usize = match line.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            writeln!(output, "{INVALID_INDEX_MSG}")?;
            return Ok(None);
        }
    };

    if position == 0 || position > len {
        writeln!(output, "{INVALID_INDEX_MSG}")?;
        return Ok(None);
    }

    Ok(Some(position - 1))
}
