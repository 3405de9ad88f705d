//! Interactive menu loop over a `TaskService`.
//!
//! # Responsibility
//! - Map the five menu actions onto service calls.
//! - Turn recoverable errors (missing id, blank title, bad id input) into
//!   messages so one bad entry never ends the session.
//!
//! # Invariants
//! - The task file is written only by "Save & Exit".
//! - A failed save keeps the menu open with the store untouched.

use crate::prompt::ask;
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use taskmgr_core::{ServiceError, StoreError, Task, TaskId, TaskRepository, TaskService};

/// One selectable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Complete,
    SaveAndExit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Complete),
            "5" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Tasks were written and the user chose to leave.
    Saved,
    /// Input closed; unsaved changes are dropped.
    InputClosed,
}

/// Runs the menu until "Save & Exit" succeeds or input ends.
pub fn run_menu<R, W, Repo>(
    input: &mut R,
    output: &mut W,
    service: &mut TaskService<Repo>,
) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    Repo: TaskRepository,
{
    loop {
        write_menu(output)?;
        let Some(raw) = ask(input, output, "Choose an option: ")? else {
            warn!("event=session_end module=cli status=input_closed saved=false");
            return Ok(SessionEnd::InputClosed);
        };

        let Some(choice) = MenuChoice::parse(&raw) else {
            writeln!(output, "Invalid option. Please try again.")?;
            continue;
        };

        match choice {
            MenuChoice::Add => {
                let Some(title) = ask(input, output, "Enter task title: ")? else {
                    continue;
                };
                match service.add_task(&title) {
                    Ok(task) => writeln!(output, "Task '{}' added successfully.", task.title)?,
                    Err(err) => writeln!(output, "Could not add task: {err}.")?,
                }
            }
            MenuChoice::View => write_tasks(output, service.list_tasks())?,
            MenuChoice::Delete => {
                let Some(id) = ask_task_id(input, output, "Enter task ID to delete: ")? else {
                    continue;
                };
                match service.delete_task(id) {
                    Ok(_) => writeln!(output, "Task {id} deleted successfully.")?,
                    Err(err) => write_miss(output, id, err)?,
                }
            }
            MenuChoice::Complete => {
                let Some(id) = ask_task_id(input, output, "Enter task ID to mark complete: ")?
                else {
                    continue;
                };
                match service.complete_task(id) {
                    Ok(_) => writeln!(output, "Task {id} marked as complete.")?,
                    Err(err) => write_miss(output, id, err)?,
                }
            }
            MenuChoice::SaveAndExit => match service.save() {
                Ok(()) => {
                    writeln!(output, "Tasks saved to file.")?;
                    info!(
                        "event=session_end module=cli status=ok saved=true count={}",
                        service.store().len()
                    );
                    return Ok(SessionEnd::Saved);
                }
                Err(err) => {
                    error!("event=session_save module=cli status=error error={err}");
                    writeln!(output, "Could not save tasks: {err}")?;
                    writeln!(output, "Fix the problem and choose option 5 again.")?;
                }
            },
        }
    }
}

/// Renders the task list the way the "View Tasks" action shows it.
pub fn write_tasks<W: Write>(output: &mut W, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(output, "No tasks available.");
    }
    for task in tasks {
        writeln!(output, "[{}] {} - {}", task.id, task.title, task.status_label())?;
    }
    Ok(())
}

/// Parses a user-entered task id; ids are positive integers.
pub fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse::<TaskId>().ok().filter(|id| *id > 0)
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nTask Manager CLI")?;
    writeln!(output, "1. Add Task")?;
    writeln!(output, "2. View Tasks")?;
    writeln!(output, "3. Delete Task")?;
    writeln!(output, "4. Mark Task as Complete")?;
    writeln!(output, "5. Save & Exit")
}

fn ask_task_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<TaskId>> {
    let Some(raw) = ask(input, output, label)? else {
        return Ok(None);
    };
    let id = parse_task_id(&raw);
    if id.is_none() {
        writeln!(
            output,
            "Invalid task ID '{raw}'. Please enter a positive number."
        )?;
    }
    Ok(id)
}

fn write_miss<W: Write>(output: &mut W, id: TaskId, err: ServiceError) -> io::Result<()> {
    match err {
        ServiceError::Store(StoreError::NotFound(_)) => writeln!(output, "Task {id} not found."),
        other => writeln!(output, "Task {id} could not be updated: {other}."),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_task_id, run_menu, write_tasks, MenuChoice, SessionEnd};
    use std::io::Cursor;
    use taskmgr_core::{load_tasks, JsonFileRepository, Task, TaskService};

    fn run_script(path: &std::path::Path, script: &str) -> (SessionEnd, String) {
        let mut service = TaskService::open(JsonFileRepository::new(path)).expect("open service");
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let end = run_menu(&mut input, &mut output, &mut service).expect("menu io");
        (end, String::from_utf8(output).expect("output is UTF-8"))
    }

    #[test]
    fn menu_choice_parses_known_options_only() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn parse_task_id_rejects_non_positive_and_text() {
        assert_eq!(parse_task_id(" 12 "), Some(12));
        assert_eq!(parse_task_id("0"), None);
        assert_eq!(parse_task_id("-3"), None);
        assert_eq!(parse_task_id("three"), None);
        assert_eq!(parse_task_id(""), None);
    }

    #[test]
    fn write_tasks_formats_status_lines() {
        let mut done = Task::new(2, "File taxes");
        done.complete();
        let mut output = Vec::new();
        write_tasks(&mut output, &[Task::new(1, "Buy milk"), done]).expect("render tasks");
        assert_eq!(
            String::from_utf8(output).expect("output is UTF-8"),
            "[1] Buy milk - Incomplete\n[2] File taxes - Completed\n"
        );

        let mut empty = Vec::new();
        write_tasks(&mut empty, &[]).expect("render empty list");
        assert_eq!(String::from_utf8(empty).expect("output is UTF-8"), "No tasks available.\n");
    }

    #[test]
    fn full_session_saves_on_exit() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tasks.json");
        let script = "1\nBuy milk\n1\nFile taxes\n4\n2\n3\n1\n2\n5\n";

        let (end, text) = run_script(&path, script);
        assert_eq!(end, SessionEnd::Saved);
        assert!(text.contains("Task 'Buy milk' added successfully."));
        assert!(text.contains("Task 2 marked as complete."));
        assert!(text.contains("Task 1 deleted successfully."));
        assert!(text.contains("[2] File taxes - Completed"));
        assert!(text.contains("Tasks saved to file."));

        let store = load_tasks(&path).expect("saved file should load");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, 2);
        assert!(store.list()[0].completed);
    }

    #[test]
    fn bad_input_is_reported_without_ending_session() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tasks.json");
        let script = "9\n1\n   \n3\nabc\n4\n99\n3\n99\n2\n5\n";

        let (end, text) = run_script(&path, script);
        assert_eq!(end, SessionEnd::Saved);
        assert!(text.contains("Invalid option. Please try again."));
        assert!(text.contains("Could not add task: task title cannot be empty."));
        assert!(text.contains("Invalid task ID 'abc'. Please enter a positive number."));
        assert_eq!(text.matches("Task 99 not found.").count(), 2);
        assert!(text.contains("No tasks available."));
    }

    #[test]
    fn closed_input_does_not_save() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tasks.json");

        let (end, _) = run_script(&path, "1\nnever saved\n");
        assert_eq!(end, SessionEnd::InputClosed);
        assert!(!path.exists());
    }

    #[test]
    fn failed_save_keeps_menu_open() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("tasks.json");

        let (end, text) = run_script(&path, "1\nkeep me\n5\n");
        assert_eq!(end, SessionEnd::InputClosed);
        assert!(text.contains("Could not save tasks"));
        assert!(!text.contains("Tasks saved to file."));
    }
}
