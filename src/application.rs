// SPDX-License-Identifier: MPL-2.0
/*!
Process entry.

[`main`] is the one place where errors leave the application: anything the entry closure
returns as `Err`, or any panic escaping it, is reported to the user as a fatal error and the
process exits with code 1.
*/

use std::any::Any;
use std::error::Error;
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

/**
Splits a raw command line into arguments.

Arguments are separated by runs of whitespace. A double-quoted run is one argument with the
quotes removed, even if it is empty or contains spaces; an unterminated quote runs to the end
of the line.

```
use app_system::application::split_command_line;

assert_eq!(split_command_line(r#"app "foo bar" baz"#), vec!["app", "foo bar", "baz"]);
```
*/
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        while chars.next_if(|c| is_separator(*c)).is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };
        let mut argument = String::new();
        if first == '"' {
            chars.next();
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                argument.push(c);
            }
        } else {
            while let Some(c) = chars.next_if(|c| !is_separator(*c)) {
                argument.push(c);
            }
        }
        arguments.push(argument);
    }
    arguments
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown exception".to_owned()
    }
}

/// Calls `entry`, turning an error or panic into the message to report.
fn run<F>(arguments: Vec<String>, entry: F) -> Result<(), String>
where
    F: FnOnce(Vec<String>) -> Result<(), Box<dyn Error>>,
{
    match std::panic::catch_unwind(AssertUnwindSafe(|| entry(arguments))) {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

/**
Runs the application.

`entry` receives the process arguments (the program name first). On Windows these are split
from the raw command line with [`split_command_line`].

# Example
```no_run
use app_system::application;
use app_system::system::{System, SystemOptions};
use app_system::window::WindowOptions;

fn main() -> std::process::ExitCode {
    application::main(|_args| {
        let mut system = System::native(SystemOptions::new("demo"))?;
        let window = system.create_window(&WindowOptions::new("demo"))?;
        system.show_window(window)?;
        while system.pump_events() {}
        Ok(())
    })
}
```
*/
pub fn main<F>(entry: F) -> ExitCode
where
    F: FnOnce(Vec<String>) -> Result<(), Box<dyn Error>>,
{
    let arguments = crate::sys::arguments();
    logwise::debuginternal_sync!("application::main with {count} arguments", count = arguments.len());
    match run(arguments, entry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            crate::sys::report_fatal(&message);
            ExitCode::FAILURE
        }
    }
}
