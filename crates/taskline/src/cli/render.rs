use colored::Colorize;
use serde_json::Value;
use tasklineapp::commands::{CmdMessage, MessageLevel};

/// Render a JSON value for the terminal: strings bare, everything else as pretty JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{}\n", s),
        other => format!(
            "{}\n",
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
        ),
    }
}

/// Render the resolved document as one `key = value` line per top-level setting.
pub fn render_config(config: &Value) -> String {
    let Some(fields) = config.as_object() else {
        return render_value(config);
    };
    let mut output = String::new();
    for (key, value) in fields {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        output.push_str(&format!("{} = {}\n", key.bold(), shown));
    }
    output
}

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => format!("{}\n", message.content),
        MessageLevel::Success => format!("{}\n", message.content.green()),
        MessageLevel::Warning => format!("{}\n", message.content.yellow()),
        MessageLevel::Error => format!("{}\n", message.content.red()),
    }
}

/// Errors go to stderr, everything else to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let output = render_message(message);
        if message.level == MessageLevel::Error {
            eprint!("{}", output);
        } else {
            print!("{}", output);
        }
    }
}
