use crate::core::form::{FormController, SubmitDisposition};
use crate::core::render::render_predictions;
use crate::domain::model::{RequestLifecycle, GRADE_RANGE};
use crate::domain::ports::PredictionApi;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { course: String, value: String },
    Fill { value: String },
    Show,
    Courses,
    Info,
    Health,
    Predict,
    Help,
    Quit,
    Unknown(String),
}

/// Parses a raw input line. Returns None for blank lines. Anything that does
/// not match a known command shape comes back as `Unknown` so the loop can
/// print usage instead of bailing out.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    let command = match head.to_ascii_lowercase().as_str() {
        "set" => match (parts.next(), parts.next()) {
            (Some(course), Some(value)) => Command::Set {
                course: course.to_string(),
                value: value.to_string(),
            },
            _ => Command::Unknown(line.trim().to_string()),
        },
        "fill" => match parts.next() {
            Some(value) => Command::Fill {
                value: value.to_string(),
            },
            None => Command::Unknown(line.trim().to_string()),
        },
        "show" => Command::Show,
        "courses" => Command::Courses,
        "info" => Command::Info,
        "health" => Command::Health,
        "predict" => Command::Predict,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };

    Some(command)
}

const HELP_TEXT: &str = "\
Commands:
  set <course> <value>   set one grade
  fill <value>           set every grade at once
  show                   print the current grade sheet
  courses                list input and output courses
  info                   show model metadata
  health                 check backend availability
  predict                submit the sheet and show predictions
  help                   this text
  quit                   leave";

/// Interactive front end for the form controller. The loop itself is thin
/// IO; all behavior lives in the controller and is tested there.
pub struct Session<'a, A: PredictionApi> {
    api: &'a A,
    controller: FormController,
}

impl<'a, A: PredictionApi> Session<'a, A> {
    pub fn new(api: &'a A, controller: FormController) -> Self {
        Self { api, controller }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub async fn run(&mut self) -> Result<()> {
        let schema = self.controller.schema();
        println!(
            "Loaded {} input courses, predicting {} courses.",
            schema.input_courses.len(),
            schema.output_courses.len()
        );
        if let Some(info) = &schema.model_info {
            println!("Model: {}", info.model_name);
        }
        println!("Grades default to 50; expected range {}-{}. Type 'help' for commands.",
            GRADE_RANGE.0, GRADE_RANGE.1);

        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut line = String::new();

        loop {
            print!("academiq> ");
            std::io::stdout().flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }

            let Some(command) = parse_command(&line) else {
                continue;
            };

            if !self.dispatch(command).await? {
                break;
            }
        }

        Ok(())
    }

    /// Returns false when the session should end.
    async fn dispatch(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Set { course, value } => {
                self.controller.set_grade(&course, &value);
                match self.controller.sheet().get(&course) {
                    Some(current) => println!("{} = {}", course, current),
                    None => println!("Unknown course '{}'. Try 'courses'.", course),
                }
            }
            Command::Fill { value } => {
                self.controller.set_all(&value);
                let sheet = self.controller.sheet();
                if let Some((_, current)) = sheet.iter().next() {
                    println!("All {} courses set to {}", sheet.len(), current);
                }
            }
            Command::Show => {
                for (course, value) in self.controller.sheet().iter() {
                    println!("  {:<12} {}", course, value);
                }
            }
            Command::Courses => {
                let schema = self.controller.schema();
                println!("Input:  {}", schema.input_courses.join(", "));
                println!("Output: {}", schema.output_courses.join(", "));
            }
            Command::Info => match &self.controller.schema().model_info {
                Some(info) => {
                    println!("Model: {}", info.model_name);
                    let mut metrics: Vec<_> = info.metrics.iter().collect();
                    metrics.sort_by(|a, b| a.0.cmp(b.0));
                    for (name, value) in metrics {
                        println!("  {:<8} {:.4}", name, value);
                    }
                }
                None => println!("Model metadata is not available."),
            },
            Command::Health => match self.api.health().await {
                Ok(report) => println!(
                    "Backend {} (model loaded: {}{})",
                    report.status,
                    report.model_loaded,
                    report
                        .model_name
                        .as_deref()
                        .map(|name| format!(", {}", name))
                        .unwrap_or_default()
                ),
                Err(e) => println!("Backend unreachable: {}", e),
            },
            Command::Predict => {
                println!("Predicting...");
                if self.controller.submit(self.api).await == SubmitDisposition::AlreadyInFlight {
                    println!("A prediction is already in flight.");
                    return Ok(true);
                }
                self.print_outcome();
            }
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => return Ok(false),
            Command::Unknown(input) => {
                println!("Unrecognised command '{}'. Type 'help'.", input);
            }
        }

        Ok(true)
    }

    fn print_outcome(&self) {
        match self.controller.lifecycle() {
            RequestLifecycle::Success => {
                let schema = self.controller.schema();
                if let Some(outcome) = self.controller.last_result() {
                    println!("✅ Predicted grades:");
                    for (course, value) in render_predictions(&schema.output_courses, outcome) {
                        println!("  {:<12} {}", course, value);
                    }
                    if let Some(model) = &outcome.model_used {
                        println!("(model: {})", model);
                    }
                }
            }
            RequestLifecycle::Failed(message) => println!("❌ {}", message),
            _ => {}
        }
    }
}
