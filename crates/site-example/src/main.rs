//! Demo console app: a couple of independent commands plus a `site` group.
//!
//! Try:
//!
//! ```text
//! site-example                 # command listing
//! site-example version
//! site-example greet tom
//! site-example site/about
//! site-example site/status
//! site-example sitee           # "maybe you mean" suggestion
//! ```

use std::process;

use anyhow::Result;
use crier::{
    AppMeta, Application, Command, Controller, ExitStatus, Input, Output, STATUS_OK,
};

#[derive(Default)]
struct VersionCommand {
    app: Option<AppMeta>,
}

impl Command for VersionCommand {
    fn declared_name() -> &'static str {
        "version"
    }

    fn declared_description() -> &'static str {
        "print the application version"
    }

    fn set_app(&mut self, app: AppMeta) {
        self.app = Some(app);
    }

    fn run(&mut self, _input: &mut Input, output: &mut Output) -> Result<ExitStatus> {
        if let Some(app) = &self.app {
            output.writeln(&format!("{} {}", app.name, app.version))?;
        }
        Ok(STATUS_OK)
    }
}

#[derive(Default)]
struct SiteController {
    name: String,
}

impl Controller for SiteController {
    fn declared_name() -> &'static str {
        "site"
    }

    fn declared_description() -> &'static str {
        "inspect and manage the demo site"
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn run(&mut self, action: &str, _input: &mut Input, output: &mut Output) -> Result<ExitStatus> {
        match action {
            "" | "index" => {
                let actions = [
                    ("index", "this overview"),
                    ("about", "details about the site"),
                    ("status", "per-service health table"),
                ];
                output.a_list(&actions, Some("Site actions:"))?;
                Ok(STATUS_OK)
            }
            "about" => {
                let facts = [
                    ("name", "crier demo site"),
                    ("stack", "rust + crier"),
                    ("uptime", "42 days"),
                ];
                output.panel(&facts, "About", '*')?;
                Ok(STATUS_OK)
            }
            "status" => {
                let rows = vec![
                    vec!["web".to_string(), "up".to_string()],
                    vec!["worker".to_string(), "up".to_string()],
                    vec!["mailer".to_string(), "degraded".to_string()],
                ];
                output.table(&["Service", "State"], &rows, Some("Site Status"))?;
                Ok(STATUS_OK)
            }
            other => {
                output.error(&format!(
                    "unknown action '{other}' in the '{}' group",
                    self.name
                ))?;
                Ok(2)
            }
        }
    }
}

fn build_app() -> Result<Application> {
    let meta = AppMeta::new("site-example", env!("CARGO_PKG_VERSION"))
        .described("crier demo application");
    let mut app = Application::new(meta);

    app.add_command::<VersionCommand>()?;
    app.command_fn("greet", Some("greet someone by name"), |input, output| {
        let who = input.arg(0).unwrap_or("world").to_string();
        output.success(&format!("hello, {who}!"))?;
        Ok(STATUS_OK)
    })?;
    app.add_group::<SiteController>()?;

    Ok(app)
}

fn main() {
    match build_app().and_then(|mut app| app.run()) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("site-example: {err:#}");
            process::exit(1);
        }
    }
}
