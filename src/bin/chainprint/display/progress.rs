use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Step-by-step spinner on stderr; every method is a no-op when silent.
pub struct Progress {
    live: Option<Live>,
}

struct Live {
    spinner: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    step: u8,
    total_steps: u8,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        let live = interactive.then(|| Live {
            spinner: None,
            started: now,
            step_started: now,
            step: 0,
            total_steps,
        });
        Self { live }
    }

    pub fn step(&mut self, description: &str) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear();
        live.step += 1;
        live.step_started = Instant::now();

        let style = ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(TICK_CHARS);
        let spinner = ProgressBar::new_spinner().with_style(style);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(format!(
            "[{}/{}] {}...",
            live.step, live.total_steps, description
        ));
        live.spinner = Some(spinner);
    }

    pub fn complete_step(&mut self, description: &str, details: &[String]) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            live.step_started.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {detail}");
        }
    }

    pub fn finish(mut self) {
        if let Some(live) = self.live.as_mut() {
            live.clear();
            print_footer(live.started.elapsed());
        }
    }
}

impl Live {
    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Descriptors complete {:>29}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}
