use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Stderr progress for the loading stage. Draws nothing when stderr is not a terminal.
pub struct ProgressTracker {
    hidden: bool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self { hidden: false }
    }

    /// A tracker whose bars never draw, for library callers and tests.
    pub fn hidden() -> Self {
        Self { hidden: true }
    }

    pub fn create_progress_bar(&self, len: u64, name: &str) -> ProgressBar {
        if self.hidden {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner}} {}: [{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {{msg}}",
                name
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
