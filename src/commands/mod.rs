pub mod classify;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ok: bool,
    pub details: Vec<String>,
    pub issues: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ok: true,
            details: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn issue(&mut self, text: impl Into<String>) {
        self.ok = false;
        self.issues.push(text.into());
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in &self.details {
            out.push_str(line);
            out.push('\n');
        }
        for line in &self.issues {
            out.push_str("issue: ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::CommandReport;

    #[test]
    fn issue_marks_report_failed() {
        let mut report = CommandReport::new("classify");
        report.detail("archived a/1-x.py");
        assert!(report.ok);
        report.issue("two-sum failed at resolve: boom");
        assert!(!report.ok);
        assert_eq!(
            report.render_text(),
            "archived a/1-x.py\nissue: two-sum failed at resolve: boom\n"
        );
    }
}
