//! Report rendering.
//!
//! A [`Report`] is the logical content of an analysis result. It is rendered
//! either as a decorated terminal view or as plain text for export; both list
//! the same issues and fields in the same order.

use crate::analysis::{AnalysisResult, Issue};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Default width of the decorated view, in characters.
pub const DEFAULT_BOX_WIDTH: usize = 90;

/// Width of the rule under the plain report header.
const PLAIN_RULE_WIDTH: usize = 80;

const REPORT_TITLE: &str = " AI Inconsistency Analysis Report ";
const NO_ISSUES_MESSAGE: &str = "✅ No inconsistencies were found in the presentation.";
const ERROR_HEADING: &str = "An error occurred:";
const CONFLICT_LABEL: &str = "CONFLICT: ";

/// What a piece of decorated output represents, so a [`Styler`] can color it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Frame,
    Title,
    Subtitle,
    Success,
    Error,
    IssueHeader,
    TypeLabel,
    ConflictLabel,
    EvidenceLabel,
    Bullet,
}

/// Applies terminal styling to decorated output.
pub trait Styler {
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyle;

impl Styler for PlainStyle {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// Logical content of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The analysis failed; only its message is shown.
    Error(String),

    /// The analysis succeeded and found nothing.
    NoIssues,

    /// The analysis found at least one issue.
    Issues(Vec<Issue>),
}

impl From<&AnalysisResult> for Report {
    fn from(result: &AnalysisResult) -> Self {
        match result {
            AnalysisResult::Failure { message } => Self::Error(message.clone()),
            AnalysisResult::Success { issues } if issues.is_empty() => Self::NoIssues,
            AnalysisResult::Success { issues } => Self::Issues(issues.clone()),
        }
    }
}

impl Report {
    /// Plain text for file export.
    pub fn render_plain(&self) -> String {
        match self {
            Self::Error(message) => format!("{}\n{}", ERROR_HEADING, message),
            Self::NoIssues => NO_ISSUES_MESSAGE.to_string(),
            Self::Issues(issues) => {
                let mut lines = vec![format!(
                    "AI Inconsistency Analysis Report: Found {} Issues\n{}",
                    issues.len(),
                    "=".repeat(PLAIN_RULE_WIDTH)
                )];
                for (idx, issue) in issues.iter().enumerate() {
                    lines.push(format!("\n--- ISSUE #{} ---\n", idx + 1));
                    lines.push(format!("TYPE: {}", issue.kind));
                    lines.push(format!("CONFLICT: {}", issue.conflict));
                    lines.push("EVIDENCE:".to_string());
                    for evidence in &issue.evidence {
                        lines.push(format!("  - {}", evidence));
                    }
                }
                lines.join("\n")
            }
        }
    }

    /// Boxed terminal view `width` characters wide.
    pub fn render_decorated(&self, width: usize, style: &dyn Styler) -> String {
        let width = width.max(REPORT_TITLE.len() + 2);
        let inner = width - 2;
        let mut out: Vec<String> = Vec::new();

        if let Self::Error(message) = self {
            out.push(style.paint(Tone::Error, &format!("{}\n{}", ERROR_HEADING, message)));
            return finish(out);
        }

        let bar = "═".repeat(inner);
        out.push(String::new());
        out.push(style.paint(Tone::Frame, &format!("╔{}╗", bar)));
        out.push(format!(
            "{}{}{}",
            style.paint(Tone::Frame, "║"),
            style.paint(Tone::Title, &format!("{:^inner$}", REPORT_TITLE)),
            style.paint(Tone::Frame, "║"),
        ));

        let issues = match self {
            Self::Issues(issues) => issues.as_slice(),
            _ => &[],
        };

        if !issues.is_empty() {
            let subtitle = format!("Found {} potential issue(s) to review.", issues.len());
            out.push(format!(
                "{}{}{}",
                style.paint(Tone::Frame, "║"),
                style.paint(Tone::Subtitle, &format!("{:^inner$}", subtitle)),
                style.paint(Tone::Frame, "║"),
            ));
        }
        out.push(style.paint(Tone::Frame, &format!("╚{}╝", bar)));
        out.push(String::new());

        if issues.is_empty() {
            out.push(style.paint(Tone::Success, NO_ISSUES_MESSAGE));
            out.push(String::new());
            return finish(out);
        }

        for (idx, issue) in issues.iter().enumerate() {
            let header = format!(" ISSUE #{} ", idx + 1);
            out.push(style.paint(Tone::IssueHeader, &format!("{:-^width$}", header)));

            out.push(format!("{} {}", style.paint(Tone::TypeLabel, "TYPE:"), issue.kind));

            let indent = " ".repeat(CONFLICT_LABEL.len() + 1);
            let conflict = wrap(&issue.conflict, width - CONFLICT_LABEL.len() - 1);
            let mut conflict_lines = conflict.iter();
            out.push(format!(
                "{}{}",
                style.paint(Tone::ConflictLabel, CONFLICT_LABEL),
                conflict_lines.next().map(String::as_str).unwrap_or("")
            ));
            for line in conflict_lines {
                out.push(format!("{}{}", indent, line));
            }

            out.push(style.paint(Tone::EvidenceLabel, "EVIDENCE:"));
            for evidence in &issue.evidence {
                let wrapped = wrap(evidence, width - 4);
                let mut lines = wrapped.iter();
                out.push(format!(
                    "  {}",
                    style.paint(
                        Tone::Bullet,
                        &format!("- {}", lines.next().map(String::as_str).unwrap_or(""))
                    )
                ));
                for line in lines {
                    out.push(format!("    {}", line));
                }
            }
            out.push(String::new());
        }

        out.push(style.paint(Tone::Frame, &"=".repeat(width)));
        finish(out)
    }

    /// Write the plain rendering to `path`.
    pub fn write_plain(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render_plain()).map_err(|source| Error::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while !chars.is_empty() {
            let sep = usize::from(current_len > 0);
            if current_len + sep + chars.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(chars.iter());
                current_len += sep + chars.len();
                chars.clear();
            } else if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            } else {
                let rest = chars.split_off(width);
                current.extend(chars.iter());
                lines.push(std::mem::take(&mut current));
                chars = rest;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
