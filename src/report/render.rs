//! Report output.
//!
//! The text layout is fixed: a 60-column `=` banner, `--- Section ---`
//! headers, and one bracketed tag per item. Continuation lines are indented
//! to line up with the text after the tag.

use std::io::{self, Write};

use super::theme::{ReportTheme, Tag};
use super::VerificationReport;

/// Width of the `=` banner.
const BANNER_WIDTH: usize = 60;

/// Example invocation printed at the end of the report.
const SCAN_USAGE: &str = "python -m src.cli.main scan /path/to/project";

/// Write the human-readable report.
pub fn render_text(
    report: &VerificationReport,
    theme: &ReportTheme,
    out: &mut dyn Write,
) -> io::Result<()> {
    let mut w = TextWriter { out, theme };

    w.banner("PRC Setup Verification")?;

    // Interpreter
    let minimum = report.interpreter.minimum.short();
    w.blank()?;
    w.line(&format!(
        "Python Version: {}",
        report
            .interpreter
            .version_text
            .as_deref()
            .unwrap_or("not found")
    ))?;
    if report.interpreter.compatible {
        w.status(2, Tag::Ok, "Python version is compatible")?;
    } else {
        w.status(2, Tag::Warning, &format!("Python {}+ is recommended", minimum))?;
    }

    w.section("Required Python Packages")?;
    for pkg in &report.required_packages {
        if pkg.installed {
            w.status(2, Tag::Ok, &format!("{} installed", pkg.name))?;
        } else {
            w.status(
                2,
                Tag::Missing,
                &format!("{} - install with: {}", pkg.name, pkg.install_command()),
            )?;
        }
    }

    w.section("Optional Python Packages")?;
    for pkg in &report.optional_packages {
        let summary = match pkg.description {
            Some(description) => format!("{} - {}", pkg.name, description),
            None => pkg.name.to_string(),
        };
        if pkg.installed {
            w.status(2, Tag::Ok, &summary)?;
        } else {
            w.status(2, Tag::Optional, &summary)?;
            w.continuation(
                2,
                Tag::Optional,
                &format!("Install with: {}", pkg.install_command()),
            )?;
        }
    }

    w.section("External Scanning Tools")?;
    for tool in &report.tools {
        let summary = format!("{} - {}", tool.name, tool.description);
        if tool.available {
            w.status(2, Tag::Ok, &summary)?;
        } else {
            w.status(2, Tag::NotInstalled, &summary)?;
            w.continuation(
                2,
                Tag::NotInstalled,
                &format!("Install: {}", tool.install_hint),
            )?;
        }
    }

    w.section("Built-in Scanner")?;
    w.status(2, Tag::AlwaysAvailable, "Built-in Secret Scanner")?;
    w.continuation(
        2,
        Tag::AlwaysAvailable,
        "Detects hardcoded passwords, API keys, K8s secrets",
    )?;

    w.blank()?;
    w.banner("Summary")?;
    w.blank()?;
    if report.builtin_only() {
        w.status(0, Tag::Info, "No external tools installed.")?;
        w.continuation(0, Tag::Info, "PRC will use the built-in secret scanner only.")?;
        w.continuation(
            0,
            Tag::Info,
            "For comprehensive scanning, install Trivy, Checkov, or Gitleaks.",
        )?;
    } else {
        w.status(
            0,
            Tag::Ok,
            &format!(
                "{} external tool(s) available + built-in scanner",
                report.tools_available
            ),
        )?;
    }

    w.section("Environment Variables")?;
    let var = &report.ai_insights.variable;
    if report.ai_insights.set {
        w.status(2, Tag::Ok, &format!("{} is set (AI insights enabled)", var))?;
    } else {
        w.status(
            2,
            Tag::NotSet,
            &format!("{} - AI insights will use fallback mode", var),
        )?;
        w.continuation(
            2,
            Tag::NotSet,
            &format!("Set with: export {}=your-key", var),
        )?;
    }

    w.blank()?;
    w.rule()?;
    w.line("To run a scan:")?;
    w.line(&format!("  {}", SCAN_USAGE))?;
    w.rule()?;

    w.out.flush()
}

/// Write the report as pretty-printed JSON.
pub fn render_json(report: &VerificationReport, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}

struct TextWriter<'a> {
    out: &'a mut dyn Write,
    theme: &'a ReportTheme,
}

impl TextWriter<'_> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn rule(&mut self) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "{}", self.theme.format_header(&rule))
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "{}", self.theme.format_header(title))?;
        self.rule()
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        self.blank()?;
        writeln!(
            self.out,
            "{}",
            self.theme.format_header(&format!("--- {} ---", title))
        )
    }

    fn status(&mut self, indent: usize, tag: Tag, text: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{:indent$}{} {}",
            "",
            self.theme.format_tag(tag),
            text,
            indent = indent
        )
    }

    /// A line aligned under the text of a preceding `status` line.
    fn continuation(&mut self, indent: usize, tag: Tag, text: &str) -> io::Result<()> {
        let width = indent + tag.label().len() + 1;
        writeln!(
            self.out,
            "{:width$}{}",
            "",
            self.theme.format_hint(text),
            width = width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifySettings;
    use crate::probe::MockProbe;
    use crate::report::build_report;

    fn render(probe: &mut MockProbe) -> String {
        let report = build_report(probe, &VerifySettings::default());
        let mut buf = Vec::new();
        render_text(&report, &ReportTheme::plain(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn starts_with_banner() {
        let text = render(&mut MockProbe::new());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("=".repeat(60).as_str()));
        assert_eq!(lines.next(), Some("PRC Setup Verification"));
        assert_eq!(lines.next(), Some("=".repeat(60).as_str()));
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn compatible_python_is_ok() {
        let text = render(&mut MockProbe::new().with_python("3.11.4 (main, Jun  7 2023)"));
        assert!(text.contains("Python Version: 3.11.4 (main, Jun  7 2023)\n"));
        assert!(text.contains("  [OK] Python version is compatible\n"));
    }

    #[test]
    fn old_python_warns() {
        let text = render(&mut MockProbe::new().with_python("3.8.10"));
        assert!(text.contains("Python Version: 3.8.10\n  [WARNING] Python 3.9+ is recommended\n"));
    }

    #[test]
    fn missing_python_warns() {
        let text = render(&mut MockProbe::new());
        assert!(text.contains("Python Version: not found\n  [WARNING] Python 3.9+ is recommended\n"));
    }

    #[test]
    fn package_lines() {
        let text = render(
            &mut MockProbe::new()
                .with_python("3.12.1")
                .with_modules(&["click", "reportlab"]),
        );
        assert!(text.contains("--- Required Python Packages ---\n"));
        assert!(text.contains("  [OK] click installed\n"));
        assert!(text.contains("  [MISSING] rich - install with: pip install rich\n"));
        assert!(text.contains("  [OK] reportlab - PDF report generation\n"));
        assert!(text.contains(
            "  [OPTIONAL] openai - AI-powered insights\n             Install with: pip install openai\n"
        ));
    }

    #[test]
    fn tool_lines_align_hints() {
        let text = render(&mut MockProbe::new().with_tools(&["trivy"]));
        assert!(text.contains("  [OK] Trivy - Vulnerability scanner\n"));
        assert!(text.contains(
            "  [NOT INSTALLED] Checkov - IaC scanner\n                  Install: pip install checkov\n"
        ));
        assert!(text.contains(
            "                  Install: https://github.com/gitleaks/gitleaks#installing\n"
        ));
    }

    #[test]
    fn builtin_scanner_is_always_listed() {
        let text = render(&mut MockProbe::new());
        assert!(text.contains(
            "--- Built-in Scanner ---\n  [ALWAYS AVAILABLE] Built-in Secret Scanner\n                     Detects hardcoded passwords, API keys, K8s secrets\n"
        ));
    }

    #[test]
    fn summary_without_tools() {
        let text = render(&mut MockProbe::new());
        assert!(text.contains(
            "Summary\n============================================================\n\n[INFO] No external tools installed.\n       PRC will use the built-in secret scanner only.\n"
        ));
        assert!(!text.contains("external tool(s) available"));
    }

    #[test]
    fn summary_counts_tools() {
        let text = render(&mut MockProbe::new().with_tools(&["trivy", "checkov", "gitleaks"]));
        assert!(text.contains("[OK] 3 external tool(s) available + built-in scanner\n"));
        assert!(!text.contains("No external tools installed."));
    }

    #[test]
    fn ai_key_unset_uses_fallback() {
        let text = render(&mut MockProbe::new());
        assert!(text.contains(
            "  [NOT SET] OPENAI_API_KEY - AI insights will use fallback mode\n            Set with: export OPENAI_API_KEY=your-key\n"
        ));
    }

    #[test]
    fn ai_key_set_enables_insights() {
        let text = render(&mut MockProbe::new().with_env("OPENAI_API_KEY", "sk-123"));
        assert!(text.contains("  [OK] OPENAI_API_KEY is set (AI insights enabled)\n"));
        assert!(!text.contains("fallback mode"));
    }

    #[test]
    fn ends_with_usage() {
        let text = render(&mut MockProbe::new());
        let rule = "=".repeat(60);
        let expected = format!(
            "\n{rule}\nTo run a scan:\n  python -m src.cli.main scan /path/to/project\n{rule}\n"
        );
        assert!(text.ends_with(&expected));
    }

    #[test]
    fn sections_appear_in_order() {
        let text = render(&mut MockProbe::new());
        let order = [
            "Python Version:",
            "--- Required Python Packages ---",
            "--- Optional Python Packages ---",
            "--- External Scanning Tools ---",
            "--- Built-in Scanner ---",
            "Summary",
            "--- Environment Variables ---",
            "To run a scan:",
        ];
        let positions: Vec<_> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn json_includes_counts_and_reasons() {
        let report = build_report(
            &mut MockProbe::new().with_tools(&["gitleaks"]),
            &VerifySettings::default(),
        );
        let mut buf = Vec::new();
        render_json(&report, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["tools_available"], 1);
        assert_eq!(value["interpreter"]["minimum"], "3.9.0");
        assert_eq!(value["tools"][0]["reason"], "not found");
        assert_eq!(value["tools"][2]["location"], "/usr/local/bin/gitleaks");
        assert_eq!(value["ai_insights"]["set"], false);
        assert!(value["generated_at"].is_string());
    }
}
