//! Report assembly.
//!
//! Checks run one after another in a fixed order: interpreter, required
//! packages, optional packages, external tools, then the AI key variable.
//! A failed check is recorded and the run moves on.

use chrono::Utc;

use crate::config::VerifySettings;
use crate::probe::{ProbeOutcome, SystemProbe, UnavailableReason};
use crate::requirements::{
    PackageDescriptor, EXTERNAL_TOOLS, OPTIONAL_PACKAGES, REQUIRED_PACKAGES,
};

use super::{EnvVarCheck, InterpreterCheck, PackageCheck, ToolCheck, VerificationReport};

/// Run every check and collect the results.
pub fn build_report(probe: &mut dyn SystemProbe, settings: &VerifySettings) -> VerificationReport {
    let interpreter = probe.interpreter();

    let interpreter_check = match &interpreter {
        Some(found) => InterpreterCheck {
            command: Some(found.command.clone()),
            version_text: Some(found.version_text.clone()),
            version: found.version,
            minimum: settings.minimum_python,
            compatible: found
                .version
                .is_some_and(|v| v.meets(&settings.minimum_python)),
        },
        None => {
            tracing::debug!(candidates = ?settings.python, "no python interpreter responded");
            InterpreterCheck {
                command: None,
                version_text: None,
                version: None,
                minimum: settings.minimum_python,
                compatible: false,
            }
        }
    };

    let mut check_packages = |table: &[PackageDescriptor]| -> Vec<PackageCheck> {
        table
            .iter()
            .map(|pkg| {
                let outcome = match &interpreter {
                    Some(found) => probe.module_importable(found, pkg.import_name),
                    None => ProbeOutcome::Unavailable(UnavailableReason::NotFound),
                };
                PackageCheck {
                    name: pkg.name,
                    import_name: pkg.import_name,
                    description: pkg.description,
                    installed: outcome.is_available(),
                    reason: outcome.reason().map(ToString::to_string),
                }
            })
            .collect()
    };

    let required_packages = check_packages(REQUIRED_PACKAGES);
    let optional_packages = check_packages(OPTIONAL_PACKAGES);

    let mut tools = Vec::with_capacity(EXTERNAL_TOOLS.len());
    let mut tools_available = 0;
    for tool in EXTERNAL_TOOLS {
        let outcome = probe.tool_available(tool);
        let available = outcome.is_available();
        if available {
            tools_available += 1;
        }
        tools.push(ToolCheck {
            command: tool.command,
            name: tool.name,
            description: tool.description,
            install_hint: tool.install_hint,
            available,
            location: if available {
                probe.tool_location(tool)
            } else {
                None
            },
            reason: outcome.reason().map(ToString::to_string),
        });
    }

    let ai_insights = EnvVarCheck {
        variable: settings.ai_key_variable.clone(),
        set: probe
            .env_var(&settings.ai_key_variable)
            .is_some_and(|v| !v.is_empty()),
    };

    tracing::debug!(
        tools_available,
        missing_required = required_packages.iter().filter(|p| !p.installed).count(),
        "verification finished"
    );

    VerificationReport {
        generated_at: Utc::now(),
        interpreter: interpreter_check,
        required_packages,
        optional_packages,
        tools,
        tools_available,
        ai_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Interpreter;
    use crate::probe::MockProbe;
    use crate::requirements::PythonVersion;

    #[test]
    fn compatible_interpreter_is_recorded() {
        let mut probe = MockProbe::new().with_python("3.11.4 (main)");
        let report = build_report(&mut probe, &VerifySettings::default());

        assert!(report.interpreter.compatible);
        assert_eq!(report.interpreter.version, Some(PythonVersion::new(3, 11, 4)));
        assert_eq!(report.interpreter.command.as_deref(), Some("python3"));
    }

    #[test]
    fn old_interpreter_is_incompatible() {
        let mut probe = MockProbe::new().with_python("3.8.10 (default)");
        let report = build_report(&mut probe, &VerifySettings::default());
        assert!(!report.interpreter.compatible);
    }

    #[test]
    fn unparseable_version_is_incompatible() {
        let mut probe = MockProbe::new().with_python("PyPy nightly");
        let report = build_report(&mut probe, &VerifySettings::default());
        assert!(report.interpreter.version.is_none());
        assert!(!report.interpreter.compatible);
    }

    #[test]
    fn minimum_comes_from_settings() {
        let mut probe = MockProbe::new().with_python("3.10.2");
        let settings = VerifySettings {
            minimum_python: PythonVersion::new(3, 11, 0),
            ..Default::default()
        };
        let report = build_report(&mut probe, &settings);
        assert!(!report.interpreter.compatible);
        assert_eq!(report.interpreter.minimum, PythonVersion::new(3, 11, 0));
    }

    #[test]
    fn packages_are_missing_without_interpreter() {
        let mut probe = MockProbe::new().with_modules(&["click", "rich"]);
        let report = build_report(&mut probe, &VerifySettings::default());

        assert!(report.interpreter.command.is_none());
        assert!(report.required_packages.iter().all(|p| !p.installed));
        assert!(report.optional_packages.iter().all(|p| !p.installed));
        assert!(probe.module_calls().is_empty());
    }

    #[test]
    fn packages_are_probed_in_table_order() {
        let mut probe = MockProbe::new()
            .with_python("3.12.0")
            .with_modules(&["click", "openai"]);
        let report = build_report(&mut probe, &VerifySettings::default());

        assert_eq!(probe.module_calls(), ["click", "rich", "reportlab", "openai"]);
        let installed: Vec<_> = report
            .required_packages
            .iter()
            .chain(&report.optional_packages)
            .map(|p| (p.name, p.installed))
            .collect();
        assert_eq!(
            installed,
            [
                ("click", true),
                ("rich", false),
                ("reportlab", false),
                ("openai", true)
            ]
        );
        assert_eq!(report.missing_required().count(), 1);
    }

    #[test]
    fn tools_are_counted() {
        let mut probe = MockProbe::new().with_tools(&["trivy", "gitleaks"]);
        let report = build_report(&mut probe, &VerifySettings::default());

        assert_eq!(report.tools_available, 2);
        assert!(!report.builtin_only());
        assert_eq!(probe.tool_calls(), ["trivy", "checkov", "gitleaks"]);
        let checkov = report.tools.iter().find(|t| t.command == "checkov").unwrap();
        assert!(!checkov.available);
        assert_eq!(checkov.reason.as_deref(), Some("not found"));
    }

    #[test]
    fn no_tools_means_builtin_only() {
        let mut probe = MockProbe::new();
        let report = build_report(&mut probe, &VerifySettings::default());
        assert_eq!(report.tools_available, 0);
        assert!(report.builtin_only());
    }

    #[test]
    fn location_is_only_looked_up_for_available_tools() {
        let mut probe = MockProbe::new().with_tools(&["trivy"]);
        let report = build_report(&mut probe, &VerifySettings::default());
        assert!(report.tools[0].location.is_some());
        assert!(report.tools[1].location.is_none());
    }

    #[test]
    fn ai_key_must_be_non_empty() {
        let mut set = MockProbe::new().with_env("OPENAI_API_KEY", "sk-test");
        let mut empty = MockProbe::new().with_env("OPENAI_API_KEY", "");
        let mut unset = MockProbe::new();

        let settings = VerifySettings::default();
        assert!(build_report(&mut set, &settings).ai_insights.set);
        assert!(!build_report(&mut empty, &settings).ai_insights.set);
        assert!(!build_report(&mut unset, &settings).ai_insights.set);
    }

    #[test]
    fn ai_key_variable_is_configurable() {
        let mut probe = MockProbe::new().with_env("PRC_AI_KEY", "k");
        let settings = VerifySettings {
            ai_key_variable: "PRC_AI_KEY".to_string(),
            ..Default::default()
        };
        let report = build_report(&mut probe, &settings);
        assert!(report.ai_insights.set);
        assert_eq!(report.ai_insights.variable, "PRC_AI_KEY");
    }

    #[test]
    fn interpreter_passed_to_module_probe() {
        let mut probe = MockProbe::new().with_python("3.9.1");
        build_report(&mut probe, &VerifySettings::default());
        let expected = Interpreter {
            command: "python3".to_string(),
            version_text: "3.9.1".to_string(),
            version: Some(PythonVersion::new(3, 9, 1)),
        };
        assert_eq!(probe.last_interpreter(), Some(&expected));
    }
}
