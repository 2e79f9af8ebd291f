//! Fixed tables of the packages and tools PRC can use.
//!
//! The tables are plain ordered data: the report lists entries in the order
//! they appear here, and nothing registers new entries at runtime.

/// A Python package PRC imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Distribution name, as passed to `pip install`.
    pub name: &'static str,
    /// Module name, as passed to `import`.
    pub import_name: &'static str,
    /// What the package enables (optional packages only).
    pub description: Option<&'static str>,
}

/// An external scanner invoked out of process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Executable name looked up on PATH.
    pub command: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What the tool scans for.
    pub description: &'static str,
    /// Install instructions (a URL or a command).
    pub install_hint: &'static str,
    /// Flag that makes the tool print its version and exit 0.
    pub version_flag: &'static str,
}

/// Packages PRC cannot run without.
pub const REQUIRED_PACKAGES: &[PackageDescriptor] = &[
    PackageDescriptor {
        name: "click",
        import_name: "click",
        description: None,
    },
    PackageDescriptor {
        name: "rich",
        import_name: "rich",
        description: None,
    },
];

/// Packages that unlock extra features.
pub const OPTIONAL_PACKAGES: &[PackageDescriptor] = &[
    PackageDescriptor {
        name: "reportlab",
        import_name: "reportlab",
        description: Some("PDF report generation"),
    },
    PackageDescriptor {
        name: "openai",
        import_name: "openai",
        description: Some("AI-powered insights"),
    },
];

/// External scanners PRC delegates to when present.
pub const EXTERNAL_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        command: "trivy",
        name: "Trivy",
        description: "Vulnerability scanner",
        install_hint: "https://trivy.dev/latest/getting-started/installation/",
        version_flag: "--version",
    },
    ToolDescriptor {
        command: "checkov",
        name: "Checkov",
        description: "IaC scanner",
        install_hint: "pip install checkov",
        // checkov rejects --version
        version_flag: "-v",
    },
    ToolDescriptor {
        command: "gitleaks",
        name: "Gitleaks",
        description: "Secret detection",
        install_hint: "https://github.com/gitleaks/gitleaks#installing",
        version_flag: "--version",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_packages_have_no_description() {
        assert!(REQUIRED_PACKAGES.iter().all(|p| p.description.is_none()));
    }

    #[test]
    fn optional_packages_are_described() {
        assert!(OPTIONAL_PACKAGES.iter().all(|p| p.description.is_some()));
    }

    #[test]
    fn checkov_uses_short_version_flag() {
        let checkov = EXTERNAL_TOOLS
            .iter()
            .find(|t| t.command == "checkov")
            .unwrap();
        assert_eq!(checkov.version_flag, "-v");
        assert!(EXTERNAL_TOOLS
            .iter()
            .filter(|t| t.command != "checkov")
            .all(|t| t.version_flag == "--version"));
    }

    #[test]
    fn tool_order_is_stable() {
        let names: Vec<_> = EXTERNAL_TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Trivy", "Checkov", "Gitleaks"]);
    }
}
