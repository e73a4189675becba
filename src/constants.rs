//! Common constants used throughout the kiln application.
//!
//! Placeholders use one canonical syntax: a snake_case name wrapped in double
//! braces with no inner whitespace, e.g. `{{package_name}}`.

/// Supported layout configuration file names
pub const CONFIG_FILES: [&str; 3] = ["kiln.json", "kiln.yml", "kiln.yaml"];

/// Suffix every generated provider class name ends with exactly once.
pub const PROVIDER_SUFFIX: &str = "ServiceProvider";

/// Class name used when none is supplied.
pub const DEFAULT_CLASS_NAME: &str = "Package";

pub mod tokens {
    pub const PACKAGE_NAME: &str = "{{package_name}}";
    pub const VENDOR_NAME: &str = "{{vendor_name}}";
    pub const DESCRIPTION: &str = "{{package_description}}";
    pub const NAMESPACE: &str = "{{namespace}}";
    pub const ESCAPED_NAMESPACE: &str = "{{escaped_namespace}}";
    pub const CLASS_NAME: &str = "{{class_name}}";
    pub const AUTHOR_NAME: &str = "{{author_name}}";
    pub const AUTHOR_EMAIL: &str = "{{author_email}}";
    pub const PACKAGE_TITLE: &str = "{{package_title}}";
    pub const YEAR: &str = "{{year}}";
    pub const COPYRIGHT_HOLDER: &str = "{{copyright_holder}}";
    pub const HOMEPAGE: &str = "{{package_homepage}}";
    pub const AUTHOR_HOMEPAGE: &str = "{{author_homepage}}";

    /// Opening delimiter shared by every token.
    pub const OPEN: &str = "{{";
}

/// Command-line flag names, shared by the CLI and the value resolver.
pub mod flags {
    pub const PACKAGE_NAME: &str = "package-name";
    pub const VENDOR: &str = "vendor";
    pub const DESCRIPTION: &str = "description";
    pub const CLASS_NAME: &str = "class-name";
    pub const AUTHOR_NAME: &str = "author-name";
    pub const AUTHOR_EMAIL: &str = "author-email";
    pub const HOMEPAGE: &str = "homepage";
    pub const AUTHOR_HOMEPAGE: &str = "author-homepage";
}
