//! Package metadata resolved once per run.
//! Collects the raw answers through a `Resolver`, validates them and derives
//! every identifier form the skeleton files need.

use log::debug;

use crate::constants::{flags, tokens, DEFAULT_CLASS_NAME};
use crate::error::{Error, Result};
use crate::naming::{clean_name, first_name, provider_class_name, slugify, studly};
use crate::prompt::validate_email;
use crate::renderer::TokenMap;
use crate::resolver::{Field, Resolver};

/// Answers exactly as they were given, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct RawMetadata {
    pub package_name: String,
    /// Empty means "derive from the author's first name".
    pub vendor: String,
    pub description: String,
    /// Empty means `DEFAULT_CLASS_NAME`.
    pub class_name: String,
    pub author_name: String,
    pub author_email: String,
    pub homepage: String,
    pub author_homepage: String,
}

/// Immutable, validated metadata for the package being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    package_slug: String,
    vendor_slug: String,
    description: String,
    class_name: String,
    author_name: String,
    author_email: String,
    homepage: String,
    author_homepage: String,
    namespace_separator: String,
    year: i32,
}

impl PackageMetadata {
    /// Normalizes and validates raw answers.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if a required value is blank, a name slugifies
    ///   to nothing or the author email is malformed
    pub fn new(raw: RawMetadata, year: i32, namespace_separator: &str) -> Result<Self> {
        let author_name = require(flags::AUTHOR_NAME, raw.author_name)?;
        let author_email = require(flags::AUTHOR_EMAIL, raw.author_email)?;
        validate_email(&author_email)
            .map_err(|message| Error::invalid_input(flags::AUTHOR_EMAIL, message))?;
        if raw.description.trim().is_empty() {
            return Err(Error::invalid_input(flags::DESCRIPTION, "a value is required"));
        }
        let description = raw.description;

        let package_slug = slug_of(flags::PACKAGE_NAME, &raw.package_name)?;
        let vendor_source = match raw.vendor.trim() {
            "" => first_name(&author_name).to_string(),
            vendor => vendor.to_string(),
        };
        let vendor_slug = slug_of(flags::VENDOR, &vendor_source)?;

        let class_name = match raw.class_name.trim() {
            "" => provider_class_name(DEFAULT_CLASS_NAME),
            name => provider_class_name(name),
        };

        Ok(Self {
            package_slug,
            vendor_slug,
            description,
            class_name,
            author_name,
            author_email,
            homepage: raw.homepage.trim().to_string(),
            author_homepage: raw.author_homepage.trim().to_string(),
            namespace_separator: namespace_separator.to_string(),
            year,
        })
    }

    pub fn package_slug(&self) -> &str {
        &self.package_slug
    }

    pub fn vendor_slug(&self) -> &str {
        &self.vendor_slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn author_homepage(&self) -> &str {
        &self.author_homepage
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn copyright_holder(&self) -> &str {
        &self.author_name
    }

    /// `Vendor<sep>Package`, e.g. `Acme\MyCoolLib`.
    pub fn namespace(&self) -> String {
        self.join_namespace(&self.namespace_separator)
    }

    /// Namespace with the separator doubled, for string literals such as
    /// JSON autoload keys.
    pub fn escaped_namespace(&self) -> String {
        self.join_namespace(&self.namespace_separator.repeat(2))
    }

    pub fn package_title(&self) -> String {
        clean_name(&self.package_slug)
    }

    fn join_namespace(&self, separator: &str) -> String {
        format!("{}{}{}", studly(&self.vendor_slug), separator, studly(&self.package_slug))
    }

    /// Every token of the vocabulary mapped to its value.
    pub fn tokens(&self) -> TokenMap {
        TokenMap::new()
            .with(tokens::PACKAGE_NAME, &self.package_slug)
            .with(tokens::VENDOR_NAME, &self.vendor_slug)
            .with(tokens::DESCRIPTION, &self.description)
            .with(tokens::NAMESPACE, self.namespace())
            .with(tokens::ESCAPED_NAMESPACE, self.escaped_namespace())
            .with(tokens::CLASS_NAME, &self.class_name)
            .with(tokens::AUTHOR_NAME, &self.author_name)
            .with(tokens::AUTHOR_EMAIL, &self.author_email)
            .with(tokens::PACKAGE_TITLE, self.package_title())
            .with(tokens::YEAR, self.year.to_string())
            .with(tokens::COPYRIGHT_HOLDER, self.copyright_holder())
            .with(tokens::HOMEPAGE, &self.homepage)
            .with(tokens::AUTHOR_HOMEPAGE, &self.author_homepage)
    }

    /// The copyright fields only, for the license file.
    pub fn license_tokens(&self) -> TokenMap {
        TokenMap::new()
            .with(tokens::YEAR, self.year.to_string())
            .with(tokens::COPYRIGHT_HOLDER, self.copyright_holder())
    }
}

fn require(field: &str, value: String) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_input(field, "a value is required"));
    }
    Ok(value.to_string())
}

fn slug_of(field: &str, value: &str) -> Result<String> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(Error::invalid_input(
            field,
            format!("'{}' must contain at least one letter or number", value),
        ));
    }
    Ok(slug)
}

/// Resolves every field, prompting where no flag was given, and builds the
/// metadata.
///
/// The author is asked for first so the vendor prompt can default to the
/// author's first name.
pub fn collect(resolver: &Resolver<'_>, year: i32, namespace_separator: &str) -> Result<PackageMetadata> {
    let author_name = resolver.resolve(
        &Field::new(flags::AUTHOR_NAME, "Author name").placeholder("Jane Doe").required(),
    )?;
    let author_email = resolver.resolve(
        &Field::new(flags::AUTHOR_EMAIL, "Author email")
            .placeholder("jane@example.com")
            .required()
            .validator(validate_email),
    )?;
    let vendor = resolver.resolve(
        &Field::new(flags::VENDOR, "Vendor name")
            .placeholder("acme")
            .default_value(first_name(&author_name)),
    )?;
    let package_name = resolver.resolve(
        &Field::new(flags::PACKAGE_NAME, "Package name").placeholder("my-package").required(),
    )?;
    let description = resolver.resolve(
        &Field::new(flags::DESCRIPTION, "Package description")
            .placeholder("A short description of the package")
            .required(),
    )?;
    let class_name = resolver.resolve(
        &Field::new(flags::CLASS_NAME, "Service provider class name")
            .placeholder("PackageServiceProvider")
            .default_value(DEFAULT_CLASS_NAME),
    )?;
    let homepage = resolver.resolve(
        &Field::new(flags::HOMEPAGE, "Package homepage").placeholder("https://github.com/acme/my-package"),
    )?;
    let author_homepage = resolver.resolve(
        &Field::new(flags::AUTHOR_HOMEPAGE, "Author homepage").placeholder("https://example.com"),
    )?;

    let raw = RawMetadata {
        package_name,
        vendor,
        description,
        class_name,
        author_name,
        author_email,
        homepage,
        author_homepage,
    };
    debug!("Collected answers: {:?}", raw);

    PackageMetadata::new(raw, year, namespace_separator)
}
