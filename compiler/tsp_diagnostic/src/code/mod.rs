//! Diagnostic codes.
//!
//! Codes are opaque string identifiers owned by the pass that reports them
//! (`"deprecated"`, `"duplicate-symbol"`, `"@scope/lib/rule"`, ...). They are
//! what users search for and what linters key their configuration on.

use std::borrow::Cow;
use std::fmt;

/// Identifier of a diagnostic kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticCode(Cow<'static, str>);

impl DiagnosticCode {
    /// Warning reported for uses of deprecated declarations.
    pub const DEPRECATED: DiagnosticCode = DiagnosticCode::from_static("deprecated");

    pub const fn from_static(code: &'static str) -> Self {
        DiagnosticCode(Cow::Borrowed(code))
    }

    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        DiagnosticCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for DiagnosticCode {
    fn from(code: &'static str) -> Self {
        DiagnosticCode::from_static(code)
    }
}

impl From<String> for DiagnosticCode {
    fn from(code: String) -> Self {
        DiagnosticCode(Cow::Owned(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_codes_compare_equal() {
        let owned = DiagnosticCode::from(String::from("deprecated"));
        assert_eq!(owned, DiagnosticCode::DEPRECATED);
        assert_eq!(DiagnosticCode::new("deprecated"), DiagnosticCode::DEPRECATED);
    }

    #[test]
    fn display_is_the_raw_code() {
        let code = DiagnosticCode::from("@typespec/http/missing-uri-param");
        assert_eq!(code.to_string(), "@typespec/http/missing-uri-param");
        assert_eq!(code.as_str(), "@typespec/http/missing-uri-param");
    }
}
