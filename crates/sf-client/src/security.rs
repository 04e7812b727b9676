//! Security utilities for building request paths and queries.
//!
//! Object type names, field names and record ids end up inside URL paths,
//! so they are validated before a request is formatted. Free-form values
//! are percent-encoded.
//!
//! ```rust
//! use sfsdk_client::security::{soql, url};
//!
//! assert!(soql::is_safe_sobject_name("Account"));
//! assert!(!soql::is_safe_sobject_name("Account/../../limits"));
//!
//! let name = soql::escape_string("O'Brien");
//! let query = format!("SELECT Id FROM Contact WHERE LastName = '{}'", name);
//! assert!(query.contains("O\\'Brien"));
//!
//! assert_eq!(url::encode_param("a/b"), "a%2Fb");
//! ```

/// SOQL escaping and identifier validation.
pub mod soql {
    /// Escape a string value for use inside a SOQL string literal.
    ///
    /// Escapes `'`, `\`, newline, carriage return and tab.
    ///
    /// ```rust
    /// use sfsdk_client::security::soql;
    ///
    /// assert_eq!(soql::escape_string("O'Brien & Co."), "O\\'Brien & Co.");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Validate that a field name contains only safe characters.
    ///
    /// Must start with an ASCII letter; the rest may be ASCII alphanumerics
    /// or underscores (which covers `__c` / `__r` suffixes).
    ///
    /// ```rust
    /// use sfsdk_client::security::soql;
    ///
    /// assert!(soql::is_safe_field_name("Custom_Field__c"));
    /// assert!(!soql::is_safe_field_name("Bad'; DROP TABLE--"));
    /// assert!(!soql::is_safe_field_name(""));
    /// ```
    #[must_use]
    pub fn is_safe_field_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }

    /// Validate that an object type name is safe.
    ///
    /// Object type names follow the same rules as field names.
    #[must_use]
    pub fn is_safe_sobject_name(name: &str) -> bool {
        is_safe_field_name(name)
    }
}

/// URL encoding and id validation.
pub mod url {
    /// URL-encode a path or parameter value.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Validate that a Salesforce record id has the correct format.
    ///
    /// Ids are 15 or 18 ASCII alphanumeric characters.
    ///
    /// ```rust
    /// use sfsdk_client::security::url;
    ///
    /// assert!(url::is_valid_salesforce_id("001000000000001"));
    /// assert!(url::is_valid_salesforce_id("001000000000001AAA"));
    /// assert!(!url::is_valid_salesforce_id("001/../../etc"));
    /// ```
    #[must_use]
    pub fn is_valid_salesforce_id(id: &str) -> bool {
        let len = id.len();
        (len == 15 || len == 18) && id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
