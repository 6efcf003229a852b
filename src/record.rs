// src/record.rs
//! The one record shape every lookup adapter produces.

use std::fmt;

/// Which adapter produced a record. Also the column prefix in the wide layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// id.loc.gov subject authority suggest (OpenSearch arrays)
    Lcsh,
    /// OCLC FAST suggest (Solr documents)
    Fast,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Lcsh => "LCSH",
            Source::Fast => "FAST",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked candidate for a search term.
///
/// Optional fields are `None` when the service does not expose them;
/// that is an expected state, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionRecord {
    pub search_term: String,
    pub label: Option<String>,
    pub identifier: Option<String>,
    pub kind: Option<String>,
    pub uri: Option<String>,
    pub source: Source,
}

impl SuggestionRecord {
    /// Bare record for `term`; fill the optional fields with the builder methods.
    pub fn new(source: Source, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            label: None,
            identifier: None,
            kind: None,
            uri: None,
            source,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_uri(mut self, uri: Option<String>) -> Self {
        self.uri = uri;
        self
    }

    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_identifier(mut self, identifier: Option<String>) -> Self {
        self.identifier = identifier;
        self
    }

    /// Value for a slot field, borrowed.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Label => self.label.as_deref(),
            Field::Uri => self.uri.as_deref(),
            Field::Identifier => self.identifier.as_deref(),
            Field::Type => self.kind.as_deref(),
        }
    }
}

/// Optional record fields that can be laid out as columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Label,
    Uri,
    Identifier,
    Type,
}

impl Field {
    /// Column name fragment in the wide layout (`LCSH_URI_2`).
    pub fn wide_name(&self) -> &'static str {
        match self {
            Field::Label => "Label",
            Field::Uri => "URI",
            Field::Identifier => "ID",
            Field::Type => "Type",
        }
    }

    /// Column name in the long layout.
    pub fn long_name(&self) -> &'static str {
        match self {
            Field::Label => "label",
            Field::Uri => "uri",
            Field::Identifier => "identifier",
            Field::Type => "type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_borrows_optional_values() {
        let r = SuggestionRecord::new(Source::Lcsh, "abuse")
            .with_label(Some("Abuse of administrative power".into()))
            .with_kind(Some("LCSH".into()));

        assert_eq!(r.field(Field::Label), Some("Abuse of administrative power"));
        assert_eq!(r.field(Field::Type), Some("LCSH"));
        assert_eq!(r.field(Field::Uri), None);
        assert_eq!(r.field(Field::Identifier), None);

        let r = r.with_identifier(Some("fst00802159".into()));
        assert_eq!(r.field(Field::Identifier), Some("fst00802159"));
    }

    #[test]
    fn source_prints_as_column_prefix() {
        assert_eq!(Source::Fast.to_string(), "FAST");
        assert_eq!(format!("{}_Label_1", Source::Lcsh), "LCSH_Label_1");
    }
}
