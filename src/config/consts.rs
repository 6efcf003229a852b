// src/config/consts.rs

// Net config
pub const FAST_SEARCH_URL: &str = "https://fast.oclc.org/searchfast/fastsuggest";
pub const LCSH_SEARCH_URL: &str = "https://id.loc.gov/authorities/subjects/suggest";
pub const FAST_RECORD_URL: &str = "https://id.worldcat.org/fast/";
pub const USER_AGENT: &str = concat!("subject_lookup/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 10;
pub const RDF_XML: &str = "application/rdf+xml";

// Lookup
pub const MAX_RESULTS: usize = 3; // also the number of wide slots per adapter
pub const AUTHORITY_TAG: &str = "LCSH";

// Connectivity check
pub const CHECK_MAX: usize = 10;
pub const CHECK_TERM: &str = "abuse";
pub const CHECK_RECORD_ID: &str = "802159";
pub const CHECK_JSON_SNIPPET: usize = 500;
pub const CHECK_XML_SNIPPET: usize = 300;

// Export
pub const WIDE_STEM: &str = "assessment_results";
pub const LONG_STEM: &str = "suggestions_long";
pub const TERM_HEADER: &str = "Search Term";

// Preview
pub const PREVIEW_ROWS: usize = 5;
pub const PREVIEW_COL_WIDTH: usize = 20;
pub const PREVIEW_COLUMNS: &[&str] = &[TERM_HEADER, "LCSH_Label_1", "LCSH_URI_1", "FAST_Label_1"];

pub const DEFAULT_TERMS: &[&str] = &[
    "abuse", "education", "immigration", "gender", "climate change",
    "artificial intelligence", "democracy", "mental health", "sustainability", "human rights",
    "globalization", "poverty", "racism", "social media", "pandemic",
    "epidemiology", "genetics", "philosophy", "history", "literature",
];
