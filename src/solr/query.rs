// file: src/solr/query.rs
// description: query string and select parameter construction for the Solr standard parser
// reference: https://solr.apache.org/guide/solr/latest/query-guide/standard-query-parser.html

pub const MATCH_ALL: &str = "*:*";

/// `field:value` by plain interpolation.
///
/// The value is not escaped: `Department:IT OR Gender:Male` style values are
/// parsed by Solr as query syntax. Use [`escape_query_value`] first when the
/// value must match literally.
pub fn field_query(field: &str, value: &str) -> String {
    format!("{}:{}", field, value)
}

/// Matches every document that has any value in `field`.
pub fn exists_query(field: &str) -> String {
    format!("{}:[* TO *]", field)
}

pub fn escape_query_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if is_query_metachar(ch) || ch.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn is_query_metachar(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-'
            | '&'
            | '|'
            | '!'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '^'
            | '"'
            | '~'
            | '*'
            | '?'
            | ':'
            | '\\'
            | '/'
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectParams {
    pub query: String,
    pub rows: Option<u32>,
    pub facet_fields: Vec<String>,
    pub facet_mincount: Option<u32>,
}

impl SelectParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            rows: None,
            facet_fields: Vec::new(),
            facet_mincount: None,
        }
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn facet_field(mut self, field: impl Into<String>) -> Self {
        self.facet_fields.push(field.into());
        self
    }

    pub fn facet_mincount(mut self, mincount: u32) -> Self {
        self.facet_mincount = Some(mincount);
        self
    }

    /// Query-string pairs for the `/select` handler.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.query.clone()), ("wt", "json".to_string())];

        if let Some(rows) = self.rows {
            pairs.push(("rows", rows.to_string()));
        }

        if !self.facet_fields.is_empty() {
            pairs.push(("facet", "true".to_string()));
            for field in &self.facet_fields {
                pairs.push(("facet.field", field.clone()));
            }
            if let Some(mincount) = self.facet_mincount {
                pairs.push(("facet.mincount", mincount.to_string()));
            }
        }

        pairs
    }
}
