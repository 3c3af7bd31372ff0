pub type QueryName = String;
pub type QueryValue = String;

/// Query parameters in the order they are appended to the url.
pub type Queries = Vec<(QueryName, QueryValue)>;

/// A GET request, the only kind the vendor endpoint needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequestData {
    pub url: String,
    pub queries: Option<Queries>,
}

impl HttpRequestData {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            queries: None,
        }
    }

    pub fn with_query<V: ToString>(mut self, name: &str, value: V) -> Self {
        self.queries
            .get_or_insert_with(Vec::new)
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.queries.as_ref().and_then(|queries| {
            queries
                .iter()
                .find(|(query_name, _)| query_name == name)
                .map(|(_, value)| value.as_str())
        })
    }
}
