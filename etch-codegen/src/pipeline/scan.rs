use etch_ir::{GenerationRequest, MarkedDeclaration, Round};
use etch_manifest::DEFAULT_CLASS_NAME;

/// Filters a round down to the declarations carrying one marker.
#[derive(Debug, Clone)]
pub struct Scanner {
    marker: String,
    class_name: String,
}

impl Scanner {
    /// Scanner for `marker`, generating the default class name.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }

    /// Set the simple name of the class generated for each match.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Matching declarations paired with their requests, in round order.
    ///
    /// Marker names are compared exactly.
    pub fn matches<'r>(
        &'r self,
        round: &'r Round,
    ) -> impl Iterator<Item = (&'r MarkedDeclaration, GenerationRequest)> + 'r {
        round.iter().filter_map(move |decl| {
            if decl.marker != self.marker {
                tracing::debug!(
                    declaration = %decl.display_name(),
                    marker = %decl.marker,
                    "skipping declaration with another marker"
                );
                return None;
            }
            tracing::debug!(declaration = %decl.display_name(), "matched declaration");
            Some((decl, GenerationRequest::new(&decl.namespace, &self.class_name)))
        })
    }

    /// Requests for every matching declaration, in round order.
    pub fn scan(&self, round: &Round) -> Vec<GenerationRequest> {
        self.matches(round).map(|(_, request)| request).collect()
    }
}

/// Requests for every declaration in `round` tagged with `marker`, targeting
/// the default class name.
pub fn scan(round: &Round, marker: &str) -> Vec<GenerationRequest> {
    Scanner::new(marker).scan(round)
}
