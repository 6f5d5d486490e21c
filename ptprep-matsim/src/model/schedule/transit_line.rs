use super::TransitRoute;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct TransitLineId(pub String);

impl Display for TransitLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitLineId {
    fn from(id: &str) -> Self {
        TransitLineId(String::from(id))
    }
}

/// a named transit service grouping one or more routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitLine {
    pub id: TransitLineId,
    routes: Vec<TransitRoute>,
}

impl TransitLine {
    pub fn new(id: TransitLineId) -> TransitLine {
        TransitLine { id, routes: vec![] }
    }

    pub fn add_route(&mut self, route: TransitRoute) {
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[TransitRoute] {
        &self.routes
    }
}
