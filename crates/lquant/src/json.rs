//! JSON serialization types for search results

use crate::logic::{LabeledFormula, Tableau};
use crate::state::SearchResult;
use serde::{Deserialize, Serialize};

/// JSON representation of a labeled formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaJson {
    pub world: i64,
    pub formula: String,
}

impl From<&LabeledFormula> for FormulaJson {
    fn from(formula: &LabeledFormula) -> Self {
        FormulaJson {
            world: formula.world.0,
            formula: formula.prop.to_string(),
        }
    }
}

/// JSON representation of a concrete assignment `term = value` in a world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingJson {
    pub world: i64,
    pub term: String,
    pub value: i64,
}

/// JSON representation of a tableau
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauJson {
    pub formulas: Vec<FormulaJson>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bindings: Vec<BindingJson>,
}

impl TableauJson {
    pub fn from_tableau(tableau: &Tableau) -> Self {
        TableauJson {
            formulas: tableau.iter().map(FormulaJson::from).collect(),
            bindings: tableau
                .bindings()
                .map(|(world, term, value)| BindingJson {
                    world: world.0,
                    term: term.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

/// JSON representation of a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum SearchResultJson {
    Unsatisfiable {
        steps: usize,
    },
    Satisfiable {
        witness: TableauJson,
        open_branches: usize,
        steps: usize,
    },
    ResourceLimit {
        reason: String,
        open_branches: usize,
        steps: usize,
    },
}

impl SearchResultJson {
    pub fn from_result(result: &SearchResult, steps: usize) -> Self {
        match result {
            SearchResult::Unsatisfiable => SearchResultJson::Unsatisfiable { steps },
            SearchResult::Satisfiable(frontier) => SearchResultJson::Satisfiable {
                witness: frontier
                    .first()
                    .map(TableauJson::from_tableau)
                    .unwrap_or_else(|| TableauJson::from_tableau(&Tableau::new())),
                open_branches: frontier.len(),
                steps,
            },
            SearchResult::ResourceLimit(frontier) => SearchResultJson::ResourceLimit {
                reason: "step limit reached".to_string(),
                open_branches: frontier.len(),
                steps,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Proposition, Term, WorldId};

    #[test]
    fn test_unsatisfiable_is_tagged() {
        let json = serde_json::to_value(SearchResult::Unsatisfiable.to_json(12)).unwrap();
        assert_eq!(json["result"], "Unsatisfiable");
        assert_eq!(json["steps"], 12);
    }

    #[test]
    fn test_satisfiable_carries_witness() {
        let witness = Tableau::from_root(LabeledFormula::new(WorldId(11), Proposition::eq(Term::var("x1"), -2)));
        let result = SearchResult::Satisfiable(vec![witness, Tableau::new()]);
        let json = serde_json::to_value(result.to_json(3)).unwrap();

        assert_eq!(json["result"], "Satisfiable");
        assert_eq!(json["open_branches"], 2);
        assert_eq!(json["witness"]["formulas"][0]["world"], 11);
        assert_eq!(json["witness"]["formulas"][0]["formula"], "x1 = -2");
        assert_eq!(json["witness"]["bindings"][0]["term"], "x1");
        assert_eq!(json["witness"]["bindings"][0]["value"], -2);
    }

    #[test]
    fn test_round_trip_through_text() {
        let original = SearchResult::ResourceLimit(vec![Tableau::new()]).to_json(40);
        let text = serde_json::to_string(&original).unwrap();
        let parsed: SearchResultJson = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
