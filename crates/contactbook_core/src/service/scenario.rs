//! Named pipeline presets.
//!
//! Each scenario fixes the descending strategy, the classification predicate,
//! the ascending re-sort strategies and the section titles.

use crate::filter::predicate::ContactFilter;
use crate::ordering::strategy::{ContactOrdering, SortDirection};
use crate::service::pipeline::{PipelineConfig, SectionTitles};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Built-in pipeline preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Variant-aware ordering in both directions; selects personal contacts
    /// whose name contains `н`.
    VariantAware,
    /// Personal-first descending ordering, name-ascending re-sort; selects
    /// personal contacts whose email contains `mail`.
    VariantPartitioned,
}

impl Scenario {
    /// Every scenario, in CLI run order.
    pub const ALL: [Scenario; 2] = [Scenario::VariantAware, Scenario::VariantPartitioned];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VariantAware => "variant-aware",
            Self::VariantPartitioned => "variant-partitioned",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ScenarioParseError> {
        match value.trim() {
            "variant-aware" => Ok(Self::VariantAware),
            "variant-partitioned" => Ok(Self::VariantPartitioned),
            other => Err(ScenarioParseError(other.to_string())),
        }
    }

    /// Builds the pipeline configuration for this scenario.
    pub fn config(self) -> PipelineConfig {
        match self {
            Self::VariantAware => PipelineConfig {
                descending: ContactOrdering::VariantAware(SortDirection::Descending),
                filter: ContactFilter::personal_name_contains("н"),
                main_ascending: ContactOrdering::VariantAware(SortDirection::Ascending),
                selected_ascending: ContactOrdering::VariantAware(SortDirection::Ascending),
                titles: SectionTitles {
                    sorted_descending: "Contacts sorted descending".to_string(),
                    selected: "Selected contacts".to_string(),
                    main_ascending: "Main contacts (ascending)".to_string(),
                    selected_ascending: "Selected contacts (ascending)".to_string(),
                },
            },
            Self::VariantPartitioned => PipelineConfig {
                descending: ContactOrdering::VariantPartitioned,
                filter: ContactFilter::personal_email_contains("mail"),
                main_ascending: ContactOrdering::ByName(SortDirection::Ascending),
                selected_ascending: ContactOrdering::ByName(SortDirection::Ascending),
                titles: SectionTitles {
                    sorted_descending: "Contacts sorted descending".to_string(),
                    selected: "Selected contacts (email contains 'mail')".to_string(),
                    main_ascending: "Main contacts (ascending by name)".to_string(),
                    selected_ascending: "Selected contacts (ascending by name)".to_string(),
                },
            },
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown scenario name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioParseError(pub String);

impl Display for ScenarioParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported scenario `{}`; expected variant-aware|variant-partitioned",
            self.0
        )
    }
}

impl Error for ScenarioParseError {}

#[cfg(test)]
mod tests {
    use super::{Scenario, ScenarioParseError};

    #[test]
    fn parses_every_scenario_id() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::parse(scenario.as_str()), Ok(scenario));
        }
    }

    #[test]
    fn rejects_unknown_scenario() {
        let err = Scenario::parse("lambdas").expect_err("unknown id must fail");
        assert_eq!(err, ScenarioParseError("lambdas".to_string()));
        assert!(err.to_string().contains("variant-aware"));
    }
}
