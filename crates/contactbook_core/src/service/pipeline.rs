//! Contact collection pipeline.
//!
//! # Responsibility
//! - Run sort / partition / re-sort over an owned contact list.
//! - Capture the display text of every stage as titled report sections.
//!
//! # Invariants
//! - Stages run in fixed order and each is a total function; `run` never fails.
//! - Partitioning moves records into the secondary `VecDeque`; no record is
//!   cloned, and every input record ends in exactly one output collection.
//! - Records are dropped with whichever collection owns them last.

use crate::filter::partition::move_matching;
use crate::filter::predicate::ContactFilter;
use crate::model::contact::Contact;
use crate::ordering::strategy::ContactOrdering;
use log::debug;
use std::collections::VecDeque;

/// Titles for the four display stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitles {
    pub sorted_descending: String,
    pub selected: String,
    pub main_ascending: String,
    pub selected_ascending: String,
}

/// Strategies and predicate driving one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Strategy for the first, descending sort of the main collection.
    pub descending: ContactOrdering,
    /// Records matching this predicate move to the secondary collection.
    pub filter: ContactFilter,
    /// Strategy for the final sort of the main collection.
    pub main_ascending: ContactOrdering,
    /// Strategy for the final sort of the secondary collection.
    pub selected_ascending: ContactOrdering,
    pub titles: SectionTitles,
}

/// One titled block of display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn capture<'a>(title: &str, contacts: impl IntoIterator<Item = &'a Contact>) -> Self {
        Self {
            title: title.to_string(),
            lines: contacts.into_iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Display sections in the order they were produced.
    pub sections: Vec<ReportSection>,
    /// Main collection after the final sort.
    pub main: Vec<Contact>,
    /// Secondary collection after the final sort.
    pub selected: VecDeque<Contact>,
}

impl PipelineReport {
    /// Renders every section as `=== title ===` followed by one line per
    /// contact, with a blank line between sections.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = format!("=== {} ===\n", section.title);
                for line in &section.lines {
                    block.push_str(line);
                    block.push('\n');
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pipeline runner bound to one configuration.
#[derive(Debug, Clone)]
pub struct ContactPipeline {
    config: PipelineConfig,
}

impl ContactPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs every stage over `contacts`, taking ownership of the records.
    pub fn run(&self, mut contacts: Vec<Contact>) -> PipelineReport {
        let config = &self.config;
        let mut sections = Vec::with_capacity(4);
        debug!(
            "event=pipeline_stage module=service stage=populate count={}",
            contacts.len()
        );

        config.descending.sort(&mut contacts);
        debug!(
            "event=pipeline_stage module=service stage=sort_descending strategy={} count={}",
            config.descending,
            contacts.len()
        );
        sections.push(ReportSection::capture(
            &config.titles.sorted_descending,
            &contacts,
        ));

        let mut selected = move_matching(&mut contacts, &config.filter);
        debug!(
            "event=pipeline_stage module=service stage=partition kept={} selected={}",
            contacts.len(),
            selected.len()
        );
        sections.push(ReportSection::capture(&config.titles.selected, &selected));

        config.main_ascending.sort(&mut contacts);
        config.selected_ascending.sort(selected.make_contiguous());
        debug!(
            "event=pipeline_stage module=service stage=sort_ascending main_strategy={} selected_strategy={}",
            config.main_ascending, config.selected_ascending
        );
        sections.push(ReportSection::capture(
            &config.titles.main_ascending,
            &contacts,
        ));
        sections.push(ReportSection::capture(
            &config.titles.selected_ascending,
            &selected,
        ));

        PipelineReport {
            sections,
            main: contacts,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PipelineReport, ReportSection};
    use std::collections::VecDeque;

    #[test]
    fn render_separates_sections_with_blank_line() {
        let report = PipelineReport {
            sections: vec![
                ReportSection {
                    title: "First".to_string(),
                    lines: vec!["a".to_string(), "b".to_string()],
                },
                ReportSection {
                    title: "Second".to_string(),
                    lines: Vec::new(),
                },
            ],
            main: Vec::new(),
            selected: VecDeque::new(),
        };

        assert_eq!(report.render(), "=== First ===\na\nb\n\n=== Second ===\n");
    }
}
