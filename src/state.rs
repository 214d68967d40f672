//! Session State
//!
//! The in-memory session store: subjects, their ingested documents, and
//! their reports, plus the single selected-subject pointer. State lives only
//! for the process lifetime; nothing here touches disk.
//!
//! All mutation funnels through the named update functions below; the store
//! assumes a single writer. Subjects own their documents and reports;
//! deleting a subject drops both. Reports only cite documents by id, so
//! documents can be removed without touching report text.

use serde_json::Value;

use argus_core::progress::{ProgressStep, Stage, StageStatus};

use crate::models::document::IngestedDocument;
use crate::models::report::{Evidence, FinalReport};
use crate::models::subject::Subject;
use crate::utils::error::{AppError, AppResult};

/// All session data: subjects with their documents and reports, and the
/// currently selected subject.
#[derive(Debug, Default)]
pub struct SessionState {
    pub subjects: Vec<Subject>,
    pub selected_subject_id: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subject and select it. Matching an existing name
    /// (case-insensitive) selects the existing subject instead.
    pub fn add_subject(&mut self, name: &str) -> AppResult<&Subject> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Subject name cannot be empty"));
        }
        let existing = self
            .subjects
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name));
        let index = match existing {
            Some(index) => index,
            None => {
                self.subjects.push(Subject::new(name));
                self.subjects.len() - 1
            }
        };
        self.selected_subject_id = Some(self.subjects[index].id.clone());
        Ok(&self.subjects[index])
    }

    /// Remove a subject and everything it owns. Clears the selection only
    /// when the deleted subject was the selected one.
    pub fn delete_subject(&mut self, subject_id: &str) -> AppResult<()> {
        let index = self.subject_index(subject_id)?;
        self.subjects.remove(index);
        if self.selected_subject_id.as_deref() == Some(subject_id) {
            self.selected_subject_id = None;
        }
        Ok(())
    }

    pub fn select_subject(&mut self, subject_id: &str) -> AppResult<()> {
        self.subject_index(subject_id)?;
        self.selected_subject_id = Some(subject_id.to_string());
        Ok(())
    }

    pub fn subject(&self, subject_id: &str) -> AppResult<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| AppError::not_found(format!("No subject with id {subject_id}")))
    }

    pub fn selected_subject(&self) -> Option<&Subject> {
        let id = self.selected_subject_id.as_deref()?;
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Append documents to a subject's record set.
    pub fn add_documents(
        &mut self,
        subject_id: &str,
        documents: Vec<IngestedDocument>,
    ) -> AppResult<usize> {
        let index = self.subject_index(subject_id)?;
        let count = documents.len();
        self.subjects[index].documents.extend(documents);
        Ok(count)
    }

    /// Create a report for a new analysis run, most recent first, with one
    /// pending step per declared stage. Returns the report id.
    pub fn begin_report(
        &mut self,
        subject_id: &str,
        statement: &str,
        stages: &[Stage],
    ) -> AppResult<String> {
        let index = self.subject_index(subject_id)?;
        let report = FinalReport::new(statement, stages);
        let id = report.id.clone();
        self.subjects[index].reports.insert(0, report);
        Ok(id)
    }

    /// Apply one progress callback to a report's step list.
    ///
    /// Known steps must follow the legal transitions (pending to running,
    /// running to completed or error). A step name not declared up front is
    /// appended as it starts running; the planned pipeline discovers its
    /// stages this way. A completed step may go back to running, since a
    /// plan can invoke the same tool more than once. Finished reports accept
    /// no further transitions.
    pub fn apply_progress(
        &mut self,
        subject_id: &str,
        report_id: &str,
        step_name: &str,
        status: StageStatus,
        details: Option<Value>,
    ) -> AppResult<()> {
        let report = self.report_mut(subject_id, report_id)?;
        if report.is_finished() {
            return Err(AppError::validation(format!(
                "Report {report_id} is finished and accepts no further progress"
            )));
        }
        match report.progress.iter_mut().find(|s| s.name == step_name) {
            Some(step) => {
                let revisit =
                    step.status == StageStatus::Completed && status == StageStatus::Running;
                if !step.status.can_transition_to(status) && !revisit {
                    return Err(AppError::validation(format!(
                        "Illegal progress transition for '{step_name}': {} to {status}",
                        step.status
                    )));
                }
                step.status = status;
                if details.is_some() {
                    step.details = details;
                }
            }
            None => {
                report.progress.push(ProgressStep {
                    name: step_name.to_string(),
                    status,
                    details,
                });
            }
        }
        Ok(())
    }

    /// Finalize a successful run: store the report text and evidence and
    /// mark every step completed.
    pub fn complete_report(
        &mut self,
        subject_id: &str,
        report_id: &str,
        markdown_report: String,
        evidence: Evidence,
    ) -> AppResult<()> {
        let report = self.report_mut(subject_id, report_id)?;
        report.markdown_report = markdown_report;
        report.evidence = evidence;
        for step in &mut report.progress {
            step.status = StageStatus::Completed;
        }
        Ok(())
    }

    /// Record a failed run. The failing step already carries its error
    /// status; the remaining steps stay pending and the report text carries
    /// the consolidated error message.
    pub fn fail_report(
        &mut self,
        subject_id: &str,
        report_id: &str,
        message: &str,
    ) -> AppResult<()> {
        let report = self.report_mut(subject_id, report_id)?;
        report.markdown_report = message.to_string();
        Ok(())
    }

    pub fn report(&self, subject_id: &str, report_id: &str) -> AppResult<&FinalReport> {
        self.subject(subject_id)?
            .reports
            .iter()
            .find(|r| r.id == report_id)
            .ok_or_else(|| AppError::not_found(format!("No report with id {report_id}")))
    }

    fn subject_index(&self, subject_id: &str) -> AppResult<usize> {
        self.subjects
            .iter()
            .position(|s| s.id == subject_id)
            .ok_or_else(|| AppError::not_found(format!("No subject with id {subject_id}")))
    }

    fn report_mut(&mut self, subject_id: &str, report_id: &str) -> AppResult<&mut FinalReport> {
        let index = self.subject_index(subject_id)?;
        self.subjects[index]
            .reports
            .iter_mut()
            .find(|r| r.id == report_id)
            .ok_or_else(|| AppError::not_found(format!("No report with id {report_id}")))
    }
}
