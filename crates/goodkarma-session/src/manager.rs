//! Session Manager
//!
//! Drives sessions through the question catalog. The next question is always
//! computed from the stored cursor.

use goodkarma_store::{MemoryStore, Store, StoreError};

use crate::catalog::{Question, QuestionCatalog};
use crate::error::SessionError;
use crate::session::{Answer, SessionRecord, UserInfo};
use crate::Result;

pub const COMPLETION_MESSAGE: &str = "All questions completed!";

/// Outcome of an accepted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next(Question),
    Complete,
}

pub struct SessionManager<S = MemoryStore<SessionRecord>> {
    store: S,
    catalog: QuestionCatalog,
    /// Reject answers whose question id is not the expected one
    strict_order: bool,
}

impl SessionManager {
    /// In-memory manager over the built-in triage catalog
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), QuestionCatalog::triage())
    }
}

impl<S: Store<SessionRecord>> SessionManager<S> {
    pub fn new(store: S, catalog: QuestionCatalog) -> Self {
        Self {
            store,
            catalog,
            strict_order: false,
        }
    }

    pub fn with_strict_order(mut self, strict: bool) -> Self {
        self.strict_order = strict;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Start a new session and return the first question
    pub fn start(&self, session_id: &str, user_info: UserInfo) -> Result<Question> {
        let first = self
            .catalog
            .first()
            .cloned()
            .ok_or(SessionError::EmptyCatalog)?;

        let record = SessionRecord::new(session_id.to_string(), user_info);
        self.store
            .insert(session_id, record)
            .map_err(|e| match e {
                StoreError::AlreadyExists(id) => SessionError::AlreadyExists(id),
            })?;

        tracing::info!(
            session_id = %session_id,
            total_questions = self.catalog.len(),
            "Started session"
        );

        Ok(first)
    }

    /// Record an answer and return what comes next.
    ///
    /// The supplied `question_id` is stored as given; the next question is
    /// picked from the session's cursor.
    pub fn submit(&self, session_id: &str, question_id: i64, answer: String) -> Result<Advance> {
        let total = self.catalog.len();
        let strict = self.strict_order;

        let answered = self
            .store
            .update(session_id, |record| -> Result<usize> {
                if record.state(total).is_complete() {
                    return Err(SessionError::AlreadyComplete(record.id.clone()));
                }

                let expected = record.next_question_id();
                if question_id != expected {
                    if strict {
                        return Err(SessionError::QuestionMismatch {
                            expected,
                            got: question_id,
                        });
                    }
                    tracing::warn!(
                        session_id = %record.id,
                        expected,
                        got = question_id,
                        "Answer submitted for unexpected question"
                    );
                }

                record.record_answer(question_id, answer);

                tracing::debug!(
                    session_id = %record.id,
                    question_id,
                    answered = record.answer_count(),
                    state = %record.state(total),
                    "Recorded answer"
                );

                Ok(record.question_index)
            })?
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))??;

        if answered >= total {
            tracing::info!(session_id = %session_id, answered, "Session completed");
            return Ok(Advance::Complete);
        }

        let next_id = u32::try_from(answered + 1).unwrap_or(u32::MAX);
        self.catalog
            .get(next_id)
            .cloned()
            .map(Advance::Next)
            .ok_or(SessionError::EmptyCatalog)
    }

    /// Drop a session. Unknown ids are ignored.
    ///
    /// Returns whether a session was removed.
    pub fn reset(&self, session_id: &str) -> Result<bool> {
        let removed = self.store.delete(session_id)?;

        tracing::info!(session_id = %session_id, removed, "Reset session");

        Ok(removed)
    }

    /// Answers in submission order
    pub fn answers(&self, session_id: &str) -> Result<Vec<Answer>> {
        Ok(self.get_session(session_id)?.answers)
    }

    pub fn get_session(&self, session_id: &str) -> Result<SessionRecord> {
        self.store
            .get(session_id)?
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    pub fn list_sessions(&self) -> Result<Vec<String>> {
        Ok(self.store.list()?)
    }

    pub fn session_count(&self) -> Result<usize> {
        Ok(self.store.len()?)
    }
}

impl<S: Clone> Clone for SessionManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            catalog: self.catalog.clone(),
            strict_order: self.strict_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> UserInfo {
        UserInfo {
            name: "Alex".to_string(),
            age: 30,
            gender: "F".to_string(),
            phone_number: None,
            email: None,
            known_illnesses: None,
            active_medicines: None,
        }
    }

    #[test]
    fn test_start_returns_first_question() {
        let manager = SessionManager::in_memory();

        let first = manager.start("s1", alex()).unwrap();
        assert_eq!(first.id, 1);
        assert!(first.text.contains("sensory overload"));
        assert_eq!(first.options, vec!["Yes", "No"]);

        assert!(manager.answers("s1").unwrap().is_empty());
        assert_eq!(manager.get_session("s1").unwrap().user_info, alex());
    }

    #[test]
    fn test_start_twice_fails() {
        let manager = SessionManager::in_memory();
        manager.start("s1", alex()).unwrap();

        let err = manager.start("s1", alex()).unwrap_err();
        assert!(matches!(err, SessionError::AlreadyExists(id) if id == "s1"));
        assert_eq!(manager.session_count().unwrap(), 1);
    }

    #[test]
    fn test_full_walkthrough() {
        let manager = SessionManager::in_memory();
        manager.start("s1", alex()).unwrap();

        // Answer 1 -> question 2
        match manager.submit("s1", 1, "Yes".to_string()).unwrap() {
            Advance::Next(question) => {
                assert_eq!(question.id, 2);
                assert!(question.text.contains("moods or worries"));
            }
            Advance::Complete => panic!("expected question 2"),
        }

        // k-th answer returns question k+1 while k < N
        for k in 2..6u32 {
            let advance = manager.submit("s1", i64::from(k), "No".to_string()).unwrap();
            assert_eq!(
                advance,
                Advance::Next(manager.catalog().get(k + 1).unwrap().clone())
            );
        }

        let last = manager.submit("s1", 6, "Yes".to_string()).unwrap();
        assert_eq!(last, Advance::Complete);

        let answers = manager.answers("s1").unwrap();
        assert_eq!(answers.len(), 6);
        let ids: Vec<i64> = answers.iter().map(|a| a.question_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(answers[0].answer, "Yes");
    }

    #[test]
    fn test_submit_after_completion_rejected() {
        let catalog = QuestionCatalog::from_texts(["Only?"]).unwrap();
        let manager = SessionManager::new(MemoryStore::new(), catalog);
        manager.start("s1", alex()).unwrap();

        assert_eq!(
            manager.submit("s1", 1, "Yes".to_string()).unwrap(),
            Advance::Complete
        );

        let err = manager.submit("s1", 2, "Yes".to_string()).unwrap_err();
        assert!(matches!(err, SessionError::AlreadyComplete(_)));
        assert_eq!(manager.answers("s1").unwrap().len(), 1);
        assert_eq!(manager.get_session("s1").unwrap().question_index, 1);
    }

    #[test]
    fn test_next_question_ignores_client_id() {
        let manager = SessionManager::in_memory();
        manager.start("s1", alex()).unwrap();

        let advance = manager.submit("s1", 5, "Yes".to_string()).unwrap();
        assert!(matches!(advance, Advance::Next(q) if q.id == 2));

        let answers = manager.answers("s1").unwrap();
        assert_eq!(answers[0].question_id, 5);
    }

    #[test]
    fn test_out_of_range_question_ids_stored_as_given() {
        let manager = SessionManager::in_memory();
        manager.start("s1", alex()).unwrap();

        let advance = manager.submit("s1", -1, "Yes".to_string()).unwrap();
        assert!(matches!(advance, Advance::Next(q) if q.id == 2));
        let advance = manager.submit("s1", 0, "No".to_string()).unwrap();
        assert!(matches!(advance, Advance::Next(q) if q.id == 3));
        manager
            .submit("s1", 5_000_000_000, "No".to_string())
            .unwrap();

        let ids: Vec<i64> = manager
            .answers("s1")
            .unwrap()
            .iter()
            .map(|a| a.question_id)
            .collect();
        assert_eq!(ids, vec![-1, 0, 5_000_000_000]);
    }

    #[test]
    fn test_concurrent_submits_are_not_lost() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 5;

        let texts: Vec<String> = (1..=THREADS * PER_THREAD * 2)
            .map(|n| format!("Question {n}?"))
            .collect();
        let catalog = QuestionCatalog::from_texts(texts).unwrap();
        let manager = SessionManager::new(MemoryStore::new(), catalog);
        manager.start("shared", alex()).unwrap();

        std::thread::scope(|scope| {
            for worker in 0..THREADS {
                let manager = &manager;
                scope.spawn(move || {
                    for n in 0..PER_THREAD {
                        let question_id = i64::try_from(worker * PER_THREAD + n + 1).unwrap();
                        manager
                            .submit("shared", question_id, "Yes".to_string())
                            .unwrap();
                    }
                });
            }
        });

        let record = manager.get_session("shared").unwrap();
        assert_eq!(record.answers.len(), record.question_index);
        assert_eq!(record.question_index, THREADS * PER_THREAD);

        let mut ids: Vec<i64> = record.answers.iter().map(|a| a.question_id).collect();
        ids.sort_unstable();
        let expected: Vec<i64> = (1..=20).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_strict_order_rejects_mismatch() {
        let manager = SessionManager::in_memory().with_strict_order(true);
        manager.start("s1", alex()).unwrap();

        let err = manager.submit("s1", 3, "Yes".to_string()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::QuestionMismatch {
                expected: 1,
                got: 3
            }
        ));
        assert!(manager.answers("s1").unwrap().is_empty());

        assert!(manager.submit("s1", 1, "Yes".to_string()).is_ok());
    }

    #[test]
    fn test_unknown_session() {
        let manager = SessionManager::in_memory();

        assert!(matches!(
            manager.submit("ghost", 1, "Yes".to_string()),
            Err(SessionError::NotFound(_))
        ));
        assert!(matches!(
            manager.answers("ghost"),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn test_reset() {
        let manager = SessionManager::in_memory();

        // Unknown id is fine
        assert!(!manager.reset("nobody").unwrap());

        manager.start("s1", alex()).unwrap();
        manager.submit("s1", 1, "Yes".to_string()).unwrap();
        assert!(manager.reset("s1").unwrap());

        // Behaves as if it never existed
        assert!(matches!(
            manager.answers("s1"),
            Err(SessionError::NotFound(_))
        ));
        let first = manager.start("s1", alex()).unwrap();
        assert_eq!(first.id, 1);
        assert!(manager.answers("s1").unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_sessions() {
        let manager = SessionManager::in_memory();
        let other = manager.clone();

        manager.start("b", alex()).unwrap();
        other.start("a", alex()).unwrap();

        assert_eq!(manager.list_sessions().unwrap(), vec!["a", "b"]);
    }
}
