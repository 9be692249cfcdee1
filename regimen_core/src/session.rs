//! Session state and intent handling.
//!
//! All user actions arrive as typed [`Intent`] events. A [`Session`] is an
//! immutable snapshot; applying an intent produces a new snapshot, which
//! makes change detection a plain comparison. The [`SessionCtx`] owns the
//! snapshot lifecycle: it loads the persisted completion record when the
//! session opens and writes it back after every completion mutation.
//!
//! Everything here runs single-threaded and to completion per event. The
//! persistence write is fire-and-forget: the in-memory map is authoritative
//! immediately, and a failed write only produces a warning.

use crate::navigation;
use crate::plan;
use crate::progress::compute_progress;
use crate::types::*;
use crate::CompletionMap;
use std::path::{Path, PathBuf};

/// A user intent produced by the render boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectDay(Day),
    AdvanceDay,
    RetreatDay,
    ToggleTab(Tab),
    ToggleChecklistItem {
        meal: MealKey,
        list: ListKind,
        index: usize,
    },
    SetMealDone {
        day: Day,
        meal: MealKey,
        done: bool,
    },
}

/// An immutable snapshot of session state
#[derive(Clone, Debug)]
pub struct Session {
    pub current_day: Day,
    pub active_tab: Tab,
    pub completion: CompletionMap,
    pub checklist: ChecklistState,
    pub total_days: Day,
}

impl Session {
    /// Start a session on day 1 with the given completion record
    pub fn new(completion: CompletionMap) -> Self {
        Self {
            current_day: 1,
            active_tab: Tab::Diet,
            completion,
            checklist: ChecklistState::default(),
            total_days: TOTAL_DAYS,
        }
    }

    /// The generated plan for the current day
    pub fn plan(&self) -> &'static DayPlan {
        plan::plan_for(self.current_day)
    }

    /// Progress derived from the current completion record
    pub fn progress(&self) -> Progress {
        compute_progress(&self.completion, self.total_days, plan::meal_keys_for)
    }

    /// The highest currently selectable day
    pub fn unlocked_up_to(&self) -> Day {
        navigation::unlocked_up_to(self.progress().accomplished, self.total_days)
    }

    /// Apply an intent, producing the next snapshot
    ///
    /// Rejected navigation (locked day, premature advance) returns a
    /// snapshot equal to the current one. The checklist scratch state is
    /// dropped whenever the applied intent lands on a different day.
    #[must_use]
    pub fn apply(&self, intent: Intent) -> Session {
        let mut next = self.clone();

        match intent {
            Intent::SelectDay(day) => {
                next.current_day = navigation::select_day(
                    self.current_day,
                    day,
                    self.progress().accomplished,
                    self.total_days,
                );
            }
            Intent::AdvanceDay => {
                next.current_day = navigation::advance(
                    self.current_day,
                    &self.completion,
                    self.total_days,
                    plan::meal_keys_for,
                );
            }
            Intent::RetreatDay => {
                next.current_day = navigation::retreat(self.current_day, self.total_days);
            }
            Intent::ToggleTab(tab) => {
                next.active_tab = tab;
            }
            Intent::ToggleChecklistItem { meal, list, index } => {
                next.checklist.toggle(meal, list, index);
            }
            Intent::SetMealDone { day, meal, done } => {
                next.completion = self.completion.set_meal(day, meal, done);
            }
        }

        if next.current_day != self.current_day {
            next.checklist = ChecklistState::default();
        }
        next
    }
}

/// Owning context for a session: snapshot plus persistence
///
/// Constructed at session start, persists on every completion mutation, and
/// is simply dropped at session end.
pub struct SessionCtx {
    store_path: PathBuf,
    session: Session,
}

impl SessionCtx {
    /// Open a session against the store file at `path`
    ///
    /// Never fails: a missing or corrupt store file yields an empty record.
    pub fn open(path: &Path) -> Self {
        let completion = CompletionMap::load(path);
        Self {
            store_path: path.to_path_buf(),
            session: Session::new(completion),
        }
    }

    /// The current snapshot
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply an intent and persist the completion record if it changed
    ///
    /// A failed write is logged and otherwise ignored; the new in-memory
    /// snapshot still becomes current.
    pub fn handle(&mut self, intent: Intent) -> &Session {
        let next = self.session.apply(intent);

        if next.completion != self.session.completion {
            if let Err(e) = next.completion.save(&self.store_path) {
                tracing::warn!(
                    "Failed to persist completion record to {:?}: {}. In-memory state kept.",
                    self.store_path,
                    e
                );
            }
        }

        self.session = next;
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::meal_keys_for;
    use crate::store::STORE_FILE;

    fn session_with_day_done(day: Day) -> Session {
        let completion = meal_keys_for(day)
            .into_iter()
            .fold(CompletionMap::default(), |m, key| m.set_meal(day, key, true));
        let mut session = Session::new(completion);
        session.current_day = day;
        session
    }

    #[test]
    fn test_new_session_starts_on_day_one() {
        let session = Session::new(CompletionMap::default());
        assert_eq!(session.current_day, 1);
        assert_eq!(session.active_tab, Tab::Diet);
        assert_eq!(session.unlocked_up_to(), 1);
    }

    #[test]
    fn test_set_meal_done_updates_completion() {
        let session = Session::new(CompletionMap::default());
        let next = session.apply(Intent::SetMealDone {
            day: 1,
            meal: MealKey::Breakfast,
            done: true,
        });

        assert!(next.completion.get(1, MealKey::Breakfast));
        assert!(!session.completion.get(1, MealKey::Breakfast));
    }

    #[test]
    fn test_advance_rejected_without_completion() {
        let session = Session::new(CompletionMap::default());
        let next = session.apply(Intent::AdvanceDay);
        assert_eq!(next.current_day, 1);
    }

    #[test]
    fn test_advance_after_completing_day() {
        let session = session_with_day_done(1);
        let next = session.apply(Intent::AdvanceDay);
        assert_eq!(next.current_day, 2);
    }

    #[test]
    fn test_checklist_resets_on_day_change() {
        let mut session = session_with_day_done(1);
        session = session.apply(Intent::ToggleChecklistItem {
            meal: MealKey::Lunch,
            list: ListKind::ShopList,
            index: 0,
        });
        assert!(session
            .checklist
            .is_checked(MealKey::Lunch, ListKind::ShopList, 0));

        let moved = session.apply(Intent::AdvanceDay);
        assert_eq!(moved.current_day, 2);
        assert!(moved.checklist.is_empty());

        // A rejected move keeps the scratch state.
        let stayed = session.apply(Intent::SelectDay(15));
        assert_eq!(stayed.current_day, 1);
        assert!(stayed
            .checklist
            .is_checked(MealKey::Lunch, ListKind::ShopList, 0));
    }

    #[test]
    fn test_retreat_keeps_checklist_only_when_day_unchanged() {
        let session = Session::new(CompletionMap::default());
        let next = session.apply(Intent::RetreatDay);
        assert_eq!(next.current_day, TOTAL_DAYS);
        assert!(next.checklist.is_empty());
    }

    #[test]
    fn test_toggle_tab() {
        let session = Session::new(CompletionMap::default());
        let next = session.apply(Intent::ToggleTab(Tab::Exercise));
        assert_eq!(next.active_tab, Tab::Exercise);
        // Tab changes never touch the checklist.
        assert_eq!(next.current_day, session.current_day);
    }

    #[test]
    fn test_ctx_persists_completion_mutations() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        let mut ctx = SessionCtx::open(&store_path);
        ctx.handle(Intent::SetMealDone {
            day: 1,
            meal: MealKey::Breakfast,
            done: true,
        });

        assert!(store_path.exists());
        let reopened = SessionCtx::open(&store_path);
        assert!(reopened.session().completion.get(1, MealKey::Breakfast));
    }

    #[test]
    fn test_ctx_does_not_write_on_pure_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);

        let mut ctx = SessionCtx::open(&store_path);
        ctx.handle(Intent::RetreatDay);
        ctx.handle(Intent::ToggleTab(Tab::Exercise));

        assert!(!store_path.exists());
    }

    #[test]
    fn test_ctx_survives_unwritable_store() {
        // Point the store at a directory so saves fail; mutations must still
        // apply in memory.
        let temp_dir = tempfile::tempdir().unwrap();
        let store_path = temp_dir.path().to_path_buf();

        let mut ctx = SessionCtx::open(&store_path);
        let session = ctx.handle(Intent::SetMealDone {
            day: 1,
            meal: MealKey::Lunch,
            done: true,
        });
        assert!(session.completion.get(1, MealKey::Lunch));
    }
}
