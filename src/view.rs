//! Filtered and sorted views over the task collection.
//!
//! `derive_view` is a pure function of the tasks and a `ViewQuery`: it never
//! touches the store, and calling it twice with the same inputs gives the same
//! ordering.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::fields::{Filter, Priority, SortKey, Status};
use crate::task::Task;

/// Active search, filter and sort criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub status: Filter<Status>,
    pub priority: Filter<Priority>,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_status_filter(&mut self, filter: Filter<Status>) {
        self.status = filter;
    }

    pub fn set_priority_filter(&mut self, filter: Filter<Priority>) {
        self.priority = filter;
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    /// Whether any criterion narrows the view.
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || self.status != Filter::Any || self.priority != Filter::Any
    }

    /// Whether `task` passes every active filter.
    pub fn matches(&self, task: &Task) -> bool {
        matches_search(task, &self.search)
            && self.status.accepts(&task.status)
            && self.priority.accepts(&task.priority)
    }
}

/// Case-insensitive substring match against title, description and tags.
/// An empty query matches everything.
pub fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
        || task.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Compare two tasks under `key`. `Insertion` treats every pair as equal.
pub fn compare_by(key: SortKey, a: &Task, b: &Task) -> Ordering {
    match key {
        SortKey::DueDate => a.due_date.cmp(&b.due_date),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Status => a.status.rank().cmp(&b.status.rank()),
        SortKey::Title => title_collation_key(&a.title).cmp(&title_collation_key(&b.title)),
        SortKey::Insertion => Ordering::Equal,
    }
}

/// Sort key for titles, compared level by level.
///
/// Base letters decide first, so "Écrire" sorts with the e's rather than after
/// "z". Accents break ties next, then case with lowercase first. Titles that
/// differ in none of these compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TitleKey {
    base: String,
    accented: String,
    uppercase: Vec<bool>,
}

/// Build the collation key for a title.
pub fn title_collation_key(title: &str) -> TitleKey {
    let accented = title.to_lowercase();
    let base = accented.nfd().filter(|c| !is_combining_mark(*c)).collect();
    TitleKey {
        base,
        accented,
        uppercase: title.chars().map(char::is_uppercase).collect(),
    }
}

/// Filter `tasks` by `query` and sort the survivors.
///
/// The sort is stable, so tasks with equal keys keep their order in `tasks`.
pub fn derive_view<'a, I>(tasks: I, query: &ViewQuery) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut view: Vec<&Task> = tasks.into_iter().filter(|t| query.matches(t)).collect();
    if query.sort == SortKey::Title {
        // Compute each key once rather than per comparison.
        view.sort_by_cached_key(|t| title_collation_key(&t.title));
    } else {
        view.sort_by(|a, b| compare_by(query.sort, a, b));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_tasks;
    use crate::task::TaskId;
    use pretty_assertions::assert_eq;

    fn ids(view: &[&Task]) -> Vec<u64> {
        view.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_due_date() {
        let tasks = sample_tasks();
        let view = derive_view(&tasks, &ViewQuery::new());
        assert_eq!(ids(&view), vec![5, 6, 8, 2, 1, 3, 7, 4]);
    }

    #[test]
    fn test_status_filter_in_progress() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_status_filter(Filter::Only(Status::InProgress));
        q.set_sort(SortKey::Insertion);
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1, 2, 6, 8]);

        q.set_sort(SortKey::Priority);
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1, 2, 6, 8]);
    }

    #[test]
    fn test_priority_sort_is_stable_for_ties() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Priority);
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1, 2, 6, 8, 3, 4, 7, 5]);
    }

    #[test]
    fn test_status_sort_ranks() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Status);
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1, 2, 6, 8, 3, 4, 7, 5]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut tasks = sample_tasks();
        tasks[3].title = "apple pie".into();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Title);
        let view = derive_view(&tasks, &q);
        assert_eq!(view[0].title, "apple pie");
        let keys: Vec<TitleKey> = view.iter().map(|t| title_collation_key(&t.title)).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    fn titles_sorted(titles: &[&str]) -> Vec<String> {
        let mut tasks = sample_tasks();
        tasks.truncate(titles.len());
        for (task, title) in tasks.iter_mut().zip(titles) {
            task.title = title.to_string();
        }
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Title);
        derive_view(&tasks, &q).iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_title_sort_places_accented_letters_with_their_base() {
        assert_eq!(
            titles_sorted(&["Zebra stripes", "Écrire la doc"]),
            vec!["Écrire la doc", "Zebra stripes"]
        );
        assert_eq!(
            titles_sorted(&["Öl wechseln", "Zahlen prüfen", "Oben anfangen", "ändern"]),
            vec!["ändern", "Oben anfangen", "Öl wechseln", "Zahlen prüfen"]
        );
    }

    #[test]
    fn test_title_sort_tie_breaks() {
        assert_eq!(titles_sorted(&["résumé", "resume", "Resume"]), vec!["resume", "Resume", "résumé"]);
    }

    #[test]
    fn test_search_hits_description_and_tags() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Insertion);

        q.set_search("BACKEND");
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![2, 6]);

        q.set_search("jwt");
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![2]);

        q.set_search("ui/ux");
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1]);

        q.set_search("no such thing");
        assert!(derive_view(&tasks, &q).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Insertion);
        q.set_search("design");
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![1, 5]);
        q.set_priority_filter(Filter::Only(Priority::Low));
        assert_eq!(ids(&derive_view(&tasks, &q)), vec![5]);
        q.set_status_filter(Filter::Only(Status::Todo));
        assert!(derive_view(&tasks, &q).is_empty());
    }

    #[test]
    fn test_removing_a_filter_never_drops_tasks() {
        let tasks = sample_tasks();
        let mut narrow = ViewQuery::new();
        narrow.set_search("a");
        narrow.set_status_filter(Filter::Only(Status::Todo));
        narrow.set_priority_filter(Filter::Only(Priority::Medium));
        let narrow_ids = ids(&derive_view(&tasks, &narrow));

        let mut wider = narrow.clone();
        wider.set_status_filter(Filter::Any);
        let wider_ids = ids(&derive_view(&tasks, &wider));
        assert!(narrow_ids.iter().all(|id| wider_ids.contains(id)));

        wider.set_search("");
        let widest_ids = ids(&derive_view(&tasks, &wider));
        assert!(wider_ids.iter().all(|id| widest_ids.contains(id)));
    }

    #[test]
    fn test_derive_view_is_repeatable_and_non_mutating() {
        let tasks = sample_tasks();
        let snapshot = tasks.clone();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::Title);
        let first = ids(&derive_view(&tasks, &q));
        let second = ids(&derive_view(&tasks, &q));
        assert_eq!(first, second);
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_insertion_sort_keeps_input_order() {
        let tasks = sample_tasks();
        let mut q = ViewQuery::new();
        q.set_sort(SortKey::parse_lenient("whatever"));
        let view = derive_view(&tasks, &q);
        assert_eq!(view[0].id, TaskId::new(1));
        assert_eq!(ids(&view), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_is_filtering() {
        let mut q = ViewQuery::new();
        assert!(!q.is_filtering());
        q.set_sort(SortKey::Title);
        assert!(!q.is_filtering());
        q.set_priority_filter(Filter::Only(Priority::High));
        assert!(q.is_filtering());
    }
}
