use crate::types::Location;

/// The browser's location and history stack.
///
/// URLs handed to `push_state`/`replace_state` are root-relative
/// (`/base/page/2?size=9`). Neither call reloads the page.
pub trait Navigator {
    fn location(&self) -> Location;
    fn push_state(&mut self, url: &str);
    fn replace_state(&mut self, url: &str);
}

/// Where grid items come from. Matching items against the query is the
/// source's business.
pub trait ContentSource {
    type Item;

    /// The full, unfiltered dataset.
    fn all_items(&self) -> Vec<Self::Item>;

    /// Items matching the filters currently encoded in `location`.
    fn filtered_items(&self, location: &Location) -> Vec<Self::Item>;
}

/// The rendered result grid and its "Showing x to y of z" summary line.
pub trait PostGrid<T> {
    fn populate(&mut self, items: Vec<T>);
    fn results_summary(&self) -> String;
}

/// Blocking user-facing messages.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}
