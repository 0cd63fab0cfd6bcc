/// Actions an observer can take during the funnel search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the best candidate found so far.
    StopEarly,
}
