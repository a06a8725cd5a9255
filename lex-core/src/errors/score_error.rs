/// Authority-scorer errors.
///
/// Non-convergence is deliberately NOT an error: the scorer publishes the
/// best available snapshot with `converged = false` instead.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("empty graph: nothing to score")]
    EmptyGraph,

    #[error("scoring pass cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },
}
