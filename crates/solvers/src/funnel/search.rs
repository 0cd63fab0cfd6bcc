use placeline_core::{Observer, Segment, UniformSource};

use crate::trial::mean_traversal;

use super::{
    Action, Candidate, ClampPolicy, Config, Error, Event, Solution, grid::StageGrid,
    solution::Status,
};

/// Core funnel search implementation.
///
/// Narrows `[left, right]` around each stage's winning candidate, dividing
/// the step by 10 per stage. The terminal stage's winner is the estimate.
pub(super) fn search<S, Obs>(
    segment: &Segment,
    point_count: usize,
    config: &Config,
    source: &mut S,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    S: UniformSource,
    Obs: Observer<Event, Action>,
{
    let origin = config.origin().unwrap_or(segment.start());
    if !segment.contains(origin) {
        return Err(Error::OriginOutOfBounds {
            origin,
            start: segment.start(),
            end: segment.end(),
        });
    }

    let mut left = origin;
    let mut right = segment.end();
    let mut step = 1.0;
    let mut winner = None;

    for stage in 1..=config.significant_figures() {
        step /= 10.0;

        let grid = StageGrid::new(left, right, step);
        if grid.is_empty() {
            return Err(Error::NoCandidates { stage, left, right });
        }

        let mut stage_best = None;
        for position in grid.positions() {
            let cost = mean_traversal(
                segment,
                point_count,
                position,
                config.trials_per_candidate(),
                source,
            )?;

            let best = Candidate::better_of(stage_best, Candidate::new(position, cost));
            stage_best = Some(best);

            let event = Event::Evaluated {
                stage,
                candidate: Candidate::new(position, cost),
                best,
            };
            if observer.observe(&event) == Some(Action::StopEarly) {
                return Ok(stopped(best, stage - 1));
            }
        }

        // The grid is non-empty, so the stage always has a winner.
        let Some(best) = stage_best else {
            return Err(Error::NoCandidates { stage, left, right });
        };

        let event = Event::StageCompleted { stage, step, best };
        if observer.observe(&event) == Some(Action::StopEarly) {
            return Ok(stopped(best, stage));
        }

        (left, right) = next_bounds(segment, best.position, step, config.clamp());
        winner = Some(best);
    }

    let Some(best) = winner else {
        // significant_figures >= 1, so at least one stage ran.
        return Err(Error::NoCandidates {
            stage: 1,
            left,
            right,
        });
    };

    Ok(Solution {
        status: Status::Completed,
        position: best.position,
        cost: best.cost,
        stages: config.significant_figures(),
    })
}

fn stopped(best: Candidate, stages: usize) -> Solution {
    Solution {
        status: Status::StoppedByObserver,
        position: best.position,
        cost: best.cost,
        stages,
    }
}

/// Computes the next stage's bounds around a winning position.
///
/// The historical update clamps both bounds only against the segment's
/// upper limit; the symmetric policy additionally floors them at the
/// lower one.
pub(super) fn next_bounds(
    segment: &Segment,
    position: f64,
    step: f64,
    clamp: ClampPolicy,
) -> (f64, f64) {
    let left = (position - step).min(segment.end());
    let right = (position + step).min(segment.end());

    match clamp {
        ClampPolicy::UpperOnly => (left, right),
        ClampPolicy::Symmetric => (left.max(segment.start()), right.max(segment.start())),
    }
}
